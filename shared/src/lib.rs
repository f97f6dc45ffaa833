use serde::{Deserialize, Serialize};

/// Discriminant identifying which of the four content variants an item is.
///
/// The tag is assigned once, from the collection the item was drawn from,
/// and is used downstream for routing, icon selection, and filter dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Event,
    Restaurant,
    Attraction,
    Playground,
}

impl ContentType {
    /// Wire/display form of the discriminant ("event", "restaurant", ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Event => "event",
            ContentType::Restaurant => "restaurant",
            ContentType::Attraction => "attraction",
            ContentType::Playground => "playground",
        }
    }

    /// Map a pluralized category token ("events", "restaurants", ...) to the
    /// discriminant it names. Matching is case-insensitive. Unrecognized
    /// tokens return `None`; callers treat that as "no constraint".
    pub fn from_category_token(token: &str) -> Option<Self> {
        match token.trim().to_lowercase().as_str() {
            "events" => Some(ContentType::Event),
            "restaurants" => Some(ContentType::Restaurant),
            "attractions" => Some(ContentType::Attraction),
            "playgrounds" => Some(ContentType::Playground),
            _ => None,
        }
    }
}

/// A local event (concert, market, festival, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub enhanced_description: Option<String>,
    pub original_description: Option<String>,
    pub location: Option<String>,
    pub venue: Option<String>,
    pub category: Option<String>,
    pub price: Option<String>,
    /// Event date as an ISO-8601 day or RFC 3339 timestamp string.
    pub date: Option<String>,
    pub source_url: Option<String>,
    pub city: Option<String>,
}

/// A restaurant opening announcement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RestaurantOpening {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub enhanced_description: Option<String>,
    pub original_description: Option<String>,
    pub location: Option<String>,
    pub cuisine: Option<String>,
    pub price: Option<String>,
    /// Confirmed opening date, when known (ISO-8601 string).
    pub opening_date: Option<String>,
    /// Free-text timeframe ("Spring 2026") used when no exact date exists.
    pub opening_timeframe: Option<String>,
    pub source_url: Option<String>,
    pub city: Option<String>,
}

/// A permanent attraction (museum, park, venue, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attraction {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub enhanced_description: Option<String>,
    pub original_description: Option<String>,
    pub location: Option<String>,
    pub category: Option<String>,
    pub price: Option<String>,
    pub source_url: Option<String>,
    pub city: Option<String>,
}

/// A playground listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Playground {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub enhanced_description: Option<String>,
    pub original_description: Option<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    pub source_url: Option<String>,
    pub city: Option<String>,
}

/// One unit of displayable local-guide content, tagged with its variant.
///
/// The serde tag puts the discriminant on the wire as `"type"`, matching the
/// tagging the dashboard performs when it concatenates the four collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentItem {
    Event(Event),
    Restaurant(RestaurantOpening),
    Attraction(Attraction),
    Playground(Playground),
}

impl ContentItem {
    pub fn content_type(&self) -> ContentType {
        match self {
            ContentItem::Event(_) => ContentType::Event,
            ContentItem::Restaurant(_) => ContentType::Restaurant,
            ContentItem::Attraction(_) => ContentType::Attraction,
            ContentItem::Playground(_) => ContentType::Playground,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            ContentItem::Event(e) => &e.id,
            ContentItem::Restaurant(r) => &r.id,
            ContentItem::Attraction(a) => &a.id,
            ContentItem::Playground(p) => &p.id,
        }
    }

    /// Display title: `title` for events, `name` for everything else.
    pub fn title_or_name(&self) -> &str {
        match self {
            ContentItem::Event(e) => &e.title,
            ContentItem::Restaurant(r) => &r.name,
            ContentItem::Attraction(a) => &a.name,
            ContentItem::Playground(p) => &p.name,
        }
    }

    /// Best available description: enhanced, then original, then plain.
    /// Empty strings are skipped, not preferred.
    pub fn description(&self) -> Option<&str> {
        let (enhanced, original, plain) = match self {
            ContentItem::Event(e) => (
                &e.enhanced_description,
                &e.original_description,
                &e.description,
            ),
            ContentItem::Restaurant(r) => (
                &r.enhanced_description,
                &r.original_description,
                &r.description,
            ),
            ContentItem::Attraction(a) => (
                &a.enhanced_description,
                &a.original_description,
                &a.description,
            ),
            ContentItem::Playground(p) => (
                &p.enhanced_description,
                &p.original_description,
                &p.description,
            ),
        };
        [enhanced, original, plain]
            .into_iter()
            .filter_map(|d| d.as_deref())
            .find(|d| !d.is_empty())
    }

    pub fn location(&self) -> Option<&str> {
        match self {
            ContentItem::Event(e) => e.location.as_deref(),
            ContentItem::Restaurant(r) => r.location.as_deref(),
            ContentItem::Attraction(a) => a.location.as_deref(),
            ContentItem::Playground(p) => p.location.as_deref(),
        }
    }

    /// Venue is only carried by events.
    pub fn venue(&self) -> Option<&str> {
        match self {
            ContentItem::Event(e) => e.venue.as_deref(),
            _ => None,
        }
    }

    /// Cuisine is only carried by restaurant openings.
    pub fn cuisine(&self) -> Option<&str> {
        match self {
            ContentItem::Restaurant(r) => r.cuisine.as_deref(),
            _ => None,
        }
    }

    pub fn category(&self) -> Option<&str> {
        match self {
            ContentItem::Event(e) => e.category.as_deref(),
            ContentItem::Attraction(a) => a.category.as_deref(),
            _ => None,
        }
    }

    pub fn price(&self) -> Option<&str> {
        match self {
            ContentItem::Event(e) => e.price.as_deref(),
            ContentItem::Restaurant(r) => r.price.as_deref(),
            ContentItem::Attraction(a) => a.price.as_deref(),
            ContentItem::Playground(_) => None,
        }
    }

    /// The date-bearing attribute for this variant: `date` for events,
    /// `opening_date` for restaurant openings. Attractions and playgrounds
    /// carry no date.
    pub fn date_str(&self) -> Option<&str> {
        match self {
            ContentItem::Event(e) => e.date.as_deref(),
            ContentItem::Restaurant(r) => r.opening_date.as_deref(),
            ContentItem::Attraction(_) | ContentItem::Playground(_) => None,
        }
    }
}

/// Named relative-time window computed against the current day.
///
/// Unknown tokens deserialize to `Other` and impose no constraint when
/// filtering, same permissive policy as unrecognized category tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePreset {
    Today,
    Tomorrow,
    ThisWeek,
    ThisWeekend,
    NextWeek,
    Other,
}

impl DatePreset {
    pub fn from_token(token: &str) -> Self {
        match token.trim().to_lowercase().as_str() {
            "today" => DatePreset::Today,
            "tomorrow" => DatePreset::Tomorrow,
            "this-week" => DatePreset::ThisWeek,
            "this-weekend" => DatePreset::ThisWeekend,
            "next-week" => DatePreset::NextWeek,
            _ => DatePreset::Other,
        }
    }

    pub fn as_token(&self) -> &'static str {
        match self {
            DatePreset::Today => "today",
            DatePreset::Tomorrow => "tomorrow",
            DatePreset::ThisWeek => "this-week",
            DatePreset::ThisWeekend => "this-weekend",
            DatePreset::NextWeek => "next-week",
            DatePreset::Other => "any-date",
        }
    }
}

impl Serialize for DatePreset {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_token())
    }
}

impl<'de> Deserialize<'de> for DatePreset {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        Ok(DatePreset::from_token(&token))
    }
}

/// Date constraint attached to the filter criteria.
///
/// Constructed by the filter bar, passed down immutably, consumed once per
/// filtering pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum DateFilter {
    /// Item's date (truncated to day) must equal `start`.
    Single { start: chrono::NaiveDate },
    /// Item's date must fall within `[start, end]` inclusive; open-ended
    /// when `end` is absent.
    Range {
        start: chrono::NaiveDate,
        end: Option<chrono::NaiveDate>,
    },
    /// Named window computed against the current day.
    Preset { preset: DatePreset },
}

/// All active (non-sentinel) criteria must match for an item to pass.
/// The default value is the identity filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Free-text search, matched case-insensitively across the searchable
    /// fields. Ignored when empty after trimming.
    pub query: Option<String>,
    /// Pluralized category token ("events", ...) or the sentinel "All".
    pub category: Option<String>,
    /// Matched against `category` for events, `cuisine` for restaurants.
    pub subcategory: Option<String>,
    /// Named area token or the sentinel "any-location".
    pub location: Option<String>,
    /// Price bucket token ("free", "under-25", ...) or "any-price".
    pub price_range: Option<String>,
    pub date: Option<DateFilter>,
}

fn active_token(value: &Option<String>, sentinel: &str) -> bool {
    match value {
        Some(v) => {
            let v = v.trim();
            !v.is_empty() && !v.eq_ignore_ascii_case(sentinel)
        }
        None => false,
    }
}

impl FilterCriteria {
    pub fn query_active(&self) -> bool {
        self.query.as_deref().is_some_and(|q| !q.trim().is_empty())
    }

    pub fn category_active(&self) -> bool {
        active_token(&self.category, "all")
    }

    pub fn subcategory_active(&self) -> bool {
        self.subcategory
            .as_deref()
            .is_some_and(|s| !s.trim().is_empty())
    }

    pub fn location_active(&self) -> bool {
        active_token(&self.location, "any-location")
    }

    pub fn price_range_active(&self) -> bool {
        active_token(&self.price_range, "any-price")
    }

    /// Number of non-sentinel criteria, for the "N active filters" badge.
    pub fn active_count(&self) -> usize {
        [
            self.query_active(),
            self.category_active(),
            self.subcategory_active(),
            self.location_active(),
            self.price_range_active(),
            self.date.is_some(),
        ]
        .iter()
        .filter(|active| **active)
        .count()
    }

    /// True when every criterion is at its sentinel/empty value, i.e. the
    /// filter is the identity function.
    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }
}

/// Dashboard tab selection: "all" plus the four discriminants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    All,
    Event,
    Restaurant,
    Attraction,
    Playground,
}

impl Tab {
    /// Unrecognized tokens fall back to `All` rather than erroring.
    pub fn from_token(token: &str) -> Self {
        match token.trim().to_lowercase().as_str() {
            "event" | "events" => Tab::Event,
            "restaurant" | "restaurants" => Tab::Restaurant,
            "attraction" | "attractions" => Tab::Attraction,
            "playground" | "playgrounds" => Tab::Playground,
            _ => Tab::All,
        }
    }
}

/// Post-filter sizes of the four source collections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceCounts {
    pub events: usize,
    pub restaurant_openings: usize,
    pub attractions: usize,
    pub playgrounds: usize,
}

impl SourceCounts {
    pub fn total(&self) -> usize {
        self.events + self.restaurant_openings + self.attractions + self.playgrounds
    }
}

/// One page of the assembled dashboard feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub items: Vec<ContentItem>,
    /// 1-indexed page that was actually served.
    pub page: usize,
    /// Page count of the active tab's filtered collection.
    pub total_pages: usize,
    /// Size of the active tab's filtered collection.
    pub total_count: usize,
    pub counts: SourceCounts,
    pub active_filters_count: usize,
}

/// Untabbed, unpaginated filtered listing for the per-collection endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentListResponse {
    pub items: Vec<ContentItem>,
    pub total_count: usize,
}
