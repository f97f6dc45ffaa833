//! Dashboard feed assembly.
//!
//! Each of the four source collections is filtered independently, tagged
//! with its discriminant, and concatenated in a fixed order (events,
//! restaurant openings, attractions, playgrounds). The active tab selects
//! one collection (or the concatenation) and the pagination state slices it.

use chrono::NaiveDate;
use shared::{
    Attraction, ContentItem, ContentType, Event, FilterCriteria, Playground, RestaurantOpening,
    SourceCounts, Tab,
};
use tracing::debug;

use super::dashboard::{self, DashboardState};
use super::filter::apply_filters;

/// One source collection together with its collaborator's loading flag.
#[derive(Debug, Clone, Default)]
pub struct SourceState<T> {
    pub items: Vec<T>,
    pub loading: bool,
}

impl<T> SourceState<T> {
    pub fn loaded(items: Vec<T>) -> Self {
        Self {
            items,
            loading: false,
        }
    }
}

/// The four independently fetched source collections.
#[derive(Debug, Clone, Default)]
pub struct DashboardSources {
    pub events: SourceState<Event>,
    pub restaurant_openings: SourceState<RestaurantOpening>,
    pub attractions: SourceState<Attraction>,
    pub playgrounds: SourceState<Playground>,
}

impl DashboardSources {
    /// The dashboard is loading while any source still is.
    pub fn is_loading(&self) -> bool {
        self.events.loading
            || self.restaurant_openings.loading
            || self.attractions.loading
            || self.playgrounds.loading
    }
}

/// The four collections after filtering and tagging, pre-pagination.
#[derive(Debug, Clone)]
pub struct FilteredFeed {
    events: Vec<ContentItem>,
    restaurant_openings: Vec<ContentItem>,
    attractions: Vec<ContentItem>,
    playgrounds: Vec<ContentItem>,
}

/// One served page of the feed plus the counts the pagination controls need.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedPage {
    pub items: Vec<ContentItem>,
    pub page: usize,
    pub total_pages: usize,
    pub total_count: usize,
    pub counts: SourceCounts,
}

impl FilteredFeed {
    pub fn new(sources: &DashboardSources, criteria: &FilterCriteria, today: NaiveDate) -> Self {
        let narrow = |items: Vec<ContentItem>, item_type: ContentType| {
            apply_filters(&items, item_type, criteria, today)
        };
        let feed = Self {
            events: narrow(
                sources.events.items.iter().cloned().map(ContentItem::Event).collect(),
                ContentType::Event,
            ),
            restaurant_openings: narrow(
                sources
                    .restaurant_openings
                    .items
                    .iter()
                    .cloned()
                    .map(ContentItem::Restaurant)
                    .collect(),
                ContentType::Restaurant,
            ),
            attractions: narrow(
                sources
                    .attractions
                    .items
                    .iter()
                    .cloned()
                    .map(ContentItem::Attraction)
                    .collect(),
                ContentType::Attraction,
            ),
            playgrounds: narrow(
                sources
                    .playgrounds
                    .items
                    .iter()
                    .cloned()
                    .map(ContentItem::Playground)
                    .collect(),
                ContentType::Playground,
            ),
        };
        debug!(
            events = feed.events.len(),
            restaurants = feed.restaurant_openings.len(),
            attractions = feed.attractions.len(),
            playgrounds = feed.playgrounds.len(),
            "filtered dashboard sources"
        );
        feed
    }

    pub fn counts(&self) -> SourceCounts {
        SourceCounts {
            events: self.events.len(),
            restaurant_openings: self.restaurant_openings.len(),
            attractions: self.attractions.len(),
            playgrounds: self.playgrounds.len(),
        }
    }

    /// The collection the given tab displays. "All" is the fixed-order
    /// concatenation of the four filtered collections.
    pub fn collection(&self, tab: Tab) -> Vec<ContentItem> {
        match tab {
            Tab::All => self
                .events
                .iter()
                .chain(&self.restaurant_openings)
                .chain(&self.attractions)
                .chain(&self.playgrounds)
                .cloned()
                .collect(),
            Tab::Event => self.events.clone(),
            Tab::Restaurant => self.restaurant_openings.clone(),
            Tab::Attraction => self.attractions.clone(),
            Tab::Playground => self.playgrounds.clone(),
        }
    }

    /// Page count of the collection the given tab displays, recomputed from
    /// the current filtered lengths.
    pub fn total_pages(&self, tab: Tab) -> usize {
        let count = match tab {
            Tab::All => self.counts().total(),
            Tab::Event => self.events.len(),
            Tab::Restaurant => self.restaurant_openings.len(),
            Tab::Attraction => self.attractions.len(),
            Tab::Playground => self.playgrounds.len(),
        };
        dashboard::total_pages(count)
    }

    /// Slice the active tab's collection to the state's current page.
    pub fn page(&self, state: &DashboardState) -> FeedPage {
        let collection = self.collection(state.active_tab);
        let items = dashboard::page_slice(&collection, state.current_page).to_vec();
        FeedPage {
            items,
            page: state.current_page,
            total_pages: dashboard::total_pages(collection.len()),
            total_count: collection.len(),
            counts: self.counts(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn event(n: usize) -> Event {
        Event {
            id: format!("event-{n}"),
            title: format!("Event {n}"),
            description: None,
            enhanced_description: None,
            original_description: None,
            location: Some("Downtown".to_string()),
            venue: None,
            category: None,
            price: None,
            date: Some("2025-06-14".to_string()),
            source_url: None,
            city: None,
        }
    }

    fn playground(n: usize) -> Playground {
        Playground {
            id: format!("playground-{n}"),
            name: format!("Playground {n}"),
            description: None,
            enhanced_description: None,
            original_description: None,
            location: Some("Ankeny".to_string()),
            features: vec![],
            source_url: None,
            city: None,
        }
    }

    fn sources(events: usize, playgrounds: usize) -> DashboardSources {
        DashboardSources {
            events: SourceState::loaded((0..events).map(event).collect()),
            restaurant_openings: SourceState::loaded(vec![]),
            attractions: SourceState::loaded(vec![]),
            playgrounds: SourceState::loaded((0..playgrounds).map(playground).collect()),
        }
    }

    #[test]
    fn test_loading_flag_is_or_of_sources() {
        let mut s = sources(0, 0);
        assert!(!s.is_loading());
        s.attractions.loading = true;
        assert!(s.is_loading());
    }

    #[test]
    fn test_all_tab_concatenates_in_fixed_order() {
        let feed = FilteredFeed::new(
            &sources(2, 2),
            &FilterCriteria::default(),
            day("2025-06-12"),
        );
        let all = feed.collection(Tab::All);
        let ids: Vec<&str> = all.iter().map(|i| i.id()).collect();
        assert_eq!(
            ids,
            vec!["event-0", "event-1", "playground-0", "playground-1"]
        );
        // Tagging stays consistent with the originating collection.
        assert_eq!(all[0].content_type(), ContentType::Event);
        assert_eq!(all[3].content_type(), ContentType::Playground);
    }

    #[test]
    fn test_pages_partition_the_feed_without_duplicates() {
        let feed = FilteredFeed::new(
            &sources(12, 8),
            &FilterCriteria::default(),
            day("2025-06-12"),
        );
        let total = feed.total_pages(Tab::All);
        assert_eq!(total, 3); // 20 items, 9 per page

        let mut state = DashboardState::default();
        let mut seen = Vec::new();
        for page in 1..=total {
            state = state.go_to_page(page, total);
            seen.extend(feed.page(&state).items);
        }
        assert_eq!(seen, feed.collection(Tab::All));
    }

    #[test]
    fn test_tab_selection_narrows_collection() {
        let feed = FilteredFeed::new(
            &sources(12, 8),
            &FilterCriteria::default(),
            day("2025-06-12"),
        );
        let state = DashboardState::default().select_tab(Tab::Playground);
        let page = feed.page(&state);
        assert_eq!(page.total_count, 8);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.items.len(), 8);
        assert!(page
            .items
            .iter()
            .all(|i| i.content_type() == ContentType::Playground));
        assert_eq!(page.counts.events, 12);
    }

    #[test]
    fn test_filter_change_shrinks_counts_and_pages() {
        let srcs = sources(12, 8);
        let today = day("2025-06-12");
        let criteria = FilterCriteria {
            location: Some("ankeny".to_string()),
            ..Default::default()
        };
        let feed = FilteredFeed::new(&srcs, &criteria, today);
        assert_eq!(feed.counts().events, 0);
        assert_eq!(feed.counts().playgrounds, 8);
        assert_eq!(feed.total_pages(Tab::All), 1);
    }
}
