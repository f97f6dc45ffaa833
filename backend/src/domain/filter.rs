//! The filter predicate engine.
//!
//! Narrows one source collection at a time by every active criterion. The
//! filter is stable (original relative order preserved), pure, and
//! side-effect free; the input is never mutated or aliased. Unknown
//! enumeration tokens (category, location, price bucket, date preset) are
//! deliberately permissive: they impose no constraint rather than excluding
//! items.

use chrono::NaiveDate;
use shared::{ContentItem, ContentType, FilterCriteria};

use super::{dates, price};

/// The five named areas the location filter recognizes. Hyphenated tokens
/// match on their space-separated canonical form; anything else falls back
/// to raw substring containment.
const NAMED_AREAS: [(&str, &str); 5] = [
    ("downtown", "downtown"),
    ("west-des-moines", "west des moines"),
    ("ankeny", "ankeny"),
    ("urbandale", "urbandale"),
    ("clive", "clive"),
];

/// Return the subsequence of `items` matching every active criterion.
///
/// `item_type` is the discriminant of the originating collection; the
/// category criterion compares against it because category tokens name
/// pluralized collection types, not the `category` field of events.
/// `today` anchors preset date windows and is injected for determinism.
pub fn apply_filters(
    items: &[ContentItem],
    item_type: ContentType,
    criteria: &FilterCriteria,
    today: NaiveDate,
) -> Vec<ContentItem> {
    if criteria.is_empty() {
        return items.to_vec();
    }

    let query = criteria
        .query
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_lowercase);

    items
        .iter()
        .filter(|item| {
            query
                .as_deref()
                .map_or(true, |q| matches_query(item, q))
                && matches_category(item_type, criteria.category.as_deref())
                && matches_subcategory(item, criteria.subcategory.as_deref())
                && matches_location(item, criteria.location.as_deref())
                && price::matches_price_range(
                    item.price(),
                    criteria.price_range.as_deref().unwrap_or(""),
                )
                && criteria
                    .date
                    .as_ref()
                    .map_or(true, |f| dates::matches_date_filter(item.date_str(), f, today))
        })
        .cloned()
        .collect()
}

/// Case-insensitive substring match against the space-joined searchable
/// fields: title/name, best description, location, venue, cuisine, category.
fn matches_query(item: &ContentItem, query_lower: &str) -> bool {
    let haystack = [
        Some(item.title_or_name()),
        item.description(),
        item.location(),
        item.venue(),
        item.cuisine(),
        item.category(),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" ")
    .to_lowercase();

    haystack.contains(query_lower)
}

/// Pluralized category tokens constrain the collection discriminant. The
/// sentinel "All" and unrecognized tokens pass.
fn matches_category(item_type: ContentType, category: Option<&str>) -> bool {
    let token = match category.map(str::trim) {
        Some(t) if !t.is_empty() && !t.eq_ignore_ascii_case("all") => t,
        _ => return true,
    };
    match ContentType::from_category_token(token) {
        Some(required) => required == item_type,
        None => true,
    }
}

/// Exact case-insensitive match on `category` for events and `cuisine` for
/// restaurant openings; vacuously true for the other variants.
fn matches_subcategory(item: &ContentItem, subcategory: Option<&str>) -> bool {
    let wanted = match subcategory.map(str::trim) {
        Some(s) if !s.is_empty() => s,
        _ => return true,
    };
    match item {
        ContentItem::Event(e) => e
            .category
            .as_deref()
            .is_some_and(|c| c.eq_ignore_ascii_case(wanted)),
        ContentItem::Restaurant(r) => r
            .cuisine
            .as_deref()
            .is_some_and(|c| c.eq_ignore_ascii_case(wanted)),
        ContentItem::Attraction(_) | ContentItem::Playground(_) => true,
    }
}

/// Substring containment of the canonical area name (or the raw token, for
/// tokens outside the named set) within the item's lowercased location.
fn matches_location(item: &ContentItem, location: Option<&str>) -> bool {
    let token = match location.map(str::trim) {
        Some(t) if !t.is_empty() && !t.eq_ignore_ascii_case("any-location") => t.to_lowercase(),
        _ => return true,
    };
    let needle = NAMED_AREAS
        .iter()
        .find(|(area, _)| *area == token)
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or(token);

    item.location()
        .map_or(false, |loc| loc.to_lowercase().contains(&needle))
}
