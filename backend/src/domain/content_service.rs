//! Store-backed content service.
//!
//! Orchestrates the storage collaborators and the pure filter/feed logic:
//! loads the four collections, applies the criteria, and produces either a
//! paginated dashboard page or an untabbed filtered listing.

use std::sync::Arc;

use anyhow::Result;
use chrono::NaiveDate;
use shared::{
    ContentItem, ContentListResponse, ContentType, DashboardResponse, FilterCriteria, Tab,
};
use tracing::info;

use super::dashboard::DashboardState;
use super::feed::{DashboardSources, FilteredFeed, SourceState};
use super::filter::apply_filters;
use crate::storage::ContentStore;

#[derive(Clone)]
pub struct ContentService {
    store: Arc<dyn ContentStore>,
}

impl ContentService {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    fn load_sources(&self) -> Result<DashboardSources> {
        // Server-side the collections are read synchronously, so every
        // source arrives already resolved.
        Ok(DashboardSources {
            events: SourceState::loaded(self.store.events()?),
            restaurant_openings: SourceState::loaded(self.store.restaurant_openings()?),
            attractions: SourceState::loaded(self.store.attractions()?),
            playgrounds: SourceState::loaded(self.store.playgrounds()?),
        })
    }

    /// Assemble one dashboard page: filter each source, select the tab,
    /// slice the requested page (out-of-range requests stay on page 1).
    pub fn dashboard(
        &self,
        criteria: &FilterCriteria,
        tab: Tab,
        page: usize,
        today: NaiveDate,
    ) -> Result<DashboardResponse> {
        let sources = self.load_sources()?;
        let feed = FilteredFeed::new(&sources, criteria, today);

        let state = DashboardState::default()
            .select_tab(tab)
            .go_to_page(page, feed.total_pages(tab));
        let served = feed.page(&state);

        info!(
            tab = ?tab,
            page = served.page,
            total = served.total_count,
            active_filters = criteria.active_count(),
            "serving dashboard page"
        );

        Ok(DashboardResponse {
            items: served.items,
            page: served.page,
            total_pages: served.total_pages,
            total_count: served.total_count,
            counts: served.counts,
            active_filters_count: criteria.active_count(),
        })
    }

    /// Filtered, untabbed, unpaginated listing of one collection.
    pub fn list(
        &self,
        content_type: ContentType,
        criteria: &FilterCriteria,
        today: NaiveDate,
    ) -> Result<ContentListResponse> {
        let tagged: Vec<ContentItem> = match content_type {
            ContentType::Event => self
                .store
                .events()?
                .into_iter()
                .map(ContentItem::Event)
                .collect(),
            ContentType::Restaurant => self
                .store
                .restaurant_openings()?
                .into_iter()
                .map(ContentItem::Restaurant)
                .collect(),
            ContentType::Attraction => self
                .store
                .attractions()?
                .into_iter()
                .map(ContentItem::Attraction)
                .collect(),
            ContentType::Playground => self
                .store
                .playgrounds()?
                .into_iter()
                .map(ContentItem::Playground)
                .collect(),
        };

        let items = apply_filters(&tagged, content_type, criteria, today);
        let total_count = items.len();
        Ok(ContentListResponse { items, total_count })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryContentStore;
    use shared::Event;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn store_with_events(n: usize) -> Arc<MemoryContentStore> {
        let events = (0..n)
            .map(|i| Event {
                id: format!("event-{i}"),
                title: format!("Event {i}"),
                description: None,
                enhanced_description: None,
                original_description: None,
                location: Some("Downtown".to_string()),
                venue: None,
                category: Some("Music".to_string()),
                price: Some("$15".to_string()),
                date: Some("2025-06-14".to_string()),
                source_url: None,
                city: None,
            })
            .collect();
        Arc::new(MemoryContentStore::new(events, vec![], vec![], vec![]))
    }

    #[test]
    fn test_dashboard_page_slicing() {
        let service = ContentService::new(store_with_events(20));
        let today = day("2025-06-12");

        let page1 = service
            .dashboard(&FilterCriteria::default(), Tab::All, 1, today)
            .unwrap();
        assert_eq!(page1.items.len(), 9);
        assert_eq!(page1.total_count, 20);
        assert_eq!(page1.total_pages, 3);
        assert_eq!(page1.counts.events, 20);

        let page3 = service
            .dashboard(&FilterCriteria::default(), Tab::All, 3, today)
            .unwrap();
        assert_eq!(page3.items.len(), 2);
    }

    #[test]
    fn test_dashboard_out_of_range_page_stays_on_first() {
        let service = ContentService::new(store_with_events(5));
        let response = service
            .dashboard(&FilterCriteria::default(), Tab::All, 99, day("2025-06-12"))
            .unwrap();
        assert_eq!(response.page, 1);
        assert_eq!(response.items.len(), 5);
    }

    #[test]
    fn test_list_applies_criteria() {
        let service = ContentService::new(store_with_events(3));
        let criteria = FilterCriteria {
            subcategory: Some("music".to_string()),
            ..Default::default()
        };
        let response = service
            .list(ContentType::Event, &criteria, day("2025-06-12"))
            .unwrap();
        assert_eq!(response.total_count, 3);

        let criteria = FilterCriteria {
            subcategory: Some("theater".to_string()),
            ..Default::default()
        };
        let response = service
            .list(ContentType::Event, &criteria, day("2025-06-12"))
            .unwrap();
        assert_eq!(response.total_count, 0);
    }
}
