//! In-memory content store, used by tests and as the dev-server seed when
//! no data directory exists.

use anyhow::Result;
use shared::{Attraction, Event, Playground, RestaurantOpening};
use uuid::Uuid;

use super::ContentStore;

#[derive(Clone, Default)]
pub struct MemoryContentStore {
    events: Vec<Event>,
    restaurant_openings: Vec<RestaurantOpening>,
    attractions: Vec<Attraction>,
    playgrounds: Vec<Playground>,
}

impl MemoryContentStore {
    pub fn new(
        events: Vec<Event>,
        restaurant_openings: Vec<RestaurantOpening>,
        attractions: Vec<Attraction>,
        playgrounds: Vec<Playground>,
    ) -> Self {
        Self {
            events,
            restaurant_openings,
            attractions,
            playgrounds,
        }
    }

    /// A small seeded store so the dev server has something to show before
    /// a data directory is provisioned.
    pub fn with_sample_data() -> Self {
        let events = vec![
            Event {
                id: Uuid::new_v4().to_string(),
                title: "Downtown Farmers Market".to_string(),
                description: Some("Saturday morning market with local vendors".to_string()),
                enhanced_description: None,
                original_description: None,
                location: Some("Downtown Des Moines".to_string()),
                venue: Some("Court Avenue".to_string()),
                category: Some("Market".to_string()),
                price: Some("Free".to_string()),
                date: Some("2026-09-05".to_string()),
                source_url: None,
                city: Some("Des Moines".to_string()),
            },
            Event {
                id: Uuid::new_v4().to_string(),
                title: "Jazz in July Finale".to_string(),
                description: Some("Outdoor concert series closer".to_string()),
                enhanced_description: None,
                original_description: None,
                location: Some("Western Gateway Park".to_string()),
                venue: None,
                category: Some("Music".to_string()),
                price: Some("$15".to_string()),
                date: Some("2026-07-31".to_string()),
                source_url: None,
                city: Some("Des Moines".to_string()),
            },
        ];
        let restaurant_openings = vec![RestaurantOpening {
            id: Uuid::new_v4().to_string(),
            name: "Prairie Trattoria".to_string(),
            description: Some("Neighborhood Italian spot".to_string()),
            enhanced_description: None,
            original_description: None,
            location: Some("West Des Moines".to_string()),
            cuisine: Some("Italian".to_string()),
            price: Some("$25-$40".to_string()),
            opening_date: Some("2026-10-01".to_string()),
            opening_timeframe: None,
            source_url: None,
            city: Some("West Des Moines".to_string()),
        }];
        let attractions = vec![Attraction {
            id: Uuid::new_v4().to_string(),
            name: "Science Center".to_string(),
            description: Some("Hands-on exhibits for all ages".to_string()),
            enhanced_description: None,
            original_description: None,
            location: Some("Downtown Des Moines".to_string()),
            category: Some("Museum".to_string()),
            price: Some("$14".to_string()),
            source_url: None,
            city: Some("Des Moines".to_string()),
        }];
        let playgrounds = vec![Playground {
            id: Uuid::new_v4().to_string(),
            name: "Miracle Park Playground".to_string(),
            description: Some("All-abilities playground".to_string()),
            enhanced_description: None,
            original_description: None,
            location: Some("Ankeny".to_string()),
            features: vec!["accessible".to_string(), "shaded".to_string()],
            source_url: None,
            city: Some("Ankeny".to_string()),
        }];
        Self::new(events, restaurant_openings, attractions, playgrounds)
    }
}

impl ContentStore for MemoryContentStore {
    fn events(&self) -> Result<Vec<Event>> {
        Ok(self.events.clone())
    }

    fn restaurant_openings(&self) -> Result<Vec<RestaurantOpening>> {
        Ok(self.restaurant_openings.clone())
    }

    fn attractions(&self) -> Result<Vec<Attraction>> {
        Ok(self.attractions.clone())
    }

    fn playgrounds(&self) -> Result<Vec<Playground>> {
        Ok(self.playgrounds.clone())
    }
}
