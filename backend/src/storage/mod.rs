//! Storage abstraction for the four content collections.
//!
//! Persistence proper (the hosted database the production scrapers write
//! into) is an external collaborator; these implementations stand in for it
//! behind a narrow trait so the domain layer never depends on a concrete
//! backend.

use anyhow::Result;
use shared::{Attraction, Event, Playground, RestaurantOpening};

pub mod json;
pub mod memory;

pub use json::JsonContentStore;
pub use memory::MemoryContentStore;

/// Read access to the four source collections.
pub trait ContentStore: Send + Sync {
    fn events(&self) -> Result<Vec<Event>>;

    fn restaurant_openings(&self) -> Result<Vec<RestaurantOpening>>;

    fn attractions(&self) -> Result<Vec<Attraction>>;

    fn playgrounds(&self) -> Result<Vec<Playground>>;
}
