//! Domain logic for the city guide dashboard: the filter predicate engine,
//! date window math, price buckets, tab/pagination state, and feed assembly.

pub mod content_service;
pub mod dashboard;
pub mod dates;
pub mod feed;
pub mod filter;
pub mod price;

pub use content_service::ContentService;
