//! Core domain entities of the visit read layer.
//!
//! Entities are plain data decoded from the row store. Nothing here knows
//! about SQL or lazy loading.
//!
//! # Entity Types
//!
//! - [`Visit`] - One recorded access of a short URL
//! - [`VisitLocation`] - Geolocation result attached to a visit
//! - [`DateRange`] - Optional inclusive date bounds
//!
//! `NewVisit` carries the data for seeding a visit into a store.

pub mod date_range;
pub mod visit;
pub mod visit_location;

pub use date_range::DateRange;
pub use visit::{NewVisit, Visit};
pub use visit_location::VisitLocation;
