//! Collaborator contracts the visit read layer depends on.
//!
//! # Architecture
//!
//! - Traits define what the core needs from the outside world
//! - Implementations live in `crate::infrastructure::persistence`
//! - [`VisitRowStore`] mocks are auto-generated via `mockall` for testing
//!
//! # Available Contracts
//!
//! - [`VisitRowStore`] - Executes block, page and count queries
//! - [`ShortUrlResolver`] - Maps short codes to internal identifiers

pub mod short_url_resolver;
pub mod visit_row_store;

pub use short_url_resolver::ShortUrlResolver;
pub use visit_row_store::VisitRowStore;

#[cfg(test)]
pub use visit_row_store::MockVisitRowStore;
