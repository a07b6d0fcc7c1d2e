//! Application layer: the bulk cursor and the services built on it.
//!
//! Services consume the collaborator traits from
//! [`crate::domain::repositories`] and never see SQL.
//!
//! # Components
//!
//! - [`visit_cursor`] - Keyset block scan producing a lazy visit stream
//! - [`services::visit_service::VisitService`] - Bulk scans, listings and counts

pub mod services;
pub mod visit_cursor;
