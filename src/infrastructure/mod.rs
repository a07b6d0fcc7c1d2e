//! Infrastructure layer for external integrations.
//!
//! This layer implements the contracts defined by the domain layer.
//!
//! # Modules
//!
//! - [`database`] - PostgreSQL pool construction and migrations
//! - [`persistence`] - Row store and resolver implementations

pub mod database;
pub mod persistence;
