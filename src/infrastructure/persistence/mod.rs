//! Row store and short URL resolver implementations.
//!
//! PostgreSQL implementations build statements at runtime with
//! `sqlx::QueryBuilder` and bind every value. In-memory implementations share
//! the same semantics for tests and database-less embedding.
//!
//! # Implementations
//!
//! - [`PgVisitStore`] - Visit blocks, pages and counts on PostgreSQL
//! - [`PgShortUrlResolver`] - Short code lookup on PostgreSQL
//! - [`MemoryVisitStore`] - Id-ordered in-memory visit table
//! - [`MemoryShortUrlResolver`] - Fixed in-memory short code table

pub mod memory_visit_store;
pub mod pg_short_url_resolver;
pub mod pg_visit_store;
mod visit_sql;

pub use memory_visit_store::{MemoryShortUrlResolver, MemoryVisitStore};
pub use pg_short_url_resolver::PgShortUrlResolver;
pub use pg_visit_store::PgVisitStore;
