//! Row store contract for visit queries.

use crate::domain::entities::Visit;
use crate::domain::query::{BlockQuery, PageQuery, VisitCriteria};
use crate::error::VisitResult;
use async_trait::async_trait;

/// Executes immutable visit query values against the relational store.
///
/// Implementations decode rows into [`Visit`] values with their location
/// attached; the core never sees raw rows.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgVisitStore`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryVisitStore`] - In-memory implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VisitRowStore: Send + Sync {
    /// Fetches one keyset block: at most `query.block_size` visits matching
    /// `query.filter` with `id > query.after_id`, ascending by id.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::VisitError::Database`] on store failures.
    async fn fetch_block(&self, query: &BlockQuery) -> VisitResult<Vec<Visit>>;

    /// Fetches one listing page, descending by id.
    ///
    /// The identifier window (`limit`/`offset` over matching ids) is selected
    /// before any wide row or location is joined, so the cost of the join is
    /// bounded by `limit` whatever the offset.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::VisitError::Database`] on store failures.
    async fn fetch_page(&self, query: &PageQuery) -> VisitResult<Vec<Visit>>;

    /// Counts visits matching `criteria`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::VisitError::Database`] on store failures.
    async fn count(&self, criteria: &VisitCriteria) -> VisitResult<i64>;
}
