//! Lookup of short codes to internal short URL identifiers.

use crate::error::VisitResult;
use async_trait::async_trait;

/// Resolves a short code, optionally scoped to a domain, to the internal
/// identifier visits reference.
///
/// A `None` domain addresses short URLs served from the default domain.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgShortUrlResolver`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryShortUrlResolver`] - Fixed in-memory table
#[async_trait]
pub trait ShortUrlResolver: Send + Sync {
    /// # Returns
    ///
    /// - `Ok(Some(id))` if the short URL exists
    /// - `Ok(None)` if no short URL matches
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::VisitError::Database`] on store failures.
    async fn resolve(&self, code: &str, domain: Option<&str>) -> VisitResult<Option<i64>>;
}
