//! Visit listing, counting and bulk scanning service.

use std::sync::Arc;

use tracing::debug;

use crate::application::visit_cursor::{VisitStream, scan_visits};
use crate::domain::entities::{DateRange, Visit};
use crate::domain::query::{
    BlockQuery, DEFAULT_BLOCK_SIZE, LocationFilter, PageQuery, UNRESOLVED_SHORT_URL_ID,
    VisitCriteria, VisitsParams,
};
use crate::domain::repositories::{ShortUrlResolver, VisitRowStore};
use crate::error::{VisitError, VisitResult};

/// Read-only entry points over stored visits.
///
/// Bulk scans walk the whole table in keyset blocks for maintenance sweeps.
/// Listings and counts serve per-short-URL statistics, with pagination pushed
/// into an identifier-only selection before rows are joined.
pub struct VisitService<S: VisitRowStore + ?Sized, R: ShortUrlResolver + ?Sized> {
    store: Arc<S>,
    resolver: Arc<R>,
    block_size: u32,
}

impl<S, R> VisitService<S, R>
where
    S: VisitRowStore + ?Sized + 'static,
    R: ShortUrlResolver + ?Sized,
{
    /// Creates a service scanning in blocks of [`DEFAULT_BLOCK_SIZE`].
    pub fn new(store: Arc<S>, resolver: Arc<R>) -> Self {
        Self {
            store,
            resolver,
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }

    /// Overrides the block size used when a scan is started without one.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::VisitError::Validation`] when `block_size` is zero.
    pub fn with_block_size(mut self, block_size: u32) -> VisitResult<Self> {
        if block_size == 0 {
            return Err(VisitError::validation("default block size must be at least 1"));
        }

        self.block_size = block_size;
        Ok(self)
    }

    pub fn block_size(&self) -> u32 {
        self.block_size
    }

    /// Visits that have never had a location stored.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::VisitError::Validation`] for a zero block size.
    pub fn find_unlocated_visits(&self, block_size: Option<u32>) -> VisitResult<VisitStream> {
        self.scan(LocationFilter::Unlocated, block_size)
    }

    /// Visits whose stored location is flagged empty.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::VisitError::Validation`] for a zero block size.
    pub fn find_visits_with_empty_location(
        &self,
        block_size: Option<u32>,
    ) -> VisitResult<VisitStream> {
        self.scan(LocationFilter::EmptyLocation, block_size)
    }

    /// Every visit, ascending by id.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::VisitError::Validation`] for a zero block size.
    pub fn find_all_visits(&self, block_size: Option<u32>) -> VisitResult<VisitStream> {
        self.scan(LocationFilter::All, block_size)
    }

    fn scan(&self, filter: LocationFilter, block_size: Option<u32>) -> VisitResult<VisitStream> {
        let first = BlockQuery::first(filter, block_size.unwrap_or(self.block_size))?;
        Ok(scan_visits(Arc::clone(&self.store), first))
    }

    /// Lists visits of one short URL, newest first.
    ///
    /// An unknown short code yields an empty list rather than an error.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::VisitError::Validation`] for a negative limit or offset.
    /// Returns [`crate::error::VisitError::Database`] on store failures.
    pub async fn find_visits_by_short_code(
        &self,
        code: &str,
        domain: Option<&str>,
        params: &VisitsParams,
    ) -> VisitResult<Vec<Visit>> {
        let short_url_id = self.resolve_short_url_id(code, domain).await?;
        let page = PageQuery::new(short_url_id, params)?;

        self.store.fetch_page(&page).await
    }

    /// Counts visits of one short URL within `date_range`.
    ///
    /// An unknown short code counts zero visits.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::VisitError::Database`] on store failures.
    pub async fn count_visits_by_short_code(
        &self,
        code: &str,
        domain: Option<&str>,
        date_range: &DateRange,
    ) -> VisitResult<i64> {
        let short_url_id = self.resolve_short_url_id(code, domain).await?;
        let criteria = VisitCriteria::new(short_url_id, *date_range);

        self.store.count(&criteria).await
    }

    /// Lists visits of short URLs carrying `tag`.
    ///
    /// # Note
    ///
    /// Tag filtering is not supported yet: this always returns an empty list.
    pub async fn find_visits_by_tag(
        &self,
        tag: &str,
        params: &VisitsParams,
    ) -> VisitResult<Vec<Visit>> {
        debug!(tag, ?params, "visits by tag are not supported, returning none");
        Ok(Vec::new())
    }

    /// Counts visits of short URLs carrying `tag`.
    ///
    /// # Note
    ///
    /// Tag filtering is not supported yet: this always returns 0.
    pub async fn count_visits_by_tag(&self, tag: &str, date_range: &DateRange) -> VisitResult<i64> {
        debug!(tag, ?date_range, "visits by tag are not supported, counting none");
        Ok(0)
    }

    async fn resolve_short_url_id(&self, code: &str, domain: Option<&str>) -> VisitResult<i64> {
        match self.resolver.resolve(code, domain).await? {
            Some(id) => Ok(id),
            None => {
                debug!(code, ?domain, "short url not found, matching no visits");
                Ok(UNRESOLVED_SHORT_URL_ID)
            }
        }
    }
}
