//! Immutable query values handed to the row store.
//!
//! Each value describes exactly one round-trip. Scans advance by producing a
//! new [`BlockQuery`] from the previous one, so no builder state leaks from
//! one block into the next.

use crate::domain::entities::{DateRange, Visit};
use crate::error::{VisitError, VisitResult};

/// Rows fetched per round-trip when the caller does not choose a block size.
pub const DEFAULT_BLOCK_SIZE: u32 = 100;

/// Limit applied to the identifier selection when the caller sets none.
pub const NO_LIMIT: i64 = i64::MAX;

/// Short URL identifier used when a short code cannot be resolved.
///
/// Real identifiers are positive, so criteria built on it match no visit.
pub const UNRESOLVED_SHORT_URL_ID: i64 = -1;

/// Starting cursor for scans; lower than any identifier the store assigns.
pub const SCAN_START: i64 = 0;

/// Subset of visits a bulk scan walks over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationFilter {
    /// Every visit.
    All,
    /// Visits with no location stored.
    Unlocated,
    /// Visits whose stored location is flagged empty.
    EmptyLocation,
}

impl LocationFilter {
    pub fn matches(&self, visit: &Visit) -> bool {
        match self {
            Self::All => true,
            Self::Unlocated => visit.is_unlocated(),
            Self::EmptyLocation => visit.has_empty_location(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Unlocated => "unlocated",
            Self::EmptyLocation => "empty_location",
        }
    }
}

/// One block of a keyset scan: up to `block_size` visits matching `filter`
/// with `id > after_id`, ascending by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockQuery {
    pub filter: LocationFilter,
    pub after_id: i64,
    pub block_size: u32,
}

impl BlockQuery {
    /// First block of a scan.
    ///
    /// # Errors
    ///
    /// Returns [`VisitError::Validation`] when `block_size` is zero.
    pub fn first(filter: LocationFilter, block_size: u32) -> VisitResult<Self> {
        if block_size == 0 {
            return Err(VisitError::validation("block size must be at least 1"));
        }

        Ok(Self {
            filter,
            after_id: SCAN_START,
            block_size,
        })
    }

    /// The block following one whose last row had identifier `last_id`.
    pub fn after(&self, last_id: i64) -> Self {
        Self {
            after_id: last_id,
            ..*self
        }
    }

    /// Whether `visit` belongs to this block's predicate, ignoring the size bound.
    pub fn matches(&self, visit: &Visit) -> bool {
        visit.id > self.after_id && self.filter.matches(visit)
    }
}

/// Filter shared by listing and counting: short URL equality plus date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisitCriteria {
    pub short_url_id: i64,
    pub date_range: DateRange,
}

impl VisitCriteria {
    pub fn new(short_url_id: i64, date_range: DateRange) -> Self {
        Self {
            short_url_id,
            date_range,
        }
    }

    pub fn matches(&self, visit: &Visit) -> bool {
        visit.short_url_id == Some(self.short_url_id) && self.date_range.contains(visit.date)
    }
}

/// Caller-facing listing parameters.
///
/// `limit: None` means unbounded and `offset: None` means 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisitsParams {
    pub date_range: DateRange,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl VisitsParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds date range filtering to the query.
    pub fn with_date_range(mut self, date_range: DateRange) -> Self {
        self.date_range = date_range;
        self
    }

    /// Adds pagination to the query.
    pub fn with_page(mut self, limit: Option<i64>, offset: Option<i64>) -> Self {
        self.limit = limit;
        self.offset = offset;
        self
    }
}

/// A resolved listing request: the identifier window selected first, before
/// full rows are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    pub criteria: VisitCriteria,
    pub limit: i64,
    pub offset: i64,
}

impl PageQuery {
    /// Applies listing defaults to `params`.
    ///
    /// # Errors
    ///
    /// Returns [`VisitError::Validation`] for a negative limit or offset.
    pub fn new(short_url_id: i64, params: &VisitsParams) -> VisitResult<Self> {
        let limit = params.limit.unwrap_or(NO_LIMIT);
        let offset = params.offset.unwrap_or(0);

        if limit < 0 {
            return Err(VisitError::validation(format!(
                "limit must not be negative, got {limit}"
            )));
        }
        if offset < 0 {
            return Err(VisitError::validation(format!(
                "offset must not be negative, got {offset}"
            )));
        }

        Ok(Self {
            criteria: VisitCriteria::new(short_url_id, params.date_range),
            limit,
            offset,
        })
    }
}
