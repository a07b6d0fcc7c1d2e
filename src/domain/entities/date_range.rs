//! Optional, inclusive date bounds for visit queries.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Inclusive date bounds; an unset side is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

impl DateRange {
    pub fn new(start_date: Option<DateTime<Utc>>, end_date: Option<DateTime<Utc>>) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    /// Range with no bounds at all.
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn since(start_date: DateTime<Utc>) -> Self {
        Self::new(Some(start_date), None)
    }

    pub fn until(end_date: DateTime<Utc>) -> Self {
        Self::new(None, Some(end_date))
    }

    pub fn between(start_date: DateTime<Utc>, end_date: DateTime<Utc>) -> Self {
        Self::new(Some(start_date), Some(end_date))
    }

    pub fn is_unbounded(&self) -> bool {
        self.start_date.is_none() && self.end_date.is_none()
    }

    /// Whether `date` falls inside the range, both ends included.
    pub fn contains(&self, date: DateTime<Utc>) -> bool {
        self.start_date.is_none_or(|start| date >= start)
            && self.end_date.is_none_or(|end| date <= end)
    }
}
