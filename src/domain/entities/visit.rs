//! Visit entity representing a single access of a short URL.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::VisitLocation;

/// A recorded access of a shortened URL.
///
/// Identifiers are assigned by the store on insert and grow strictly with
/// insertion order, which is what the keyset scans rely on. The location is
/// attached only when a geolocation lookup has been stored for the visit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Visit {
    pub id: i64,
    pub short_url_id: Option<i64>,
    pub date: DateTime<Utc>,
    pub referer: Option<String>,
    pub remote_addr: Option<String>,
    pub user_agent: Option<String>,
    pub location: Option<VisitLocation>,
}

impl Visit {
    /// Creates a visit as decoded from the row store.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let visit = Visit::new(
    ///     7,
    ///     Some(42),
    ///     Utc::now(),
    ///     Some("https://google.com".to_string()),
    ///     Some("192.168.1.0".to_string()),
    ///     Some("Mozilla/5.0".to_string()),
    ///     None,
    /// );
    /// ```
    pub fn new(
        id: i64,
        short_url_id: Option<i64>,
        date: DateTime<Utc>,
        referer: Option<String>,
        remote_addr: Option<String>,
        user_agent: Option<String>,
        location: Option<VisitLocation>,
    ) -> Self {
        Self {
            id,
            short_url_id,
            date,
            referer,
            remote_addr,
            user_agent,
            location,
        }
    }

    /// True when no geolocation has ever been stored for this visit.
    pub fn is_unlocated(&self) -> bool {
        self.location.is_none()
    }

    /// True when a lookup was stored but yielded no geographic data.
    pub fn has_empty_location(&self) -> bool {
        self.location.as_ref().is_some_and(|l| l.is_empty)
    }
}

/// Input data for seeding a visit into a store.
///
/// The read layer never writes visits itself; this type is used by the
/// in-memory store and by fixtures. The identifier is assigned on insert.
#[derive(Debug, Clone)]
pub struct NewVisit {
    pub short_url_id: Option<i64>,
    pub date: DateTime<Utc>,
    pub referer: Option<String>,
    pub remote_addr: Option<String>,
    pub user_agent: Option<String>,
    pub location: Option<VisitLocation>,
}

impl NewVisit {
    /// A visit to `short_url_id` at `date` without client metadata or location.
    pub fn new(short_url_id: Option<i64>, date: DateTime<Utc>) -> Self {
        Self {
            short_url_id,
            date,
            referer: None,
            remote_addr: None,
            user_agent: None,
            location: None,
        }
    }

    pub fn with_location(mut self, location: VisitLocation) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_client(
        mut self,
        referer: Option<String>,
        remote_addr: Option<String>,
        user_agent: Option<String>,
    ) -> Self {
        self.referer = referer;
        self.remote_addr = remote_addr;
        self.user_agent = user_agent;
        self
    }

    /// Materializes the visit under the identifier the store assigned.
    pub fn into_visit(self, id: i64) -> Visit {
        Visit::new(
            id,
            self.short_url_id,
            self.date,
            self.referer,
            self.remote_addr,
            self.user_agent,
            self.location,
        )
    }
}
