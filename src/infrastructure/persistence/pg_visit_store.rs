//! PostgreSQL implementation of the visit row store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use super::visit_sql::{block_statement, count_statement, page_statement};
use crate::domain::entities::{Visit, VisitLocation};
use crate::domain::query::{BlockQuery, PageQuery, VisitCriteria};
use crate::domain::repositories::VisitRowStore;
use crate::error::VisitResult;

/// PostgreSQL row store for visits.
///
/// Uses runtime-built statements with bound parameters; rows are decoded
/// into a flat row type and converted into domain entities.
pub struct PgVisitStore {
    pool: Arc<PgPool>,
}

impl PgVisitStore {
    /// Creates a new store with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

/// A visit joined with its optional location.
///
/// Location columns come from a `LEFT JOIN` and are therefore all nullable.
#[derive(Debug, FromRow)]
struct VisitRow {
    id: i64,
    short_url_id: Option<i64>,
    date: DateTime<Utc>,
    referer: Option<String>,
    remote_addr: Option<String>,
    user_agent: Option<String>,
    location_id: Option<i64>,
    country_code: Option<String>,
    country_name: Option<String>,
    region_name: Option<String>,
    city_name: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    timezone: Option<String>,
    is_empty: Option<bool>,
}

impl From<VisitRow> for Visit {
    fn from(row: VisitRow) -> Self {
        let location = row.location_id.map(|id| VisitLocation {
            id,
            country_code: row.country_code.unwrap_or_default(),
            country_name: row.country_name.unwrap_or_default(),
            region_name: row.region_name.unwrap_or_default(),
            city_name: row.city_name.unwrap_or_default(),
            latitude: row.latitude.unwrap_or_default(),
            longitude: row.longitude.unwrap_or_default(),
            timezone: row.timezone.unwrap_or_default(),
            is_empty: row.is_empty.unwrap_or(false),
        });

        Visit::new(
            row.id,
            row.short_url_id,
            row.date,
            row.referer,
            row.remote_addr,
            row.user_agent,
            location,
        )
    }
}

#[async_trait]
impl VisitRowStore for PgVisitStore {
    async fn fetch_block(&self, query: &BlockQuery) -> VisitResult<Vec<Visit>> {
        let rows = block_statement(query)
            .build_query_as::<VisitRow>()
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Visit::from).collect())
    }

    async fn fetch_page(&self, query: &PageQuery) -> VisitResult<Vec<Visit>> {
        let rows = page_statement(query)
            .build_query_as::<VisitRow>()
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Visit::from).collect())
    }

    async fn count(&self, criteria: &VisitCriteria) -> VisitResult<i64> {
        let count = count_statement(criteria)
            .build_query_scalar::<i64>()
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn row(location_id: Option<i64>, is_empty: Option<bool>) -> VisitRow {
        VisitRow {
            id: 10,
            short_url_id: Some(2),
            date: Utc::now(),
            referer: Some("https://example.com".to_string()),
            remote_addr: None,
            user_agent: Some("Mozilla/5.0".to_string()),
            location_id,
            country_code: location_id.map(|_| "ES".to_string()),
            country_name: location_id.map(|_| "Spain".to_string()),
            region_name: None,
            city_name: location_id.map(|_| "Madrid".to_string()),
            latitude: location_id.map(|_| 40.4),
            longitude: location_id.map(|_| -3.7),
            timezone: None,
            is_empty,
        }
    }

    #[test]
    fn test_row_without_location_decodes_as_unlocated() {
        let visit = Visit::from(row(None, None));

        assert_eq!(visit.id, 10);
        assert_eq!(visit.short_url_id, Some(2));
        assert!(visit.is_unlocated());
    }

    #[test]
    fn test_row_with_location_attaches_it() {
        let visit = Visit::from(row(Some(4), Some(false)));
        let location = visit.location.expect("location should be attached");

        assert_eq!(location.id, 4);
        assert_eq!(location.country_code, "ES");
        assert_eq!(location.city_name, "Madrid");
        assert_eq!(location.region_name, "");
        assert!(!location.is_empty);
    }

    #[test]
    fn test_row_with_empty_location() {
        let visit = Visit::from(row(Some(4), Some(true)));

        assert!(visit.has_empty_location());
    }
}
