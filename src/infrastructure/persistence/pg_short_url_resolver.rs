//! PostgreSQL lookup of short codes.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::repositories::ShortUrlResolver;
use crate::error::VisitResult;

/// Resolves short codes against the `short_urls` and `domains` tables.
///
/// A short URL without a domain is served from the default domain and is
/// only matched when no domain is requested.
pub struct PgShortUrlResolver {
    pool: Arc<PgPool>,
}

impl PgShortUrlResolver {
    /// Creates a new resolver with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShortUrlResolver for PgShortUrlResolver {
    async fn resolve(&self, code: &str, domain: Option<&str>) -> VisitResult<Option<i64>> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT s.id
            FROM short_urls s
            LEFT JOIN domains d ON d.id = s.domain_id
            WHERE s.short_code = $1
              AND (($2::text IS NULL AND s.domain_id IS NULL) OR d.authority = $2)
            LIMIT 1
            "#,
        )
        .bind(code)
        .bind(domain)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(id)
    }
}
