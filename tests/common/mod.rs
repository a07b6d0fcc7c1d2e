#![allow(dead_code)]

use chrono::{DateTime, Utc};
use shortlink_visits::domain::entities::{NewVisit, VisitLocation};
use shortlink_visits::infrastructure::persistence::MemoryVisitStore;
use sqlx::PgPool;

pub async fn create_short_url(pool: &PgPool, code: &str, domain: Option<&str>) -> i64 {
    let domain_id: Option<i64> = match domain {
        Some(authority) => Some(
            sqlx::query_scalar(
                "INSERT INTO domains (authority) VALUES ($1)
                 ON CONFLICT (authority) DO UPDATE SET authority = EXCLUDED.authority
                 RETURNING id",
            )
            .bind(authority)
            .fetch_one(pool)
            .await
            .unwrap(),
        ),
        None => None,
    };

    sqlx::query_scalar(
        "INSERT INTO short_urls (short_code, domain_id, original_url) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(code)
    .bind(domain_id)
    .bind("https://example.com")
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Inserts a visit; `location` is `None` for no location, or the `is_empty` flag.
pub async fn create_visit(
    pool: &PgPool,
    short_url_id: i64,
    date: DateTime<Utc>,
    location: Option<bool>,
) -> i64 {
    let location_id: Option<i64> = match location {
        Some(is_empty) => Some(
            sqlx::query_scalar(
                "INSERT INTO visit_locations (country_code, city_name, is_empty)
                 VALUES ($1, $2, $3) RETURNING id",
            )
            .bind(if is_empty { "" } else { "ES" })
            .bind(if is_empty { "" } else { "Madrid" })
            .bind(is_empty)
            .fetch_one(pool)
            .await
            .unwrap(),
        ),
        None => None,
    };

    sqlx::query_scalar(
        "INSERT INTO visits (short_url_id, visit_location_id, date, user_agent)
         VALUES ($1, $2, $3, 'Mozilla/5.0') RETURNING id",
    )
    .bind(short_url_id)
    .bind(location_id)
    .bind(date)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Seeds `count` visits for `short_url_id`, one minute apart, oldest first.
pub async fn seed_memory_visits(
    store: &MemoryVisitStore,
    short_url_id: i64,
    start: DateTime<Utc>,
    count: i64,
) -> Vec<i64> {
    let mut ids = Vec::new();
    for i in 0..count {
        let date = start + chrono::Duration::minutes(i);
        let visit = store.insert(NewVisit::new(Some(short_url_id), date)).await;
        ids.push(visit.id);
    }
    ids
}

pub fn located(id: i64) -> VisitLocation {
    VisitLocation {
        country_code: "ES".to_string(),
        city_name: "Madrid".to_string(),
        ..VisitLocation::empty(id)
    }
    .resolved()
}
