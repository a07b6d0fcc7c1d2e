//! In-memory visit store and short URL table.
//!
//! Both follow the same query semantics as the PostgreSQL implementations and
//! are meant for tests and for embedding the read layer without a database.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::ops::Bound;
use tokio::sync::RwLock;

use crate::domain::entities::{NewVisit, Visit};
use crate::domain::query::{BlockQuery, PageQuery, VisitCriteria};
use crate::domain::repositories::{ShortUrlResolver, VisitRowStore};
use crate::error::VisitResult;

#[derive(Debug, Default)]
struct Table {
    visits: BTreeMap<i64, Visit>,
    last_id: i64,
}

/// Visits kept in an id-ordered map.
///
/// Identifiers are assigned on insert, starting at 1, and are never reused
/// even after a removal.
#[derive(Debug, Default)]
pub struct MemoryVisitStore {
    table: RwLock<Table>,
}

impl MemoryVisitStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a visit under the next identifier.
    pub async fn insert(&self, new_visit: NewVisit) -> Visit {
        let mut table = self.table.write().await;
        table.last_id += 1;

        let visit = new_visit.into_visit(table.last_id);
        table.visits.insert(visit.id, visit.clone());
        visit
    }

    pub async fn remove(&self, id: i64) -> Option<Visit> {
        self.table.write().await.visits.remove(&id)
    }

    pub async fn len(&self) -> usize {
        self.table.read().await.visits.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

fn to_usize(value: i64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

#[async_trait]
impl VisitRowStore for MemoryVisitStore {
    async fn fetch_block(&self, query: &BlockQuery) -> VisitResult<Vec<Visit>> {
        let table = self.table.read().await;

        Ok(table
            .visits
            .range((Bound::Excluded(query.after_id), Bound::Unbounded))
            .map(|(_, visit)| visit)
            .filter(|visit| query.matches(visit))
            .take(query.block_size as usize)
            .cloned()
            .collect())
    }

    async fn fetch_page(&self, query: &PageQuery) -> VisitResult<Vec<Visit>> {
        let table = self.table.read().await;

        let ids: Vec<i64> = table
            .visits
            .values()
            .rev()
            .filter(|visit| query.criteria.matches(visit))
            .map(|visit| visit.id)
            .skip(to_usize(query.offset))
            .take(to_usize(query.limit))
            .collect();

        Ok(ids
            .iter()
            .filter_map(|id| table.visits.get(id))
            .cloned()
            .collect())
    }

    async fn count(&self, criteria: &VisitCriteria) -> VisitResult<i64> {
        let table = self.table.read().await;

        Ok(table
            .visits
            .values()
            .filter(|visit| criteria.matches(visit))
            .count() as i64)
    }
}

/// Fixed table of short codes, optionally scoped by domain.
#[derive(Debug, Clone, Default)]
pub struct MemoryShortUrlResolver {
    short_urls: HashMap<(String, Option<String>), i64>,
}

impl MemoryShortUrlResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `code` on `domain` (`None` for the default domain) as `id`.
    pub fn with_short_url(mut self, code: &str, domain: Option<&str>, id: i64) -> Self {
        self.short_urls
            .insert((code.to_string(), domain.map(str::to_string)), id);
        self
    }
}

#[async_trait]
impl ShortUrlResolver for MemoryShortUrlResolver {
    async fn resolve(&self, code: &str, domain: Option<&str>) -> VisitResult<Option<i64>> {
        let key = (code.to_string(), domain.map(str::to_string));
        Ok(self.short_urls.get(&key).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::VisitLocation;
    use crate::domain::query::{LocationFilter, VisitsParams};
    use chrono::Utc;

    async fn seeded(count: usize) -> MemoryVisitStore {
        let store = MemoryVisitStore::new();
        for _ in 0..count {
            store.insert(NewVisit::new(Some(1), Utc::now())).await;
        }
        store
    }

    #[tokio::test]
    async fn test_ids_are_assigned_in_order_and_not_reused() {
        let store = seeded(3).await;
        store.remove(3).await;

        let visit = store.insert(NewVisit::new(Some(1), Utc::now())).await;

        assert_eq!(visit.id, 4);
        assert_eq!(store.len().await, 3);
    }

    #[tokio::test]
    async fn test_fetch_block_respects_cursor_filter_and_size() {
        let store = MemoryVisitStore::new();
        for i in 0..6 {
            let mut new_visit = NewVisit::new(Some(1), Utc::now());
            if i % 2 == 0 {
                new_visit = new_visit.with_location(VisitLocation::empty(i));
            }
            store.insert(new_visit).await;
        }

        let query = BlockQuery::first(LocationFilter::EmptyLocation, 2)
            .unwrap()
            .after(1);
        let ids: Vec<i64> = store
            .fetch_block(&query)
            .await
            .unwrap()
            .iter()
            .map(|v| v.id)
            .collect();

        assert_eq!(ids, vec![3, 5]);

        let unlocated = BlockQuery::first(LocationFilter::Unlocated, 10)
            .unwrap()
            .after(4);
        let ids: Vec<i64> = store
            .fetch_block(&unlocated)
            .await
            .unwrap()
            .iter()
            .map(|v| v.id)
            .collect();

        assert_eq!(ids, vec![6]);
    }

    #[tokio::test]
    async fn test_fetch_page_skips_newest() {
        let store = seeded(5).await;

        let params = VisitsParams::new().with_page(Some(2), Some(1));
        let page = PageQuery::new(1, &params).unwrap();
        let ids: Vec<i64> = store
            .fetch_page(&page)
            .await
            .unwrap()
            .iter()
            .map(|v| v.id)
            .collect();

        assert_eq!(ids, vec![4, 3]);
    }

    #[tokio::test]
    async fn test_resolver_distinguishes_domains() {
        let resolver = MemoryShortUrlResolver::new()
            .with_short_url("abc", None, 1)
            .with_short_url("abc", Some("doma.in"), 2);

        assert_eq!(resolver.resolve("abc", None).await.unwrap(), Some(1));
        assert_eq!(resolver.resolve("abc", Some("doma.in")).await.unwrap(), Some(2));
        assert_eq!(resolver.resolve("abc", Some("other.in")).await.unwrap(), None);
        assert_eq!(resolver.resolve("xyz", None).await.unwrap(), None);
    }
}
