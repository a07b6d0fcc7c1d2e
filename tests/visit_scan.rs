mod common;

use chrono::Utc;
use futures::{StreamExt, TryStreamExt};
use shortlink_visits::prelude::*;
use std::sync::Arc;

fn service(store: Arc<MemoryVisitStore>) -> VisitService<MemoryVisitStore, MemoryShortUrlResolver> {
    VisitService::new(store, Arc::new(MemoryShortUrlResolver::new()))
}

async fn ids(stream: VisitStream) -> Vec<i64> {
    stream.map_ok(|visit| visit.id).try_collect().await.unwrap()
}

#[tokio::test]
async fn test_find_all_visits_yields_each_visit_once_for_any_block_size() {
    for count in [0_i64, 1, 7, 20] {
        let store = Arc::new(MemoryVisitStore::new());
        let expected = common::seed_memory_visits(&store, 1, Utc::now(), count).await;
        let service = service(store);

        for block_size in 1..=8 {
            let scanned = ids(service.find_all_visits(Some(block_size)).unwrap()).await;
            assert_eq!(
                scanned, expected,
                "count {count}, block size {block_size}"
            );
        }
    }
}

#[tokio::test]
async fn test_location_scans_partition_visits() {
    let store = Arc::new(MemoryVisitStore::new());
    let mut unlocated = Vec::new();
    let mut empty = Vec::new();

    for i in 0..12_i64 {
        let new_visit = NewVisit::new(Some(1), Utc::now());
        let visit = match i % 3 {
            0 => store.insert(new_visit).await,
            1 => store.insert(new_visit.with_location(VisitLocation::empty(i))).await,
            _ => store.insert(new_visit.with_location(common::located(i))).await,
        };
        match i % 3 {
            0 => unlocated.push(visit.id),
            1 => empty.push(visit.id),
            _ => {}
        }
    }

    let service = service(store);

    let scanned_unlocated = ids(service.find_unlocated_visits(Some(3)).unwrap()).await;
    let scanned_empty = ids(service.find_visits_with_empty_location(Some(3)).unwrap()).await;

    assert_eq!(scanned_unlocated, unlocated);
    assert_eq!(scanned_empty, empty);
    assert!(scanned_unlocated.iter().all(|id| !scanned_empty.contains(id)));
}

#[tokio::test]
async fn test_inserts_during_scan_do_not_skip_existing_visits() {
    let store = Arc::new(MemoryVisitStore::new());
    let existing = common::seed_memory_visits(&store, 1, Utc::now(), 5).await;
    let service = service(store.clone());

    let mut stream = service.find_all_visits(Some(2)).unwrap();
    let mut seen = Vec::new();

    for _ in 0..3 {
        seen.push(stream.try_next().await.unwrap().unwrap().id);
    }

    common::seed_memory_visits(&store, 1, Utc::now(), 4).await;

    while let Some(visit) = stream.try_next().await.unwrap() {
        seen.push(visit.id);
    }

    for id in &existing {
        assert_eq!(seen.iter().filter(|s| *s == id).count(), 1, "visit {id}");
    }
    assert!(seen.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
async fn test_deletions_ahead_of_cursor_do_not_shift_the_scan() {
    let store = Arc::new(MemoryVisitStore::new());
    common::seed_memory_visits(&store, 1, Utc::now(), 10).await;
    let service = service(store.clone());

    let mut stream = service.find_all_visits(Some(3)).unwrap();
    let mut seen = Vec::new();

    for _ in 0..3 {
        seen.push(stream.try_next().await.unwrap().unwrap().id);
    }

    store.remove(5).await;
    store.remove(6).await;

    while let Some(visit) = stream.try_next().await.unwrap() {
        seen.push(visit.id);
    }

    assert_eq!(seen, vec![1, 2, 3, 4, 7, 8, 9, 10]);
}

#[tokio::test]
async fn test_scan_of_empty_store_is_empty() {
    let service = service(Arc::new(MemoryVisitStore::new()));

    let items: Vec<VisitResult<Visit>> = service.find_all_visits(None).unwrap().collect().await;

    assert!(items.is_empty());
}
