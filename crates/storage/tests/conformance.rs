//! Runs the backend conformance suite against both bundled stores.

use std::sync::atomic::{AtomicUsize, Ordering};

use marquee_core::{Genre, NewMovie, Runtime};
use marquee_storage::conformance::run_conformance_suite;
use marquee_storage::{InMemoryStore, JsonFileStore, MovieStore};
use time::macros::date;

#[tokio::test]
async fn in_memory_store_conforms() {
    let report = run_conformance_suite(|| async { InMemoryStore::new() }).await;
    assert!(report.total > 0);
    assert_eq!(report.failed, 0, "{report}");
}

#[tokio::test]
async fn json_file_store_conforms() {
    let dir = tempfile::tempdir().unwrap();
    let counter = AtomicUsize::new(0);
    let report = run_conformance_suite(|| {
        let n = counter.fetch_add(1, Ordering::SeqCst);
        let path = dir.path().join(format!("store-{n}.json"));
        async move { JsonFileStore::open(path).unwrap() }
    })
    .await;
    assert_eq!(report.failed, 0, "{report}");
}

#[tokio::test]
async fn json_file_store_reopens_with_same_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("movies.json");

    let store = JsonFileStore::open(&path).unwrap();
    let alien = store
        .insert(NewMovie {
            title: "Alien".to_string(),
            directors: "Ridley Scott".to_string(),
            actors: "Sigourney Weaver, Tom Skerritt".to_string(),
            release_date: date!(1979 - 05 - 25),
            genre: Genre::SciFi,
            runtime: Runtime::from_hms(1, 57, 0),
            plot: Some("In space no one can hear you scream.".to_string()),
            rating: Some(rust_decimal::Decimal::new(85, 1)),
            image_url: None,
        })
        .await
        .unwrap();
    store.close().await.unwrap();

    let reopened = JsonFileStore::open(&path).unwrap();
    assert_eq!(reopened.get(alien.id).await.unwrap(), Some(alien.clone()));
    assert_eq!(reopened.list_latest(4).await.unwrap(), vec![alien]);

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["nextId"], 2);
    assert_eq!(raw["movies"][0]["releaseDate"], "1979-05-25");
    assert_eq!(raw["movies"][0]["runtime"], "01:57:00");
}
