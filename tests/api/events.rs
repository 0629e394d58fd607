use chrono::Days;

use reqwest::StatusCode;

use serde_json::Value;

use crate::helpers::{area, event, today, MemoryStore, TestApp};

#[tokio::test]
async fn search_matches_upcoming_events() {
    let culture = area("Cultura", "#F5A623");
    let mut fair = event("Feria del Libro", today() + Days::new(3), None);
    fair.description = Some("Lectura y autores".into());
    let store = MemoryStore {
        events: vec![
            fair,
            event("Teatro", today() + Days::new(5), Some(&culture)),
            event("Feria pasada", today() - Days::new(5), None),
        ],
        ..Default::default()
    };
    let app = TestApp::spawn(store).await;

    let found: Value = app
        .search("FERIA")
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse results");
    let found = found.as_array().unwrap();
    assert_eq!(1, found.len());
    assert_eq!("Feria del Libro", found[0]["name"]);

    let found: Value = app
        .search("cultura")
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse results");
    assert_eq!("Teatro", found[0]["name"]);
}

#[tokio::test]
async fn blank_search_returns_nothing() {
    let store = MemoryStore {
        events: vec![event("Feria", today(), None)],
        ..Default::default()
    };
    let app = TestApp::spawn(store).await;

    let res = app.search("   ").await.expect("Failed to execute request");

    assert_eq!(StatusCode::OK, res.status());
    let found: Value = res.json().await.expect("Failed to parse results");
    assert_eq!(0, found.as_array().unwrap().len());
}

#[tokio::test]
async fn overlong_search_is_rejected() {
    let app = TestApp::spawn(MemoryStore::default()).await;

    let res = app
        .search(&"a".repeat(300))
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::BAD_REQUEST, res.status());
}
