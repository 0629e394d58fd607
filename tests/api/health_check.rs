use crate::helpers::{MemoryStore, TestApp};

#[tokio::test]
async fn is_present() {
    let app = TestApp::spawn(MemoryStore::default()).await;

    let res = app.health_check().await.expect("Failed to execute request");

    assert!(res.status().is_success());
    assert_eq!(Some(0), res.content_length());
}
