//! End-to-end tests over a real TCP socket
//!
//! Serves the router on an ephemeral port and drives it with reqwest.

use std::net::SocketAddr;

use reqwest::StatusCode;
use serde_json::{json, Value};
use student_api::{create_router_with_prefix, AppState, Student};
use tokio::net::TcpListener;

async fn spawn_server(prefix: &str) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = create_router_with_prefix(AppState::in_memory(), prefix);
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

#[tokio::test]
async fn test_crud_over_http() {
    let addr = spawn_server("/api").await;
    let base = format!("http://{}/api/students", addr);
    let client = reqwest::Client::new();

    let created: Student = client
        .post(&base)
        .json(&json!({"firstName": "Grace", "lastName": "Hopper", "school": "Yale"}))
        .send()
        .await
        .unwrap()
        .error_for_status()
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(created.id, 1);

    let response = client
        .put(format!("{}/{}", base, created.id))
        .json(&json!({"firstName": "Grace", "lastName": "Hopper", "school": "Vassar"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated: Student = response.json().await.unwrap();
    assert_eq!(updated.school, "Vassar");

    let listed: Vec<Value> = client.get(&base).send().await.unwrap().json().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["school"], "Vassar");

    let response = client
        .delete(format!("{}/{}", base, created.id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = client
        .get(format!("{}/{}", base, created.id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.text().await.unwrap(), "Not Found");
}

#[tokio::test]
async fn test_concurrent_creates_get_distinct_ids() {
    let addr = spawn_server("").await;
    let base = format!("http://{}/students", addr);
    let client = reqwest::Client::new();

    let mut handles = Vec::new();
    for i in 0..20 {
        let client = client.clone();
        let base = base.clone();
        handles.push(tokio::spawn(async move {
            client
                .post(&base)
                .json(&json!({"firstName": format!("S{}", i), "lastName": "Test", "school": "X"}))
                .send()
                .await
                .unwrap()
                .json::<Student>()
                .await
                .unwrap()
                .id
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap());
    }
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 20);
}
