//! Integration tests for the tenant folder API.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use helpers::{TestApp, folder_row};

#[tokio::test]
async fn test_list_requires_token() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/folders", None, &[]).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.json()["error"], "Access token required");
}

#[tokio::test]
async fn test_list_rejects_garbage_token() {
    let app = TestApp::new();

    let response = app.authed("GET", "/api/folders", None, "not-a-jwt").await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_list_without_rows_synthesizes_default_folder() {
    let app = TestApp::new();
    let token = app.token_for(7, "alice@example.com");

    let response = app.authed("GET", "/api/folders", None, &token).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json(),
        json!([{
            "id": 1,
            "nome": "alice",
            "servidor_id": null,
            "servidor_ip": null,
            "ftp_dir": "/alice/",
        }])
    );
}

#[tokio::test]
async fn test_list_returns_owned_rows_with_host_address() {
    let app = TestApp::new();
    app.store.assign_host(7, 3, "10.0.0.3").await;
    app.store.put_folder(folder_row(11, 7, "alice", "movies")).await;
    app.store.put_folder(folder_row(12, 7, "alice", "series")).await;
    app.store.put_folder(folder_row(13, 8, "bob", "private")).await;
    let token = app.token_for(7, "alice@example.com");

    let response = app.authed("GET", "/api/folders", None, &token).await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    let folders = body.as_array().expect("array body");
    assert_eq!(folders.len(), 2);
    assert_eq!(folders[0]["nome"], "movies");
    assert_eq!(folders[0]["servidor_ip"], "10.0.0.3");
    assert_eq!(folders[1]["ftp_dir"], "/alice/series");
}

#[tokio::test]
async fn test_create_folder_writes_row_and_directory() {
    let app = TestApp::new();
    app.store.assign_host(7, 3, "10.0.0.3").await;
    let token = app.token_for(7, "alice@example.com");

    let response = app
        .authed("POST", "/api/folders", Some(json!({ "nome": "movies" })), &token)
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let body = response.json();
    assert_eq!(body["nome"], "movies");
    assert_eq!(body["servidor_id"], 3);
    assert_eq!(body["servidor_ip"], "10.0.0.3");
    assert_eq!(body["ftp_dir"], "/alice/movies");
    assert!(app.exists("tenants/alice/movies"));

    let id = body["id"].as_i64().expect("numeric id");
    let stored = app.store.folder(id).await.expect("row stored");
    assert_eq!(stored.owner_id, 7);
    assert_eq!(stored.server_id, Some(3));
}

#[tokio::test]
async fn test_create_folder_requires_name() {
    let app = TestApp::new();
    app.store.assign_host(7, 3, "10.0.0.3").await;
    let token = app.token_for(7, "alice@example.com");

    let response = app
        .authed("POST", "/api/folders", Some(json!({})), &token)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"], "Folder name is required");
    assert_eq!(app.store.folder_count().await, 0);
}

#[tokio::test]
async fn test_create_folder_without_body_is_bad_request() {
    let app = TestApp::new();
    app.store.assign_host(7, 3, "10.0.0.3").await;
    let token = app.token_for(7, "alice@example.com");
    let auth = format!("Bearer {token}");

    let response = app
        .request("POST", "/api/folders", None, &[("Authorization", auth.as_str())])
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"], "Folder name is required");

    let response = app
        .request(
            "POST",
            "/api/folders",
            None,
            &[
                ("Authorization", auth.as_str()),
                ("Content-Type", "application/json"),
            ],
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.json()["details"].is_string());
    assert_eq!(app.store.folder_count().await, 0);
}

#[tokio::test]
async fn test_create_folder_store_failure_is_server_error() {
    let app = TestApp::new();
    app.store.assign_host(7, 3, "10.0.0.3").await;
    app.store.set_read_only(true);
    let token = app.token_for(7, "alice@example.com");

    let response = app
        .authed("POST", "/api/folders", Some(json!({ "name": "movies" })), &token)
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json();
    assert_eq!(body["error"], "Failed to create folder");
    assert!(body["details"].is_string());
    assert!(!app.exists("tenants/alice/movies"));
}

#[tokio::test]
async fn test_create_folder_without_host_fails() {
    let app = TestApp::new();
    let token = app.token_for(7, "alice@example.com");

    let response = app
        .authed("POST", "/api/folders", Some(json!({ "name": "movies" })), &token)
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.json()["details"].is_string());
    assert_eq!(app.store.folder_count().await, 0);
}

#[tokio::test]
async fn test_delete_folder_with_content_is_refused() {
    let app = TestApp::new();
    app.store.assign_host(7, 3, "10.0.0.3").await;
    app.store.put_folder(folder_row(5, 7, "alice", "movies")).await;
    for n in 0..3 {
        app.store
            .add_content_path(&format!("/alice/5/clip{n}.mp4"))
            .await;
    }
    let token = app.token_for(7, "alice@example.com");

    let response = app.authed("DELETE", "/api/folders/5", None, &token).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json()["error"],
        "Cannot delete a folder that contains videos"
    );
    assert_eq!(app.store.folder_count().await, 1);
}

#[tokio::test]
async fn test_delete_empty_folder_removes_row_and_directory() {
    let app = TestApp::new();
    app.store.assign_host(7, 3, "10.0.0.3").await;
    app.store.put_folder(folder_row(5, 7, "alice", "movies")).await;
    std::fs::create_dir_all(app.root_path().join("tenants/alice/movies")).unwrap();
    let token = app.token_for(7, "alice@example.com");

    let response = app.authed("DELETE", "/api/folders/5", None, &token).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json(),
        json!({ "success": true, "message": "Folder deleted successfully" })
    );
    assert!(app.store.folder(5).await.is_none());
    assert!(!app.exists("tenants/alice/movies"));
}

#[tokio::test]
async fn test_delete_foreign_folder_is_not_found() {
    let app = TestApp::new();
    app.store.put_folder(folder_row(13, 8, "bob", "private")).await;
    let token = app.token_for(7, "alice@example.com");

    let response = app.authed("DELETE", "/api/folders/13", None, &token).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json()["error"], "Folder not found");
    assert!(app.store.folder(13).await.is_some());
}

#[tokio::test]
async fn test_health_reports_store_state() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/health", None, &[]).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["status"], "ok");
    assert_eq!(response.json()["database"], "connected");

    app.store.set_offline(true);
    let response = app.request("GET", "/api/health", None, &[]).await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json()["status"], "error");
    assert_eq!(response.json()["database"], "disconnected");
}
