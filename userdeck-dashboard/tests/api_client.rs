mod common;

use std::sync::Arc;

use axum::http::{Method, StatusCode};
use serde_json::json;
use userdeck_dashboard::{
    ApiClient, ApiError, ApiOperation, UserAdminApiAdapter, UserAdminService,
};
use userdeck_model::UserPatch;

use common::{FakeUsersApi, placeholder_users};

fn adapter(base_url: &str) -> UserAdminApiAdapter {
    let client = Arc::new(ApiClient::new(base_url).unwrap());
    UserAdminApiAdapter::new(client)
}

#[tokio::test]
async fn list_returns_every_record_with_unused_fields_intact() {
    let api = FakeUsersApi::start(placeholder_users()).await;

    let users = adapter(&api.base_url).list_users().await.unwrap();

    assert_eq!(users.len(), 3);
    assert_eq!(users[0].username, "Bret");
    assert_eq!(users[0].company.catch_phrase, "Multi-layered client-server neural-net");
    assert_eq!(users[1].address.city, "");
}

#[tokio::test]
async fn get_fetches_one_record() {
    let api = FakeUsersApi::start(placeholder_users()).await;
    let service = adapter(&api.base_url);

    let user = service.get_user(2).await.unwrap();
    assert_eq!(user.name, "Ervin Howell");

    let err = service.get_user(99).await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), "API Error: 404 Not Found");
}

#[tokio::test]
async fn create_posts_only_present_members() {
    let api = FakeUsersApi::start(placeholder_users()).await;
    let patch = UserPatch {
        name: Some("Ada Lovelace".into()),
        email: Some("ada@example.com".into()),
        ..Default::default()
    };

    let created = adapter(&api.base_url).create_user(&patch).await.unwrap();
    assert_eq!(created.name, "Ada Lovelace");

    let requests = api.requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::POST);
    assert_eq!(
        requests[0].body,
        Some(json!({ "name": "Ada Lovelace", "email": "ada@example.com" }))
    );
}

#[tokio::test]
async fn update_puts_the_id_alongside_the_patch() {
    let api = FakeUsersApi::start(placeholder_users()).await;
    let patch = UserPatch {
        name: Some("Ervin Howell Jr".into()),
        ..Default::default()
    };

    adapter(&api.base_url).update_user(2, &patch).await.unwrap();

    let requests = api.requests().await;
    assert_eq!(requests[0].method, Method::PUT);
    assert_eq!(requests[0].path, "/users/2");
    assert_eq!(
        requests[0].body,
        Some(json!({ "id": 2, "name": "Ervin Howell Jr" }))
    );
}

#[tokio::test]
async fn delete_failures_use_their_own_prefix() {
    let api = FakeUsersApi::start(placeholder_users()).await;
    let service = adapter(&api.base_url);

    service.delete_user(1).await.unwrap();

    api.fail_delete(StatusCode::FORBIDDEN).await;
    let err = service.delete_user(1).await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to delete user: 403 Forbidden");
    assert_eq!(err.operation(), ApiOperation::Delete);
}

#[tokio::test]
async fn undecodable_body_is_unexpected() {
    let api = FakeUsersApi::start(placeholder_users()).await;
    api.serve_malformed_list().await;

    let err = adapter(&api.base_url).list_users().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode { .. }));
    assert!(err.is_unexpected());
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn unreachable_server_reports_connection_problem() {
    // Bind then drop a listener so the port is known to be closed.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = adapter(&format!("http://{addr}"))
        .list_users()
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Transport { .. }));
    assert_eq!(
        err.to_string(),
        "Failed to fetch users. Please check your connection."
    );
}
