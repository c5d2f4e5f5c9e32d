//! A JSONPlaceholder-shaped `/users` server on an ephemeral port.

#![allow(dead_code)]

use std::{net::SocketAddr, sync::Arc};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::{Value, json};
use tokio::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

#[derive(Debug, Default)]
struct FakeState {
    users: Vec<Value>,
    list_status: Option<StatusCode>,
    delete_status: Option<StatusCode>,
    malformed_list: bool,
    requests: Vec<RecordedRequest>,
}

type Shared = Arc<Mutex<FakeState>>;

pub struct FakeUsersApi {
    pub base_url: String,
    state: Shared,
}

impl FakeUsersApi {
    pub async fn start(users: Vec<Value>) -> Self {
        let state: Shared = Arc::new(Mutex::new(FakeState {
            users,
            ..Default::default()
        }));

        let app = Router::new()
            .route("/users", get(list_users).post(create_user))
            .route(
                "/users/{id}",
                get(get_user).put(update_user).delete(delete_user),
            )
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind fake users api");
        let addr: SocketAddr = listener.local_addr().expect("listener addr");

        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    pub async fn fail_list(&self, status: StatusCode) {
        self.state.lock().await.list_status = Some(status);
    }

    pub async fn fail_delete(&self, status: StatusCode) {
        self.state.lock().await.delete_status = Some(status);
    }

    pub async fn serve_malformed_list(&self) {
        self.state.lock().await.malformed_list = true;
    }

    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().await.requests.clone()
    }
}

fn record(state: &mut FakeState, method: Method, path: String, body: Option<Value>) {
    state.requests.push(RecordedRequest { method, path, body });
}

fn find(state: &FakeState, id: u64) -> Option<Value> {
    state
        .users
        .iter()
        .find(|u| u["id"].as_u64() == Some(id))
        .cloned()
}

async fn list_users(State(state): State<Shared>) -> Response {
    let mut state = state.lock().await;
    record(&mut state, Method::GET, "/users".into(), None);

    if let Some(status) = state.list_status {
        return status.into_response();
    }
    if state.malformed_list {
        return (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            "{ this is not json",
        )
            .into_response();
    }
    Json(Value::Array(state.users.clone())).into_response()
}

async fn get_user(State(state): State<Shared>, Path(id): Path<u64>) -> Response {
    let mut state = state.lock().await;
    record(&mut state, Method::GET, format!("/users/{id}"), None);

    match find(&state, id) {
        Some(user) => Json(user).into_response(),
        None => (StatusCode::NOT_FOUND, Json(json!({}))).into_response(),
    }
}

async fn create_user(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let mut state = state.lock().await;
    record(&mut state, Method::POST, "/users".into(), Some(body.clone()));

    // JSONPlaceholder answers every create with the same id.
    let mut created = body;
    created["id"] = json!(11);
    (StatusCode::CREATED, Json(created)).into_response()
}

async fn update_user(
    State(state): State<Shared>,
    Path(id): Path<u64>,
    Json(body): Json<Value>,
) -> Response {
    let mut state = state.lock().await;
    record(&mut state, Method::PUT, format!("/users/{id}"), Some(body.clone()));

    if find(&state, id).is_none() {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    Json(body).into_response()
}

async fn delete_user(State(state): State<Shared>, Path(id): Path<u64>) -> Response {
    let mut state = state.lock().await;
    record(&mut state, Method::DELETE, format!("/users/{id}"), None);

    if let Some(status) = state.delete_status {
        return status.into_response();
    }
    Json(json!({})).into_response()
}

pub fn leanne() -> Value {
    json!({
        "id": 1,
        "name": "Leanne Graham",
        "username": "Bret",
        "email": "Sincere@april.biz",
        "address": {
            "street": "Kulas Light",
            "suite": "Apt. 556",
            "city": "Gwenborough",
            "zipcode": "92998-3874",
            "geo": { "lat": "-37.3159", "lng": "81.1496" }
        },
        "phone": "1-770-736-8031 x56442",
        "website": "hildegard.org",
        "company": {
            "name": "Romaguera-Crona",
            "catchPhrase": "Multi-layered client-server neural-net",
            "bs": "harness real-time e-markets"
        }
    })
}

pub fn placeholder_users() -> Vec<Value> {
    vec![
        leanne(),
        json!({
            "id": 2,
            "name": "Ervin Howell",
            "username": "Antonette",
            "email": "Shanna@melissa.tv",
            "company": { "name": "Deckow-Crist" }
        }),
        json!({
            "id": 3,
            "name": "Clementine Bauch",
            "username": "Samantha",
            "email": "Nathan@yesenia.net",
            "company": { "name": "Romaguera-Jacobson" }
        }),
    ]
}

pub fn numbered_users(count: u64) -> Vec<Value> {
    (1..=count)
        .map(|id| {
            json!({
                "id": id,
                "name": format!("User{id} Number{id}"),
                "email": format!("user{id}@example.com"),
                "company": { "name": "Acme" }
            })
        })
        .collect()
}
