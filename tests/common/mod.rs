//! Common test helpers for integration tests.
//!
//! Each test gets its own in-memory SQLite database behind the full router,
//! and drives it with `tower::ServiceExt::oneshot`.
//!
//! # Note
//!
//! Every integration test file compiles as its own crate, so helpers used by
//! only one of them would otherwise warn as dead code in the others.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use todo_agenda::api::{AppState, create_router};
use todo_agenda::infrastructure::SqliteTodoRepository;

// =============================================================================
// App Creation Helpers
// =============================================================================

pub struct TestApp {
    pub router: Router,
    pub repository: SqliteTodoRepository,
}

/// Creates a router over an empty in-memory database.
pub async fn create_test_app() -> TestApp {
    let repository = SqliteTodoRepository::connect("sqlite::memory:")
        .await
        .expect("in-memory database should open");
    repository
        .ensure_schema()
        .await
        .expect("schema should be created");

    TestApp {
        router: create_router(AppState::new(repository.clone())),
        repository,
    }
}

/// Creates a router seeded with the items from [`sample_todos`].
pub async fn create_seeded_app() -> TestApp {
    let app = create_test_app().await;
    for body in sample_todos() {
        let (status, _) = app.post("/todos/", body).await;
        assert_eq!(status, StatusCode::OK);
    }
    app
}

// =============================================================================
// Fixtures
// =============================================================================

/// Five items covering every status, priority and category.
pub fn sample_todos() -> Vec<Value> {
    vec![
        todo_body(1, "Learn HTML", "HIGH", "TO DO", "LEARNING", "2021-04-04"),
        todo_body(2, "Buy a Car", "MEDIUM", "IN PROGRESS", "HOME", "2021-09-22"),
        todo_body(3, "Clean the garden", "LOW", "TO DO", "HOME", "2021-02-22"),
        todo_body(4, "Fix the bug", "HIGH", "IN PROGRESS", "WORK", "2021-01-12"),
        todo_body(5, "Plan the sprint", "HIGH", "DONE", "WORK", "2021-01-12"),
    ]
}

pub fn todo_body(
    id: i64,
    todo: &str,
    priority: &str,
    status: &str,
    category: &str,
    due_date: &str,
) -> Value {
    serde_json::json!({
        "id": id,
        "todo": todo,
        "priority": priority,
        "status": status,
        "category": category,
        "dueDate": due_date,
    })
}

/// Writes a row directly, bypassing validation and date normalization.
pub async fn insert_raw(app: &TestApp, id: i64, due_date: &str) {
    sqlx::query(
        "INSERT INTO todo (id, todo, priority, status, category, due_date) \
         VALUES (?, 'raw', 'LOW', 'DONE', 'HOME', ?)",
    )
    .bind(id)
    .bind(due_date)
    .execute(app.repository.pool())
    .await
    .expect("raw insert should succeed");
}

// =============================================================================
// Request Helpers
// =============================================================================

impl TestApp {
    pub async fn get(&self, uri: &str) -> (StatusCode, String) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, String) {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, String) {
        self.send(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, String) {
        self.send(Method::DELETE, uri, None).await
    }

    /// Sends a GET and parses the body as a JSON array of items.
    pub async fn get_json(&self, uri: &str) -> (StatusCode, Vec<Value>) {
        let (status, body) = self.get(uri).await;
        let items = serde_json::from_str(&body).expect("body should be a JSON array");
        (status, items)
    }

    async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, String) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request should build");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body should be readable")
            .to_bytes();

        (status, String::from_utf8(bytes.to_vec()).expect("body should be UTF-8"))
    }
}

/// Extracts the `id` of every item, in response order.
pub fn ids(items: &[Value]) -> Vec<i64> {
    items
        .iter()
        .filter_map(|item| item["id"].as_i64())
        .collect()
}
