#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use diet_tracker::{
    build_app,
    config::{AppConfig, SessionConfig},
    db, AppState,
};

/// Router over a private in-memory database with migrations applied.
pub async fn test_app() -> Router {
    // One connection that never recycles, or the in-memory database vanishes.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");
    db::migrate(&pool).await.expect("migrations apply");

    let config = Arc::new(AppConfig {
        database_url: "sqlite::memory:".into(),
        max_connections: 1,
        host: "127.0.0.1".into(),
        port: 0,
        session: SessionConfig {
            ttl_days: 7,
            secure_cookie: false,
        },
    });
    build_app(AppState::from_parts(pool, config))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    /// `name=value` part of the session cookie, if one was set.
    pub fn session_cookie(&self) -> Option<String> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .find(|v| v.starts_with("sessionId="))
            .and_then(|v| v.split(';').next())
            .map(str::to_string)
    }
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    cookie: Option<&str>,
    body: Option<Value>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request builds");

    let response = app.clone().oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body collects");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn register(app: &Router, email: &str, password: &str) -> TestResponse {
    send(
        app,
        Method::POST,
        "/users",
        None,
        Some(json!({ "email": email, "password": password })),
    )
    .await
}

pub async fn login(app: &Router, email: &str, password: &str) -> TestResponse {
    send(
        app,
        Method::POST,
        "/users/login",
        None,
        Some(json!({ "email": email, "password": password })),
    )
    .await
}

/// Register and log in, returning the cookie header value to send back.
pub async fn signed_in(app: &Router, email: &str) -> String {
    let password = "12345678";
    assert_eq!(register(app, email, password).await.status, StatusCode::CREATED);
    let res = login(app, email, password).await;
    assert_eq!(res.status, StatusCode::OK);
    res.session_cookie().expect("login sets a session cookie")
}

pub fn meal_body(name: &str, datetime: &str, within_diet: bool) -> Value {
    json!({
        "name": name,
        "description": format!("Descrição de {name}"),
        "datetime": datetime,
        "withinDiet": within_diet
    })
}

pub async fn create_meal(app: &Router, cookie: &str, body: Value) -> TestResponse {
    send(app, Method::POST, "/meals", Some(cookie), Some(body)).await
}

pub async fn list_meals(app: &Router, cookie: &str) -> Vec<Value> {
    let res = send(app, Method::GET, "/meals", Some(cookie), None).await;
    assert_eq!(res.status, StatusCode::OK);
    res.body["meals"].as_array().expect("meals array").clone()
}
