//! Router harness backed by an in-memory SQLite database.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use hardware_config::{SecurityConfig, ServerConfig};
use hardware_repository::{DatabasePool, SqliteProductRepository, SqliteUserRepository};
use hardware_rest::{create_router, AppState};
use hardware_security::{PasswordHasher, TokenProvider};
use hardware_service::{AuthServiceImpl, ProductServiceImpl, UserServiceImpl};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub pool: Arc<DatabasePool>,
}

impl TestApp {
    pub async fn new() -> Self {
        let pool = Arc::new(
            DatabasePool::in_memory()
                .await
                .expect("Failed to create in-memory database"),
        );
        let security = SecurityConfig {
            secret_key: "integration-test-secret-key-0123456789".to_string(),
            ..SecurityConfig::default()
        };

        let users = Arc::new(SqliteUserRepository::new(pool.clone()));
        let products = Arc::new(SqliteProductRepository::new(pool.clone()));
        let hasher = Arc::new(PasswordHasher::with_cost(1));
        let tokens = Arc::new(TokenProvider::new(&security));

        let state = AppState::new(
            Arc::new(UserServiceImpl::new(users.clone(), hasher.clone())),
            Arc::new(ProductServiceImpl::new(products)),
            Arc::new(AuthServiceImpl::new(users, hasher, tokens)),
        )
        .with_health_check(pool.clone());

        Self {
            router: create_router(state, &ServerConfig::default()),
            pool,
        }
    }

    pub async fn request(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.expect("request failed");
        let status = response.status();
        let bytes = response.into_body().collect().await.expect("body").to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into()))
        };
        (status, body)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn get_with_token(&self, uri: &str, token: &str) -> (StatusCode, Value) {
        self.request(
            Request::builder()
                .uri(uri)
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> (StatusCode, Value) {
        self.post_raw(uri, body.to_string()).await
    }

    pub async fn post_raw(&self, uri: &str, body: impl Into<String>) -> (StatusCode, Value) {
        self.request(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.into()))
                .unwrap(),
        )
        .await
    }

    /// Registers a regular user and returns the response body.
    pub async fn register(&self, username: &str, email: &str, password: &str) -> Value {
        let (status, body) = self
            .post_json(
                "/users/",
                &serde_json::json!({
                    "username": username,
                    "email": email,
                    "password": password,
                    "role": "Regular",
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "registration failed: {body}");
        body
    }
}
