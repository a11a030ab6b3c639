#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Common test utilities for integration tests.
//!
//! This module provides test infrastructure that uses the REAL kernel code:
//! the shipped content registries, the built-in theme and the full router.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use trellis_kernel::menu::MenuRegistry;
use trellis_kernel::theme::ThemeEngine;
use trellis_kernel::{AppState, content, routes};

/// Test application wrapper using the REAL kernel routes and state.
pub struct TestApp {
    router: Router,
    pub state: AppState,
}

impl TestApp {
    /// Create a test application serving the shipped content.
    pub fn new() -> Self {
        let registries = content::load_all().expect("Failed to assemble content");
        Self::with_registries(registries)
    }

    /// Create a test application serving the given registries.
    pub fn with_registries(registries: Vec<MenuRegistry>) -> Self {
        let theme = ThemeEngine::builtin("Trellis").expect("Failed to build theme");
        let state = AppState::from_parts(registries, theme);
        let router = routes::app(state.clone()).expect("Failed to build router");
        Self { router, state }
    }

    /// Send a request to the test application.
    pub async fn request(&self, request: Request<Body>) -> Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request")
    }

    /// GET `uri` and return the status with the body as text.
    pub async fn get(&self, uri: &str) -> (StatusCode, String) {
        let response = self
            .request(Request::get(uri).body(Body::empty()).unwrap())
            .await;
        let status = response.status();
        (status, response_text(response).await)
    }

    /// GET `uri` and parse the body as JSON.
    pub async fn get_json(&self, uri: &str) -> (StatusCode, Value) {
        let (status, text) = self.get(uri).await;
        let json = serde_json::from_str(&text)
            .unwrap_or_else(|_| panic!("Failed to parse JSON from {uri}: {text}"));
        (status, json)
    }
}

async fn response_text(response: Response) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8_lossy(&body).to_string()
}
