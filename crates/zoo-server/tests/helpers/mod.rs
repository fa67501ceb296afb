//! Test helpers for zoo server integration tests
//!
//! Builds the full HTTP service over in-memory collections and provides
//! request/response shortcuts.
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, Response, StatusCode},
};
use serde_json::Value;
use std::{sync::Arc, time::Duration};
use tower::ServiceExt;
use zoo_server::{
    api::{self, AppState},
    config::BodyDecoding,
    storage::{Collections, MemoryCollection},
};

pub const VALID_ID: &str = "65f1c0a2b3d4e5f601234567";
pub const NIL_ID: &str = "000000000000000000000000";

/// The service under test plus direct access to its collections
pub struct TestApp {
    pub categories: Arc<MemoryCollection>,
    pub species: Arc<MemoryCollection>,
    pub animals: Arc<MemoryCollection>,
    decoding: BodyDecoding,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_decoding(BodyDecoding::Strict)
    }

    pub fn with_decoding(decoding: BodyDecoding) -> Self {
        Self {
            categories: Arc::new(MemoryCollection::new(Collections::CATEGORIES)),
            species: Arc::new(MemoryCollection::new(Collections::SPECIES)),
            animals: Arc::new(MemoryCollection::new(Collections::ANIMALS)),
            decoding,
        }
    }

    fn state(&self) -> AppState {
        let collections = Collections::new(
            self.categories.clone(),
            self.species.clone(),
            self.animals.clone(),
            Duration::from_secs(30),
        );
        AppState::new(collections, self.decoding)
    }

    /// Send one request through a fresh copy of the service.
    pub async fn send(&self, method: Method, uri: &str, body: Option<&str>) -> Response<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            },
            None => Body::empty(),
        };

        api::app(self.state())
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, json: &str) -> Response<Body> {
        self.send(Method::POST, uri, Some(json)).await
    }

    pub async fn put(&self, uri: &str, json: &str) -> Response<Body> {
        self.send(Method::PUT, uri, Some(json)).await
    }

    pub async fn delete(&self, uri: &str) -> Response<Body> {
        self.send(Method::DELETE, uri, None).await
    }

    /// POST `json` and return the new document's id.
    pub async fn create(&self, uri: &str, json: &str) -> String {
        let response = self.post(uri, json).await;
        assert_eq!(response.status(), StatusCode::OK);
        let ack = json_body(response).await;
        ack["InsertedID"].as_str().unwrap().to_string()
    }
}

pub async fn text_body(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn json_body(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert a plain-text error response.
pub async fn assert_error(response: Response<Body>, status: StatusCode, message: &str) {
    assert_eq!(response.status(), status);
    assert_eq!(text_body(response).await, message);
}
