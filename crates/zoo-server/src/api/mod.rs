//! HTTP application assembly

use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::{config::BodyDecoding, features, middleware, storage::Collections};

/// State shared by every resource router
#[derive(Clone)]
pub struct AppState {
    pub collections: Collections,
    pub body_decoding: BodyDecoding,
}

impl AppState {
    pub fn new(collections: Collections, body_decoding: BodyDecoding) -> Self {
        Self { collections, body_decoding }
    }
}

/// The resource routes with request tracing applied
pub fn create_router(state: AppState) -> Router {
    features::router(&state.collections, state.body_decoding).layer(middleware::tracing_layer())
}

/// The complete service: `/animals/` is routed like `/animals`.
///
/// Path normalisation has to run before routing, so it wraps the router
/// instead of being added with `Router::layer`.
pub fn app(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(create_router(state))
}
