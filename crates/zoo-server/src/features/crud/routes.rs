//! Resource API routes
//!
//! # Route Structure
//!
//! For a resource with singular name `animal` and plural name `animals`:
//!
//! - `GET /animals` - List every document
//! - `POST /animal` - Create a document
//! - `GET /animal/:id` - Get a single document
//! - `PUT /animal/:id` - Update the submitted fields of a document
//! - `DELETE /animal/:id` - Delete a document
//!
//! Path ids are validated before the body is read or storage is touched.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::Value;

use super::{
    commands::{create, delete as remove, update},
    queries::{get as fetch, list as fetch_all},
    ResourceState,
};
use crate::{
    error::AppResult,
    features::shared::{body::decode_body, validation::parse_path_id, Resource},
    storage::InsertAck,
};

// ============================================================================
// Router Configuration
// ============================================================================

/// Creates the router for one resource
///
/// ```rust,ignore
/// use zoo_server::features::{animals::Animal, crud::{resource_routes, ResourceState}};
///
/// let app = resource_routes::<Animal>().with_state(ResourceState::new(animals, decoding));
/// ```
pub fn resource_routes<R: Resource>() -> Router<ResourceState> {
    let list_path = format!("/{}", R::PLURAL);
    let create_path = format!("/{}", R::SINGULAR);
    let item_path = format!("/{}/:id", R::SINGULAR);

    Router::new()
        .route(&list_path, get(list_documents::<R>))
        .route(&create_path, post(create_document::<R>))
        .route(&item_path, get(get_document::<R>))
        .route(&item_path, put(update_document::<R>))
        .route(&item_path, delete(delete_document::<R>))
}

// ============================================================================
// Command Handlers (Write Operations)
// ============================================================================

/// `POST /{singular}` - responds with `{"InsertedID": "<hex>"}`
#[tracing::instrument(skip_all, fields(resource = R::SINGULAR))]
async fn create_document<R: Resource>(
    State(state): State<ResourceState>,
    body: Bytes,
) -> AppResult<Json<InsertAck>> {
    let body: R::Body = decode_body(state.decoding, &body)?;
    let ack = create::handle::<R>(state.collection.as_ref(), body).await?;

    tracing::info!(id = %ack.inserted_id, "Document created via API");

    Ok(Json(ack))
}

/// `PUT /{singular}/:id` - responds with the fields that were set
#[tracing::instrument(skip(state, body), fields(resource = R::SINGULAR))]
async fn update_document<R: Resource>(
    State(state): State<ResourceState>,
    Path(id): Path<String>,
    body: Bytes,
) -> AppResult<Json<Value>> {
    let id = parse_path_id(&id)?;
    let body: R::Body = decode_body(state.decoding, &body)?;
    let updated = update::handle::<R>(state.collection.as_ref(), id, body).await?;

    tracing::info!(%id, "Document updated via API");

    Ok(Json(updated))
}

/// `DELETE /{singular}/:id` - empty `200` whether or not a document matched
#[tracing::instrument(skip(state), fields(resource = R::SINGULAR))]
async fn delete_document<R: Resource>(
    State(state): State<ResourceState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_path_id(&id)?;
    remove::handle(state.collection.as_ref(), id).await?;

    tracing::info!(%id, "Document deleted via API");

    Ok(StatusCode::OK)
}

// ============================================================================
// Query Handlers (Read Operations)
// ============================================================================

/// `GET /{plural}`
#[tracing::instrument(skip_all, fields(resource = R::PLURAL))]
async fn list_documents<R: Resource>(
    State(state): State<ResourceState>,
) -> AppResult<Json<Vec<R::View>>> {
    let views = fetch_all::handle::<R>(state.collection.as_ref()).await?;
    tracing::debug!(count = views.len(), "Listed documents");
    Ok(Json(views))
}

/// `GET /{singular}/:id`
#[tracing::instrument(skip(state), fields(resource = R::SINGULAR))]
async fn get_document<R: Resource>(
    State(state): State<ResourceState>,
    Path(id): Path<String>,
) -> AppResult<Json<R::View>> {
    let id = parse_path_id(&id)?;
    let view = fetch::handle::<R>(state.collection.as_ref(), id).await?;
    Ok(Json(view))
}
