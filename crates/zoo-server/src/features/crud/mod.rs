//! Generic list/get/create/update/delete handlers
//!
//! The same handler set serves every [`Resource`](super::shared::Resource);
//! each resource router is bound to its own collection through
//! [`ResourceState`].
//!
//! - `commands/` - Write operations (create, update, delete)
//! - `queries/` - Read operations (get, list)
//! - `routes.rs` - HTTP route definitions

pub mod commands;
pub mod queries;
pub mod routes;

pub use routes::resource_routes;

use crate::{config::BodyDecoding, storage::CollectionHandle};

/// State for one resource router
#[derive(Clone)]
pub struct ResourceState {
    /// Collection holding this resource's documents
    pub collection: CollectionHandle,
    /// How undecodable request bodies are treated
    pub decoding: BodyDecoding,
}

impl ResourceState {
    pub fn new(collection: CollectionHandle, decoding: BodyDecoding) -> Self {
        Self { collection, decoding }
    }
}
