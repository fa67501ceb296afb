//! Document storage
//!
//! Handlers talk to MongoDB through the [`DocumentCollection`] trait. Each
//! resource gets its own handle, created once at start-up and wrapped in a
//! [`DeadlineCollection`] so every operation runs under the configured
//! per-operation timeout.
//!
//! - [`mongo`]: the MongoDB-backed collection and the start-up connection
//! - [`memory`]: an in-process collection with the same semantics
//! - [`deadline`]: the timeout decorator

pub mod deadline;
pub mod memory;
pub mod mongo;

use async_trait::async_trait;
use bson::{oid::ObjectId, Document};
use serde::Serialize;
use std::{sync::Arc, time::Duration};
use thiserror::Error;

pub use deadline::DeadlineCollection;
pub use memory::MemoryCollection;
pub use mongo::{connect, MongoCollection};

/// Storage operation errors
///
/// Every variant surfaces to clients as a server error carrying this
/// message.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Driver(#[from] mongodb::error::Error),

    #[error("no documents in result")]
    NotFound,

    #[error("failed to encode document: {0}")]
    Encode(#[from] bson::ser::Error),

    #[error("failed to decode document: {0}")]
    Decode(#[from] bson::de::Error),

    #[error("{operation} on '{collection}' exceeded the {timeout:?} deadline")]
    DeadlineExceeded {
        operation: &'static str,
        collection: String,
        timeout: Duration,
    },

    #[error("insert into '{0}' did not return an object id")]
    MissingInsertedId(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Insert acknowledgment returned to clients after a create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InsertAck {
    #[serde(
        rename = "InsertedID",
        serialize_with = "bson::serde_helpers::serialize_object_id_as_hex_string"
    )]
    pub inserted_id: ObjectId,
}

/// One collection of documents keyed by `_id`.
#[async_trait]
pub trait DocumentCollection: Send + Sync {
    /// Collection name, used in logs and errors.
    fn name(&self) -> &str;

    /// Every document, in storage iteration order.
    async fn find_all(&self) -> StoreResult<Vec<Document>>;

    /// The document with `_id == id`, or [`StoreError::NotFound`].
    async fn find_by_id(&self, id: ObjectId) -> StoreResult<Document>;

    /// Insert `document`, generating its `_id`.
    async fn insert_one(&self, document: Document) -> StoreResult<InsertAck>;

    /// `$set` the given top-level fields on the document with `_id == id`.
    /// Matching nothing is not an error.
    async fn set_fields(&self, id: ObjectId, fields: Document) -> StoreResult<()>;

    /// Remove the document with `_id == id` if present.
    async fn delete_by_id(&self, id: ObjectId) -> StoreResult<()>;
}

#[async_trait]
impl<T> DocumentCollection for Arc<T>
where
    T: DocumentCollection + ?Sized,
{
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn find_all(&self) -> StoreResult<Vec<Document>> {
        (**self).find_all().await
    }

    async fn find_by_id(&self, id: ObjectId) -> StoreResult<Document> {
        (**self).find_by_id(id).await
    }

    async fn insert_one(&self, document: Document) -> StoreResult<InsertAck> {
        (**self).insert_one(document).await
    }

    async fn set_fields(&self, id: ObjectId, fields: Document) -> StoreResult<()> {
        (**self).set_fields(id, fields).await
    }

    async fn delete_by_id(&self, id: ObjectId) -> StoreResult<()> {
        (**self).delete_by_id(id).await
    }
}

/// Shared handle to a collection
pub type CollectionHandle = Arc<dyn DocumentCollection>;

/// The three resource collections, each already bound to the deadline.
#[derive(Clone)]
pub struct Collections {
    pub categories: CollectionHandle,
    pub species: CollectionHandle,
    pub animals: CollectionHandle,
}

impl Collections {
    pub const CATEGORIES: &'static str = "categories";
    pub const SPECIES: &'static str = "species";
    pub const ANIMALS: &'static str = "animals";

    /// Bind raw collection handles to one per-operation deadline.
    pub fn new(
        categories: CollectionHandle,
        species: CollectionHandle,
        animals: CollectionHandle,
        operation_timeout: Duration,
    ) -> Self {
        let bind = |handle: CollectionHandle| -> CollectionHandle {
            Arc::new(DeadlineCollection::new(handle, operation_timeout))
        };

        Self {
            categories: bind(categories),
            species: bind(species),
            animals: bind(animals),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_ack_serializes_hex_id() {
        let id = ObjectId::parse_str("65f1c0a2b3d4e5f601234567").unwrap();
        let json = serde_json::to_value(InsertAck { inserted_id: id }).unwrap();
        assert_eq!(json, serde_json::json!({ "InsertedID": "65f1c0a2b3d4e5f601234567" }));
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(StoreError::NotFound.to_string(), "no documents in result");
    }

    #[tokio::test]
    async fn test_collections_wrap_handles() {
        let animals = Arc::new(MemoryCollection::new(Collections::ANIMALS));
        let collections = Collections::new(
            Arc::new(MemoryCollection::new(Collections::CATEGORIES)),
            Arc::new(MemoryCollection::new(Collections::SPECIES)),
            animals.clone(),
            Duration::from_secs(30),
        );

        collections.animals.insert_one(Document::new()).await.unwrap();
        assert_eq!(collections.animals.name(), "animals");
        assert_eq!(animals.len().await, 1);
    }
}
