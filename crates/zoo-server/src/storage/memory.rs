//! In-process document collection
//!
//! Mirrors the MongoDB collection semantics the handlers rely on:
//! generated ObjectIds, insertion-order iteration, `$set` merge on update,
//! and silent no-ops when update/delete match nothing. Backs the test
//! suite.

use async_trait::async_trait;
use bson::{oid::ObjectId, Document};
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

use super::{DocumentCollection, InsertAck, StoreError, StoreResult};

#[derive(Debug)]
pub struct MemoryCollection {
    name: String,
    documents: RwLock<Vec<Document>>,
    operations: AtomicUsize,
}

impl MemoryCollection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            documents: RwLock::new(Vec::new()),
            operations: AtomicUsize::new(0),
        }
    }

    /// Number of stored documents.
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Number of storage operations issued against this collection.
    pub fn operations(&self) -> usize {
        self.operations.load(Ordering::SeqCst)
    }

    fn record_operation(&self) {
        self.operations.fetch_add(1, Ordering::SeqCst);
    }
}

fn has_id(document: &Document, id: &ObjectId) -> bool {
    document.get_object_id("_id").map(|found| &found == id).unwrap_or(false)
}

#[async_trait]
impl DocumentCollection for MemoryCollection {
    fn name(&self) -> &str {
        &self.name
    }

    async fn find_all(&self) -> StoreResult<Vec<Document>> {
        self.record_operation();
        Ok(self.documents.read().await.clone())
    }

    async fn find_by_id(&self, id: ObjectId) -> StoreResult<Document> {
        self.record_operation();
        self.documents
            .read()
            .await
            .iter()
            .find(|document| has_id(document, &id))
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn insert_one(&self, mut document: Document) -> StoreResult<InsertAck> {
        self.record_operation();
        let inserted_id = match document.get_object_id("_id") {
            Ok(id) => id,
            Err(_) => {
                let id = ObjectId::new();
                document.insert("_id", id);
                id
            },
        };

        self.documents.write().await.push(document);
        Ok(InsertAck { inserted_id })
    }

    async fn set_fields(&self, id: ObjectId, fields: Document) -> StoreResult<()> {
        self.record_operation();
        let mut documents = self.documents.write().await;
        if let Some(document) = documents.iter_mut().find(|document| has_id(document, &id)) {
            for (key, value) in fields {
                document.insert(key, value);
            }
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: ObjectId) -> StoreResult<()> {
        self.record_operation();
        self.documents.write().await.retain(|document| !has_id(document, &id));
        Ok(())
    }
}
