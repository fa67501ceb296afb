//! Per-operation deadline for document collections

use async_trait::async_trait;
use bson::{oid::ObjectId, Document};
use std::{future::Future, time::Duration};

use super::{DocumentCollection, InsertAck, StoreError, StoreResult};

/// Runs every operation of the wrapped collection under one timeout.
///
/// An expired deadline is reported as [`StoreError::DeadlineExceeded`];
/// the in-flight driver call is dropped, not retried.
#[derive(Debug, Clone)]
pub struct DeadlineCollection<C> {
    inner: C,
    timeout: Duration,
}

impl<C: DocumentCollection> DeadlineCollection<C> {
    pub fn new(inner: C, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn run<T>(
        &self,
        operation: &'static str,
        call: impl Future<Output = StoreResult<T>> + Send,
    ) -> StoreResult<T> {
        match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(
                    collection = self.inner.name(),
                    operation,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "Storage operation timed out"
                );
                Err(StoreError::DeadlineExceeded {
                    operation,
                    collection: self.inner.name().to_string(),
                    timeout: self.timeout,
                })
            },
        }
    }
}

#[async_trait]
impl<C: DocumentCollection> DocumentCollection for DeadlineCollection<C> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn find_all(&self) -> StoreResult<Vec<Document>> {
        self.run("find", self.inner.find_all()).await
    }

    async fn find_by_id(&self, id: ObjectId) -> StoreResult<Document> {
        self.run("find_one", self.inner.find_by_id(id)).await
    }

    async fn insert_one(&self, document: Document) -> StoreResult<InsertAck> {
        self.run("insert_one", self.inner.insert_one(document)).await
    }

    async fn set_fields(&self, id: ObjectId, fields: Document) -> StoreResult<()> {
        self.run("update_one", self.inner.set_fields(id, fields)).await
    }

    async fn delete_by_id(&self, id: ObjectId) -> StoreResult<()> {
        self.run("delete_one", self.inner.delete_by_id(id)).await
    }
}
