//! MongoDB collections and the start-up connection

use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Document};
use futures::TryStreamExt;
use mongodb::{options::ClientOptions, Client, Collection, Database};
use std::{future::IntoFuture, sync::Arc, time::Duration};
use tracing::info;

use super::{Collections, DocumentCollection, InsertAck, StoreError, StoreResult};
use crate::config::DatabaseConfig;

const APP_NAME: &str = "zoo-server";

/// A MongoDB collection of untyped documents
#[derive(Debug, Clone)]
pub struct MongoCollection {
    inner: Collection<Document>,
}

impl MongoCollection {
    pub fn new(database: &Database, name: &str) -> Self {
        Self {
            inner: database.collection::<Document>(name),
        }
    }
}

#[async_trait]
impl DocumentCollection for MongoCollection {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn find_all(&self) -> StoreResult<Vec<Document>> {
        let cursor = self.inner.find(doc! {}).await?;
        let documents: Vec<Document> = cursor.try_collect().await?;
        Ok(documents)
    }

    async fn find_by_id(&self, id: ObjectId) -> StoreResult<Document> {
        self.inner
            .find_one(doc! { "_id": id })
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn insert_one(&self, document: Document) -> StoreResult<InsertAck> {
        let result = self.inner.insert_one(document).await?;
        let inserted_id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| StoreError::MissingInsertedId(self.inner.name().to_string()))?;
        Ok(InsertAck { inserted_id })
    }

    async fn set_fields(&self, id: ObjectId, fields: Document) -> StoreResult<()> {
        self.inner
            .update_one(doc! { "_id": id }, doc! { "$set": fields })
            .await?;
        Ok(())
    }

    async fn delete_by_id(&self, id: ObjectId) -> StoreResult<()> {
        self.inner.delete_one(doc! { "_id": id }).await?;
        Ok(())
    }
}

/// Connect to MongoDB and hand out the three resource collections.
///
/// The connection is verified with a `ping` that must answer within
/// `connect_timeout_secs`. There is no retry: callers treat an error here
/// as fatal.
pub async fn connect(config: &DatabaseConfig) -> StoreResult<Collections> {
    let connect_timeout = Duration::from_secs(config.connect_timeout_secs);

    let mut options = ClientOptions::parse(&config.uri).await?;
    options.app_name = Some(APP_NAME.to_string());
    options.connect_timeout = Some(connect_timeout);
    options.server_selection_timeout = Some(connect_timeout);

    let client = Client::with_options(options)?;
    let database = client.database(&config.name);

    tokio::time::timeout(connect_timeout, database.run_command(doc! { "ping": 1 }).into_future())
        .await
        .map_err(|_| StoreError::DeadlineExceeded {
            operation: "connect",
            collection: config.name.clone(),
            timeout: connect_timeout,
        })??;

    info!(database = %config.name, "Connected to MongoDB");

    Ok(collections_for(&database, config.operation_timeout()))
}

/// The resource collections of an already connected database.
pub fn collections_for(database: &Database, operation_timeout: Duration) -> Collections {
    Collections::new(
        Arc::new(MongoCollection::new(database, Collections::CATEGORIES)),
        Arc::new(MongoCollection::new(database, Collections::SPECIES)),
        Arc::new(MongoCollection::new(database, Collections::ANIMALS)),
        operation_timeout,
    )
}
