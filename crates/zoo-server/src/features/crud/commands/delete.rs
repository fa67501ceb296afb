use bson::oid::ObjectId;

use crate::{error::AppResult, storage::DocumentCollection};

/// Delete at most one document. Deleting a missing id succeeds.
#[tracing::instrument(skip(collection), fields(collection = collection.name()))]
pub async fn handle(collection: &dyn DocumentCollection, id: ObjectId) -> AppResult<()> {
    collection.delete_by_id(id).await?;
    Ok(())
}
