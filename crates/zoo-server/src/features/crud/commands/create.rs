use crate::{
    error::AppResult,
    features::shared::Resource,
    storage::{DocumentCollection, InsertAck, StoreError},
};

/// Validate `body`, fill absent fields with zero values and insert it.
#[tracing::instrument(skip_all, fields(resource = R::SINGULAR))]
pub async fn handle<R: Resource>(
    collection: &dyn DocumentCollection,
    body: R::Body,
) -> AppResult<InsertAck> {
    let mut fields = bson::to_document(&body).map_err(StoreError::from)?;
    R::POLICY.prepare_create(&mut fields)?;

    let record: R::Record = bson::from_document(fields).map_err(StoreError::from)?;
    let document = bson::to_document(&record).map_err(StoreError::from)?;

    Ok(collection.insert_one(document).await?)
}
