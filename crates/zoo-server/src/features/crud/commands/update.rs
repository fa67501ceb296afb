use bson::oid::ObjectId;
use serde_json::Value;

use crate::{
    error::{AppError, AppResult},
    features::shared::{render, Resource},
    storage::{DocumentCollection, StoreError},
};

/// `$set` the submitted fields on the document with `id`.
///
/// Returns the fields that were written, rendered as JSON. An id that
/// matches nothing is not an error.
#[tracing::instrument(skip(collection, body), fields(resource = R::SINGULAR))]
pub async fn handle<R: Resource>(
    collection: &dyn DocumentCollection,
    id: ObjectId,
    body: R::Body,
) -> AppResult<Value> {
    let mut fields = bson::to_document(&body).map_err(StoreError::from)?;
    if fields.is_empty() {
        return Err(AppError::NoFieldsToUpdate);
    }

    R::POLICY.prepare_update(&mut fields)?;

    let echo = render::document_to_json(&fields);
    collection.set_fields(id, fields).await?;

    Ok(echo)
}
