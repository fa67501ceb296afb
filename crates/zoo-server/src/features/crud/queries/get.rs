use bson::oid::ObjectId;

use crate::{
    error::AppResult,
    features::shared::Resource,
    storage::{DocumentCollection, StoreError},
};

#[tracing::instrument(skip(collection), fields(resource = R::SINGULAR))]
pub async fn handle<R: Resource>(
    collection: &dyn DocumentCollection,
    id: ObjectId,
) -> AppResult<R::View> {
    let document = collection.find_by_id(id).await?;
    let record: R::Record = bson::from_document(document).map_err(StoreError::from)?;
    Ok(record.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::AppError, features::categories::Category, storage::MemoryCollection};
    use bson::doc;

    #[tokio::test]
    async fn test_get_existing() {
        let collection = MemoryCollection::new("categories");
        let ack = collection.insert_one(doc! { "category_name": "Fish" }).await.unwrap();

        let view = handle::<Category>(&collection, ack.inserted_id).await.unwrap();

        assert_eq!(view.id, ack.inserted_id.to_hex());
        assert_eq!(view.category_name, "Fish");
    }

    #[tokio::test]
    async fn test_get_missing_is_storage_error() {
        let collection = MemoryCollection::new("categories");

        let err = handle::<Category>(&collection, ObjectId::new()).await.unwrap_err();

        assert!(matches!(err, AppError::Storage(StoreError::NotFound)));
    }
}
