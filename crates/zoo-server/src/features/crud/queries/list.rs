use crate::{
    error::AppResult,
    features::shared::Resource,
    storage::{DocumentCollection, StoreError},
};

/// Every stored document, or an error. Never a partial list.
#[tracing::instrument(skip_all, fields(resource = R::PLURAL))]
pub async fn handle<R: Resource>(collection: &dyn DocumentCollection) -> AppResult<Vec<R::View>> {
    let documents = collection.find_all().await?;

    documents
        .into_iter()
        .map(|document| -> AppResult<R::View> {
            let record: R::Record = bson::from_document(document).map_err(StoreError::from)?;
            Ok(record.into())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::AppError, features::species::Species, storage::MemoryCollection};
    use bson::doc;

    #[tokio::test]
    async fn test_list_empty() {
        let collection = MemoryCollection::new("species");
        let views = handle::<Species>(&collection).await.unwrap();
        assert!(views.is_empty());
    }

    #[tokio::test]
    async fn test_undecodable_document_fails_whole_list() {
        let collection = MemoryCollection::new("species");
        collection.insert_one(doc! { "species_name": "Wolf" }).await.unwrap();
        collection.insert_one(doc! { "species_name": 42 }).await.unwrap();

        let err = handle::<Species>(&collection).await.unwrap_err();

        assert!(matches!(err, AppError::Storage(StoreError::Decode(_))));
    }
}
