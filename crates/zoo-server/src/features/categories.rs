//! Categories: `{ _id, category_name }`

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::shared::{Resource, ValidationPolicy};

pub struct Category;

impl Resource for Category {
    const SINGULAR: &'static str = "category";
    const PLURAL: &'static str = "categories";
    const POLICY: ValidationPolicy = ValidationPolicy::NONE;

    type Body = CategoryBody;
    type Record = CategoryRecord;
    type View = CategoryView;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRecord {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub category_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryView {
    #[serde(rename = "_id")]
    pub id: String,
    pub category_name: String,
}

impl From<CategoryRecord> for CategoryView {
    fn from(record: CategoryRecord) -> Self {
        Self {
            id: record.id.map(|id| id.to_hex()).unwrap_or_default(),
            category_name: record.category_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_view_wire_format() {
        let record: CategoryRecord = bson::from_document(bson::doc! {
            "_id": ObjectId::parse_str("65f1c0a2b3d4e5f601234567").unwrap(),
            "category_name": "Mammal",
        })
        .unwrap();

        let json = serde_json::to_value(CategoryView::from(record)).unwrap();
        assert_eq!(json, json!({ "_id": "65f1c0a2b3d4e5f601234567", "category_name": "Mammal" }));
    }

    #[test]
    fn test_empty_body_serializes_to_empty_document() {
        assert!(bson::to_document(&CategoryBody::default()).unwrap().is_empty());
    }
}
