//! Species: `{ _id, species_name, category, image, location }`
//!
//! `category` references a category by id. The location is stored as
//! submitted and is not required.

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use zoo_common::ids::nil_object_id;

use super::shared::{GeoPoint, GeoPointBody, Resource, ValidationPolicy};

pub struct Species;

impl Resource for Species {
    const SINGULAR: &'static str = "species";
    const PLURAL: &'static str = "species";
    const POLICY: ValidationPolicy = ValidationPolicy {
        references: &["category"],
        require_location: false,
        date_fields: &[],
    };

    type Body = SpeciesBody;
    type Record = SpeciesRecord;
    type View = SpeciesView;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpeciesBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub species_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPointBody>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesRecord {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub species_name: String,
    #[serde(default = "nil_object_id")]
    pub category: ObjectId,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub location: GeoPoint,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesView {
    #[serde(rename = "_id")]
    pub id: String,
    pub species_name: String,
    pub category: String,
    pub image: String,
    pub location: GeoPoint,
}

impl From<SpeciesRecord> for SpeciesView {
    fn from(record: SpeciesRecord) -> Self {
        Self {
            id: record.id.map(|id| id.to_hex()).unwrap_or_default(),
            species_name: record.species_name,
            category: record.category.to_hex(),
            image: record.image,
            location: record.location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[test]
    fn test_record_defaults_missing_fields() {
        let record: SpeciesRecord = bson::from_document(doc! { "species_name": "Wolf" }).unwrap();
        assert_eq!(record.category, nil_object_id());
        assert_eq!(record.image, "");
        assert_eq!(record.location, GeoPoint::default());
    }

    #[test]
    fn test_view_renders_reference_as_hex() {
        let category = ObjectId::parse_str("65f1c0a2b3d4e5f601234567").unwrap();
        let record: SpeciesRecord = bson::from_document(doc! {
            "_id": ObjectId::new(),
            "species_name": "Wolf",
            "category": category,
            "location": { "type": "Point", "coordinates": [1.0, 2.0] },
        })
        .unwrap();

        let view = SpeciesView::from(record);
        assert_eq!(view.category, "65f1c0a2b3d4e5f601234567");
        assert_eq!(view.location.coordinates, vec![1.0, 2.0]);
    }
}
