//! Animals: `{ _id, animal_name, species, image, birthdate, location, owner }`
//!
//! `species` references a species and `owner` an external owner record.
//! Creating an animal requires a location with a type and coordinates.
//! `birthdate` is stored as midnight UTC of its calendar date.

use bson::{oid::ObjectId, DateTime as BsonDateTime};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use zoo_common::ids::nil_object_id;

use super::shared::{GeoPoint, GeoPointBody, Resource, ValidationPolicy};

pub struct Animal;

impl Resource for Animal {
    const SINGULAR: &'static str = "animal";
    const PLURAL: &'static str = "animals";
    const POLICY: ValidationPolicy = ValidationPolicy {
        references: &["species", "owner"],
        require_location: true,
        date_fields: &["birthdate"],
    };

    type Body = AnimalBody;
    type Record = AnimalRecord;
    type View = AnimalView;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnimalBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animal_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub species: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// RFC 3339 timestamp or `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPointBody>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimalRecord {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub animal_name: String,
    #[serde(default = "nil_object_id")]
    pub species: ObjectId,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<BsonDateTime>,
    #[serde(default)]
    pub location: GeoPoint,
    #[serde(default = "nil_object_id")]
    pub owner: ObjectId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimalView {
    #[serde(rename = "_id")]
    pub id: String,
    pub animal_name: String,
    pub species: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<DateTime<Utc>>,
    pub location: GeoPoint,
    pub owner: String,
}

impl From<AnimalRecord> for AnimalView {
    fn from(record: AnimalRecord) -> Self {
        Self {
            id: record.id.map(|id| id.to_hex()).unwrap_or_default(),
            animal_name: record.animal_name,
            species: record.species.to_hex(),
            image: record.image,
            birthdate: record.birthdate.map(BsonDateTime::to_chrono),
            location: record.location,
            owner: record.owner.to_hex(),
        }
    }
}
