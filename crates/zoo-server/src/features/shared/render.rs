//! BSON to JSON rendering for update echoes

use bson::{Bson, Document};
use chrono::SecondsFormat;
use serde_json::{Map, Value};

/// Render stored fields the way clients submit them: ObjectIds as hex
/// strings and datetimes as RFC 3339 UTC timestamps.
pub fn document_to_json(document: &Document) -> Value {
    let map: Map<String, Value> = document
        .iter()
        .map(|(key, value)| (key.clone(), bson_to_json(value)))
        .collect();
    Value::Object(map)
}

fn bson_to_json(value: &Bson) -> Value {
    match value {
        Bson::ObjectId(id) => Value::String(id.to_hex()),
        Bson::DateTime(instant) => {
            Value::String(instant.to_chrono().to_rfc3339_opts(SecondsFormat::AutoSi, true))
        },
        Bson::Document(document) => document_to_json(document),
        Bson::Array(items) => Value::Array(items.iter().map(bson_to_json).collect()),
        Bson::String(text) => Value::String(text.clone()),
        Bson::Boolean(flag) => Value::Bool(*flag),
        Bson::Int32(n) => Value::from(*n),
        Bson::Int64(n) => Value::from(*n),
        Bson::Double(n) => serde_json::Number::from_f64(*n).map(Value::Number).unwrap_or(Value::Null),
        Bson::Null => Value::Null,
        other => other.clone().into_relaxed_extjson(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::{doc, oid::ObjectId, DateTime};
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    #[test]
    fn test_renders_ids_and_dates_like_requests() {
        let id = ObjectId::parse_str("65f1c0a2b3d4e5f601234567").unwrap();
        let born = DateTime::from_chrono(Utc.with_ymd_and_hms(2020, 5, 17, 10, 30, 0).unwrap());
        let fields = doc! {
            "animal_name": "Rex",
            "species": id,
            "birthdate": born,
            "location": { "type": "Point", "coordinates": [12.5, 41.9] },
        };

        assert_eq!(
            document_to_json(&fields),
            json!({
                "animal_name": "Rex",
                "species": "65f1c0a2b3d4e5f601234567",
                "birthdate": "2020-05-17T10:30:00Z",
                "location": { "type": "Point", "coordinates": [12.5, 41.9] },
            })
        );
    }

    #[test]
    fn test_scalars() {
        let rendered = document_to_json(&doc! { "n": 3_i32, "big": 7_i64, "none": Bson::Null, "ok": true });
        assert_eq!(rendered, json!({ "n": 3, "big": 7, "none": null, "ok": true }));
    }
}
