//! Field validation and conversion applied before a document is written
//!
//! Each resource declares a [`ValidationPolicy`]. Policies operate on the
//! BSON form of the decoded request body, so absent fields are simply
//! missing keys.

use bson::{Bson, DateTime as BsonDateTime, Document};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Utc};
use thiserror::Error;
use zoo_common::ids::{convert_reference, nil_object_id, parse_object_id};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Client input rejected before any storage access
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid ID")]
    InvalidId,

    #[error("Invalid {0} ID")]
    InvalidReference(&'static str),

    #[error("Invalid location data")]
    InvalidLocation,

    #[error("Invalid {0} format")]
    InvalidDate(&'static str),
}

/// Per-resource validation rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationPolicy {
    /// Fields holding references to other documents.
    pub references: &'static [&'static str],
    /// Create requires a `location` with a type and at least one coordinate.
    pub require_location: bool,
    /// Date fields; truncated to their calendar date on create.
    pub date_fields: &'static [&'static str],
}

impl ValidationPolicy {
    pub const NONE: ValidationPolicy = ValidationPolicy {
        references: &[],
        require_location: false,
        date_fields: &[],
    };

    /// Create phase: references, then location, then dates.
    ///
    /// Every reference field ends up as an ObjectId; absent or empty ones
    /// become the all-zero id.
    pub fn prepare_create(&self, fields: &mut Document) -> Result<(), ValidationError> {
        for &field in self.references {
            let id = match fields.get(field) {
                None | Some(Bson::Null) => nil_object_id(),
                Some(Bson::String(value)) => {
                    convert_reference(value).map_err(|_| ValidationError::InvalidReference(field))?
                },
                Some(_) => return Err(ValidationError::InvalidReference(field)),
            };
            fields.insert(field, id);
        }

        if self.require_location {
            check_location(fields)?;
        }

        for &field in self.date_fields {
            if let Some(value) = fields.get(field) {
                let date = calendar_date(value).ok_or(ValidationError::InvalidDate(field))?;
                fields.insert(field, date);
            }
        }

        Ok(())
    }

    /// Update phase: only submitted fields are touched.
    ///
    /// Dates must parse but keep their submitted instant.
    pub fn prepare_update(&self, fields: &mut Document) -> Result<(), ValidationError> {
        for &field in self.references {
            let id = match fields.get(field) {
                None => continue,
                Some(Bson::String(value)) => {
                    convert_reference(value).map_err(|_| ValidationError::InvalidReference(field))?
                },
                Some(_) => return Err(ValidationError::InvalidReference(field)),
            };
            fields.insert(field, id);
        }

        for &field in self.date_fields {
            if let Some(value) = fields.get(field) {
                let instant = instant(value).ok_or(ValidationError::InvalidDate(field))?;
                fields.insert(field, instant);
            }
        }

        Ok(())
    }
}

/// Validate an identifier taken from the request path.
pub fn parse_path_id(value: &str) -> Result<bson::oid::ObjectId, ValidationError> {
    parse_object_id(value).map_err(|_| ValidationError::InvalidId)
}

fn check_location(fields: &Document) -> Result<(), ValidationError> {
    let location = fields
        .get_document("location")
        .map_err(|_| ValidationError::InvalidLocation)?;

    let has_kind = location.get_str("type").map(|kind| !kind.is_empty()).unwrap_or(false);
    let has_coordinates = location
        .get_array("coordinates")
        .map(|coordinates| !coordinates.is_empty())
        .unwrap_or(false);

    if has_kind && has_coordinates {
        Ok(())
    } else {
        Err(ValidationError::InvalidLocation)
    }
}

/// Accepts RFC 3339 timestamps and plain `YYYY-MM-DD` dates.
fn parse_date_input(value: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp);
    }

    let date = NaiveDate::parse_from_str(value, DATE_FORMAT).ok()?;
    Some(date.and_time(NaiveTime::MIN).and_utc().fixed_offset())
}

fn instant(value: &Bson) -> Option<BsonDateTime> {
    match value {
        Bson::String(text) => {
            let timestamp = parse_date_input(text)?;
            Some(BsonDateTime::from_chrono(timestamp.with_timezone(&Utc)))
        },
        Bson::DateTime(existing) => Some(*existing),
        _ => None,
    }
}

/// Midnight UTC of the calendar date in the value's own offset.
fn calendar_date(value: &Bson) -> Option<BsonDateTime> {
    let date = match value {
        Bson::String(text) => parse_date_input(text)?.date_naive(),
        Bson::DateTime(existing) => existing.to_chrono().date_naive(),
        _ => return None,
    };

    let rendered = date.format(DATE_FORMAT).to_string();
    let date = NaiveDate::parse_from_str(&rendered, DATE_FORMAT).ok()?;
    Some(BsonDateTime::from_chrono(date.and_time(NaiveTime::MIN).and_utc()))
}
