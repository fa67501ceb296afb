//! Object identifier helpers
//!
//! Identifiers travel over HTTP as 24-character hex strings and are stored
//! as MongoDB ObjectIds. References to other documents follow a looser
//! rule than path identifiers: an empty reference is accepted and becomes
//! the all-zero ObjectId.
//!
//! # Example
//!
//! ```
//! use zoo_common::ids::{convert_reference, nil_object_id, parse_object_id};
//!
//! assert!(parse_object_id("not-an-id").is_err());
//! assert_eq!(convert_reference("").unwrap(), nil_object_id());
//! ```

use bson::oid::ObjectId;
use thiserror::Error;

/// Result type alias for identifier conversions
pub type IdResult<T> = std::result::Result<T, IdError>;

/// Errors produced while converting identifiers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    #[error("'{value}' is not a valid object id: {reason}")]
    Invalid { value: String, reason: String },
}

/// The all-zero ObjectId, stored for empty references.
pub fn nil_object_id() -> ObjectId {
    ObjectId::from_bytes([0; 12])
}

/// Returns true for the all-zero ObjectId.
pub fn is_nil(id: &ObjectId) -> bool {
    id.bytes() == [0; 12]
}

/// Parse a path identifier. The empty string is rejected.
pub fn parse_object_id(value: &str) -> IdResult<ObjectId> {
    ObjectId::parse_str(value).map_err(|e| IdError::Invalid {
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// Convert a reference field.
///
/// Empty input converts to [`nil_object_id`]; anything else must be a
/// well-formed 24-character hex identifier.
pub fn convert_reference(value: &str) -> IdResult<ObjectId> {
    if value.is_empty() {
        return Ok(nil_object_id());
    }
    parse_object_id(value)
}
