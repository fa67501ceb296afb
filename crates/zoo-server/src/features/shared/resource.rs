//! Resource definitions plugged into the generic handlers

use serde::{de::DeserializeOwned, Serialize};

use super::ValidationPolicy;

/// One REST resource backed by one collection.
///
/// - `Body` is the JSON request body. Every field is optional and absent
///   fields must not serialize.
/// - `Record` is the stored document. Missing fields decode to zero values.
/// - `View` is the JSON response for a stored document.
pub trait Resource: Send + Sync + 'static {
    /// Path segment for single-document routes, e.g. `/animal/:id`.
    const SINGULAR: &'static str;
    /// Path segment for the list route, e.g. `/animals`.
    const PLURAL: &'static str;
    const POLICY: ValidationPolicy;

    type Body: DeserializeOwned + Serialize + Default + Send + 'static;
    type Record: DeserializeOwned + Serialize + Send + 'static;
    type View: Serialize + From<Self::Record> + Send + 'static;
}
