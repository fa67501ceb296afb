//! Request body decoding

use axum::body::Bytes;
use serde::de::DeserializeOwned;

use crate::{
    config::BodyDecoding,
    error::{AppError, AppResult},
};

/// Decode a JSON body according to the configured strictness.
///
/// Unknown fields are ignored. In lenient mode a body that fails to decode
/// is replaced by `T::default()`.
pub fn decode_body<T>(decoding: BodyDecoding, bytes: &Bytes) -> AppResult<T>
where
    T: DeserializeOwned + Default,
{
    match serde_json::from_slice(bytes) {
        Ok(body) => Ok(body),
        Err(e) => match decoding {
            BodyDecoding::Strict => Err(AppError::InvalidBody(e.to_string())),
            BodyDecoding::Lenient => {
                tracing::warn!(error = %e, "Ignoring undecodable request body");
                Ok(T::default())
            },
        },
    }
}
