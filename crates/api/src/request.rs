//! Request parsing shared by the method-dispatching handlers.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::error::{AppError, AppResult};

/// Raw query-string parameters.
pub type QueryParams = HashMap<String, String>;

/// Deserialize a JSON request body. An empty body is read as `{}`.
///
/// A body that is not valid JSON fails the request with the opaque 500.
pub fn json_body<T: DeserializeOwned>(body: &[u8]) -> AppResult<T> {
    let body = if body.iter().all(u8::is_ascii_whitespace) {
        b"{}".as_slice()
    } else {
        body
    };

    serde_json::from_slice(body)
        .map_err(|e| AppError::InternalError(format!("Invalid JSON body: {e}")))
}

/// The `id` query parameter, treating an empty value as absent.
pub fn id_param(params: &QueryParams) -> Option<&str> {
    params
        .get("id")
        .map(String::as_str)
        .filter(|s| !s.trim().is_empty())
}
