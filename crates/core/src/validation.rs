//! Helpers that turn request input problems into [`CoreError`] values.

use validator::ValidationErrors;

use crate::error::CoreError;
use crate::museum;
use crate::types::DbId;

/// Collapse a set of field errors into a single message.
///
/// Fields are visited in name order so the message is stable. The first
/// error's configured `message` wins; errors without one fall back to a
/// generic message naming the field.
pub fn first_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .iter()
        .find_map(|(field, errs)| {
            errs.first().map(|err| match &err.message {
                Some(message) => message.to_string(),
                None => format!("Invalid value for '{field}'"),
            })
        })
        .unwrap_or_else(|| "Validation failed".to_string())
}

impl From<ValidationErrors> for CoreError {
    fn from(errors: ValidationErrors) -> Self {
        CoreError::Validation(first_message(&errors))
    }
}

/// Require an ID that arrived in a JSON body.
pub fn require_id(entity: &str, id: Option<DbId>) -> Result<DbId, CoreError> {
    id.ok_or_else(|| CoreError::Validation(museum::id_required(entity)))
}

/// Parse an ID that arrived as a query parameter.
///
/// A missing or blank value is reported the same way as a missing body ID.
/// A value that is not an integer is an internal failure: the caller sees
/// the opaque 500, never the parse error.
pub fn parse_id(entity: &str, raw: Option<&str>) -> Result<DbId, CoreError> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| CoreError::Validation(museum::id_required(entity)))?;

    raw.parse::<DbId>()
        .map_err(|e| CoreError::Internal(format!("{entity} ID '{raw}' is not an integer: {e}")))
}
