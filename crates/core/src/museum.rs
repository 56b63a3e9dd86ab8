//! Entity names and user-facing messages shared by the exhibit and tour
//! endpoints.

/// Display name for the `exhibits` table.
pub const EXHIBIT: &str = "Exhibit";

/// Display name for the `virtual_tours` table.
pub const TOUR: &str = "Tour";

pub const TITLE_REQUIRED: &str = "Title is required";
pub const NO_FIELDS_TO_UPDATE: &str = "No fields to update";
pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";

/// `"<Entity> ID is required"`.
pub fn id_required(entity: &str) -> String {
    format!("{entity} ID is required")
}

/// `"<Entity> deleted successfully"`.
pub fn deleted(entity: &str) -> String {
    format!("{entity} deleted successfully")
}
