//! Exhibit entity model and DTOs.

use museum_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// An exhibit row from the `exhibits` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Exhibit {
    pub id: DbId,
    pub title: String,
    pub period: String,
    pub description: String,
    pub image_url: String,
    pub category: String,
    pub location: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new exhibit.
///
/// Only `title` is required. Omitted text fields are stored as `""`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateExhibit {
    #[validate(
        required(message = "Title is required"),
        length(min = 1, message = "Title is required")
    )]
    pub title: Option<String>,
    pub period: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
}

/// DTO for a partial update. The target `id` travels in the body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateExhibit {
    pub id: Option<DbId>,
    pub title: Option<String>,
    pub period: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
}

impl UpdateExhibit {
    /// Whether at least one updatable column is present.
    pub fn has_changes(&self) -> bool {
        self.title.is_some()
            || self.period.is_some()
            || self.description.is_some()
            || self.image_url.is_some()
            || self.category.is_some()
            || self.location.is_some()
    }
}
