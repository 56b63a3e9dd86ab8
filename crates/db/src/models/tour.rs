//! Virtual tour entity model and DTOs.

use museum_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A tour row from the `virtual_tours` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Tour {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub duration_minutes: i32,
    pub video_url: String,
    pub thumbnail_url: String,
    pub category: String,
    pub viewers_count: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new tour.
///
/// Omitted text fields are stored as `""` and `duration_minutes` as `0`.
/// `viewers_count` always starts at `0`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateTour {
    #[validate(
        required(message = "Title is required"),
        length(min = 1, message = "Title is required")
    )]
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration_minutes: Option<i32>,
    pub video_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub category: Option<String>,
}

/// DTO for a partial update. The target `id` travels in the body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTour {
    pub id: Option<DbId>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration_minutes: Option<i32>,
    pub video_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub category: Option<String>,
    pub viewers_count: Option<i32>,
}

impl UpdateTour {
    /// Whether at least one updatable column is present.
    pub fn has_changes(&self) -> bool {
        self.title.is_some()
            || self.description.is_some()
            || self.duration_minutes.is_some()
            || self.video_url.is_some()
            || self.thumbnail_url.is_some()
            || self.category.is_some()
            || self.viewers_count.is_some()
    }
}
