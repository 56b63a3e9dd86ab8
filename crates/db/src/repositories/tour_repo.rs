//! Repository for the `virtual_tours` table.

use museum_core::types::DbId;
use sqlx::PgPool;

use crate::models::tour::{CreateTour, Tour, UpdateTour};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, duration_minutes, video_url, thumbnail_url, \
                       category, viewers_count, is_active, created_at, updated_at";

/// Provides CRUD operations for virtual tours. Inactive rows are invisible
/// to every method.
pub struct TourRepo;

impl TourRepo {
    /// Insert a new tour, returning the created row. `viewers_count` starts
    /// at the column default.
    pub async fn create(pool: &PgPool, input: &CreateTour) -> Result<Tour, sqlx::Error> {
        let query = format!(
            "INSERT INTO virtual_tours
                (title, description, duration_minutes, video_url, thumbnail_url, category)
             VALUES ($1, COALESCE($2, ''), COALESCE($3, 0), COALESCE($4, ''),
                     COALESCE($5, ''), COALESCE($6, ''))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tour>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.duration_minutes)
            .bind(&input.video_url)
            .bind(&input.thumbnail_url)
            .bind(&input.category)
            .fetch_one(pool)
            .await
    }

    /// Find an active tour by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Tour>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM virtual_tours WHERE id = $1 AND is_active");
        sqlx::query_as::<_, Tour>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List active tours, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Tour>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM virtual_tours WHERE is_active ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Tour>(&query).fetch_all(pool).await
    }

    /// Update a tour. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no active row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTour,
    ) -> Result<Option<Tour>, sqlx::Error> {
        let query = format!(
            "UPDATE virtual_tours SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                duration_minutes = COALESCE($4, duration_minutes),
                video_url = COALESCE($5, video_url),
                thumbnail_url = COALESCE($6, thumbnail_url),
                category = COALESCE($7, category),
                viewers_count = COALESCE($8, viewers_count),
                updated_at = NOW()
             WHERE id = $1 AND is_active
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tour>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.duration_minutes)
            .bind(&input.video_url)
            .bind(&input.thumbnail_url)
            .bind(&input.category)
            .bind(input.viewers_count)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a tour by ID. Returns `true` if an active row was marked
    /// inactive.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE virtual_tours SET is_active = FALSE, updated_at = NOW() \
             WHERE id = $1 AND is_active",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
