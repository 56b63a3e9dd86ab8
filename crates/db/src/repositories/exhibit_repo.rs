//! Repository for the `exhibits` table.

use museum_core::types::DbId;
use sqlx::PgPool;

use crate::models::exhibit::{CreateExhibit, Exhibit, UpdateExhibit};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, period, description, image_url, category, location, \
                       is_active, created_at, updated_at";

/// Provides CRUD operations for exhibits. Inactive rows are invisible to
/// every method.
pub struct ExhibitRepo;

impl ExhibitRepo {
    /// Insert a new exhibit, returning the created row.
    ///
    /// Omitted optional fields are stored as empty strings. The caller is
    /// expected to have validated `title`.
    pub async fn create(pool: &PgPool, input: &CreateExhibit) -> Result<Exhibit, sqlx::Error> {
        let query = format!(
            "INSERT INTO exhibits (title, period, description, image_url, category, location)
             VALUES ($1, COALESCE($2, ''), COALESCE($3, ''), COALESCE($4, ''),
                     COALESCE($5, ''), COALESCE($6, ''))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Exhibit>(&query)
            .bind(&input.title)
            .bind(&input.period)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(&input.category)
            .bind(&input.location)
            .fetch_one(pool)
            .await
    }

    /// Find an active exhibit by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Exhibit>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM exhibits WHERE id = $1 AND is_active");
        sqlx::query_as::<_, Exhibit>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List active exhibits, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Exhibit>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM exhibits WHERE is_active ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Exhibit>(&query).fetch_all(pool).await
    }

    /// Update an exhibit. Only non-`None` fields in `input` are applied and
    /// `updated_at` is refreshed.
    ///
    /// Returns `None` if no active row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateExhibit,
    ) -> Result<Option<Exhibit>, sqlx::Error> {
        let query = format!(
            "UPDATE exhibits SET
                title = COALESCE($2, title),
                period = COALESCE($3, period),
                description = COALESCE($4, description),
                image_url = COALESCE($5, image_url),
                category = COALESCE($6, category),
                location = COALESCE($7, location),
                updated_at = NOW()
             WHERE id = $1 AND is_active
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Exhibit>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.period)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(&input.category)
            .bind(&input.location)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete an exhibit by ID. Returns `true` if an active row was
    /// marked inactive.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE exhibits SET is_active = FALSE, updated_at = NOW() WHERE id = $1 AND is_active",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
