//! Repository for the `photos` table.

use petbook_core::types::DbId;
use sqlx::PgPool;

use crate::models::photo::Photo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, url, pet_id, created_at";

/// Provides insert and list operations for photos. Append-only, like
/// feedings.
pub struct PhotoRepo;

impl PhotoRepo {
    /// Insert a new photo record, returning the created row.
    pub async fn create(pool: &PgPool, pet_id: DbId, url: &str) -> Result<Photo, sqlx::Error> {
        let query = format!(
            "INSERT INTO photos (url, pet_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Photo>(&query)
            .bind(url)
            .bind(pet_id)
            .fetch_one(pool)
            .await
    }

    /// List all photos for a pet, in insertion order.
    pub async fn list_by_pet(pool: &PgPool, pet_id: DbId) -> Result<Vec<Photo>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM photos
             WHERE pet_id = $1
             ORDER BY id"
        );
        sqlx::query_as::<_, Photo>(&query)
            .bind(pet_id)
            .fetch_all(pool)
            .await
    }
}
