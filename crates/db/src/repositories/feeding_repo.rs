//! Repository for the `feedings` table.

use petbook_core::types::DbId;
use sqlx::PgPool;

use crate::models::feeding::{CreateFeeding, Feeding};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, date, meal, pet_id, created_at";

/// Provides insert and list operations for feedings. There is no update
/// or delete: feedings are append-only.
pub struct FeedingRepo;

impl FeedingRepo {
    /// Insert a new feeding, returning the created row.
    ///
    /// The pet id is not re-checked here; a stale id is rejected by the
    /// foreign key.
    pub async fn create(pool: &PgPool, input: &CreateFeeding) -> Result<Feeding, sqlx::Error> {
        let query = format!(
            "INSERT INTO feedings (date, meal, pet_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Feeding>(&query)
            .bind(input.date)
            .bind(input.meal.as_str())
            .bind(input.pet_id)
            .fetch_one(pool)
            .await
    }

    /// List all feedings for a pet, newest first.
    pub async fn list_by_pet(pool: &PgPool, pet_id: DbId) -> Result<Vec<Feeding>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM feedings
             WHERE pet_id = $1
             ORDER BY date DESC, id DESC"
        );
        sqlx::query_as::<_, Feeding>(&query)
            .bind(pet_id)
            .fetch_all(pool)
            .await
    }
}
