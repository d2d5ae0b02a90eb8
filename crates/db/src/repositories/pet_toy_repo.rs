//! Repository for the `pet_toys` junction table.

use petbook_core::types::DbId;
use sqlx::PgPool;

/// Provides association operations between pets and toys. Both directions
/// of the relation are idempotent.
pub struct PetToyRepo;

impl PetToyRepo {
    /// Associate a toy with a pet. A no-op if the pair already exists.
    /// Returns `true` if a row was inserted.
    pub async fn associate(pool: &PgPool, pet_id: DbId, toy_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO pet_toys (pet_id, toy_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
        )
        .bind(pet_id)
        .bind(toy_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Remove the association between a pet and a toy. A no-op if the pair
    /// is absent. Returns `true` if a row was deleted.
    pub async fn unassociate(
        pool: &PgPool,
        pet_id: DbId,
        toy_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM pet_toys WHERE pet_id = $1 AND toy_id = $2")
            .bind(pet_id)
            .bind(toy_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count association rows for a pair. Only ever 0 or 1 thanks to the
    /// composite primary key; used by tests to assert idempotency.
    pub async fn count_for_pair(
        pool: &PgPool,
        pet_id: DbId,
        toy_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM pet_toys WHERE pet_id = $1 AND toy_id = $2")
            .bind(pet_id)
            .bind(toy_id)
            .fetch_one(pool)
            .await
    }
}
