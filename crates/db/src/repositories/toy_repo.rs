//! Repository for the `toys` table.

use petbook_core::types::DbId;
use sqlx::PgPool;

use crate::models::toy::{CreateToy, Toy, UpdateToy};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, color, created_at, updated_at";

/// Provides CRUD operations for toys.
pub struct ToyRepo;

impl ToyRepo {
    /// Insert a new toy, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateToy) -> Result<Toy, sqlx::Error> {
        let query = format!(
            "INSERT INTO toys (name, color)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Toy>(&query)
            .bind(&input.name)
            .bind(&input.color)
            .fetch_one(pool)
            .await
    }

    /// Find a toy by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Toy>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM toys WHERE id = $1");
        sqlx::query_as::<_, Toy>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all toys in insertion order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Toy>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM toys ORDER BY id");
        sqlx::query_as::<_, Toy>(&query).fetch_all(pool).await
    }

    /// List the toys associated with a pet.
    pub async fn list_for_pet(pool: &PgPool, pet_id: DbId) -> Result<Vec<Toy>, sqlx::Error> {
        let query = "SELECT t.id, t.name, t.color, t.created_at, t.updated_at
             FROM toys t
             JOIN pet_toys pt ON pt.toy_id = t.id
             WHERE pt.pet_id = $1
             ORDER BY t.id";
        sqlx::query_as::<_, Toy>(query)
            .bind(pet_id)
            .fetch_all(pool)
            .await
    }

    /// List the toys a pet does NOT have: the set difference the detail
    /// page offers as assignable toys.
    pub async fn list_available_for_pet(
        pool: &PgPool,
        pet_id: DbId,
    ) -> Result<Vec<Toy>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM toys
             WHERE id NOT IN (SELECT toy_id FROM pet_toys WHERE pet_id = $1)
             ORDER BY id"
        );
        sqlx::query_as::<_, Toy>(&query)
            .bind(pet_id)
            .fetch_all(pool)
            .await
    }

    /// Update a toy. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateToy,
    ) -> Result<Option<Toy>, sqlx::Error> {
        let query = format!(
            "UPDATE toys SET
                name = COALESCE($2, name),
                color = COALESCE($3, color),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Toy>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.color)
            .fetch_optional(pool)
            .await
    }

    /// Delete a toy by ID. Association rows cascade. Returns `true` if a
    /// row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM toys WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
