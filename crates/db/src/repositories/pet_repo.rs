//! Repository for the `pets` table.

use petbook_core::types::DbId;
use sqlx::PgPool;

use crate::models::pet::{CreatePet, Pet, UpdatePet};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, breed, description, age, created_at, updated_at";

/// Provides CRUD operations for pets.
pub struct PetRepo;

impl PetRepo {
    /// Insert a new pet, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePet) -> Result<Pet, sqlx::Error> {
        let query = format!(
            "INSERT INTO pets (name, breed, description, age)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Pet>(&query)
            .bind(&input.name)
            .bind(&input.breed)
            .bind(&input.description)
            .bind(input.age)
            .fetch_one(pool)
            .await
    }

    /// Find a pet by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Pet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pets WHERE id = $1");
        sqlx::query_as::<_, Pet>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all pets in insertion order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Pet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pets ORDER BY id");
        sqlx::query_as::<_, Pet>(&query).fetch_all(pool).await
    }

    /// List the pets associated with a toy, in insertion order.
    pub async fn list_by_toy(pool: &PgPool, toy_id: DbId) -> Result<Vec<Pet>, sqlx::Error> {
        let query = "SELECT p.id, p.name, p.breed, p.description, p.age, \
                     p.created_at, p.updated_at \
             FROM pets p
             JOIN pet_toys pt ON pt.pet_id = p.id
             WHERE pt.toy_id = $1
             ORDER BY p.id";
        sqlx::query_as::<_, Pet>(query)
            .bind(toy_id)
            .fetch_all(pool)
            .await
    }

    /// Update a pet. Only non-`None` fields in `input` are applied; the
    /// name is never touched.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePet,
    ) -> Result<Option<Pet>, sqlx::Error> {
        let query = format!(
            "UPDATE pets SET
                breed = COALESCE($2, breed),
                description = COALESCE($3, description),
                age = COALESCE($4, age),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Pet>(&query)
            .bind(id)
            .bind(&input.breed)
            .bind(&input.description)
            .bind(input.age)
            .fetch_optional(pool)
            .await
    }

    /// Delete a pet by ID. Feedings, photos, and association rows cascade.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM pets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
