//! Toy models and DTOs.

use petbook_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::pet::Pet;

/// A row from the `toys` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Toy {
    pub id: DbId,
    pub name: String,
    pub color: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new toy. `color` is validated against the palette
/// before the insert.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateToy {
    pub name: String,
    pub color: String,
}

/// DTO for updating an existing toy.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateToy {
    pub name: Option<String>,
    pub color: Option<String>,
}

/// Aggregate payload for the toy detail endpoint.
#[derive(Debug, Serialize)]
pub struct ToyDetail {
    pub toy: Toy,
    pub pets: Vec<Pet>,
}
