//! Pet models and DTOs.

use petbook_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::feeding::Feeding;
use crate::models::photo::Photo;
use crate::models::toy::Toy;

/// A row from the `pets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Pet {
    pub id: DbId,
    pub name: String,
    pub breed: String,
    pub description: String,
    pub age: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new pet.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePet {
    pub name: String,
    pub breed: String,
    pub description: String,
    pub age: i32,
}

/// DTO for updating an existing pet.
///
/// `name` is deliberately absent: a pet cannot be renamed after creation.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePet {
    pub breed: Option<String>,
    pub description: Option<String>,
    pub age: Option<i32>,
}

/// Aggregate payload for the pet detail endpoint: the pet itself, its
/// feedings and photos, the toys it has, and the toys still assignable.
#[derive(Debug, Serialize)]
pub struct PetDetail {
    pub pet: Pet,
    pub toys: Vec<Toy>,
    pub available_toys: Vec<Toy>,
    pub feedings: Vec<Feeding>,
    pub photos: Vec<Photo>,
}
