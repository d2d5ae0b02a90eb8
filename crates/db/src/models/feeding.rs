//! Feeding models.
//!
//! Feedings are append-only: they are created through the add-feeding
//! operation and only disappear when their pet is deleted, so there is no
//! update DTO.

use chrono::NaiveDate;
use petbook_core::feeding::Meal;
use petbook_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `feedings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Feeding {
    pub id: DbId,
    pub date: NaiveDate,
    pub meal: String,
    pub pet_id: DbId,
    pub created_at: Timestamp,
}

/// Validated input for creating a feeding. Built by the handler from the
/// form fields after they pass [`petbook_core::feeding::parse_feeding_form`].
#[derive(Debug, Clone)]
pub struct CreateFeeding {
    pub pet_id: DbId,
    pub date: NaiveDate,
    pub meal: Meal,
}
