//! Photo models.
//!
//! A photo row only records the public URL of the externally stored binary;
//! the bytes themselves live in the object store. Append-only, like
//! feedings.

use petbook_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `photos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Photo {
    pub id: DbId,
    pub url: String,
    pub pet_id: DbId,
    pub created_at: Timestamp,
}
