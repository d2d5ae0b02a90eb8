//! Request handlers, one module per resource.

pub mod association;
pub mod feeding;
pub mod pet;
pub mod photo;
pub mod toy;

use axum::response::Redirect;
use petbook_core::types::DbId;

/// Redirect (303) to a pet's detail URL. The feeding, association, and
/// photo handlers all land here after a write, successful or not.
pub(crate) fn redirect_to_pet(pet_id: DbId) -> Redirect {
    Redirect::to(&format!("/api/v1/pets/{pet_id}"))
}
