//! Handlers for the pet/toy association.
//!
//! Both operations verify the pet exists (404 otherwise), perform an
//! idempotent write on the junction table, and redirect to the pet's
//! detail page. The toy id is not checked; a dangling one is rejected by
//! the foreign key and classified as 400.

use axum::extract::{Path, State};
use axum::response::Redirect;
use petbook_core::error::CoreError;
use petbook_core::types::DbId;
use petbook_db::repositories::{PetRepo, PetToyRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::redirect_to_pet;
use crate::state::AppState;

/// POST /api/v1/pets/{pet_id}/toys/{toy_id}
///
/// Associates the toy with the pet. A no-op if already associated.
pub async fn associate(
    State(state): State<AppState>,
    Path((pet_id, toy_id)): Path<(DbId, DbId)>,
) -> AppResult<Redirect> {
    ensure_pet_exists(&state, pet_id).await?;
    let inserted = PetToyRepo::associate(&state.pool, pet_id, toy_id).await?;
    tracing::info!(pet_id, toy_id, inserted, "Toy association added");
    Ok(redirect_to_pet(pet_id))
}

/// DELETE /api/v1/pets/{pet_id}/toys/{toy_id}
///
/// Removes the association. A no-op if the pair is absent.
pub async fn unassociate(
    State(state): State<AppState>,
    Path((pet_id, toy_id)): Path<(DbId, DbId)>,
) -> AppResult<Redirect> {
    ensure_pet_exists(&state, pet_id).await?;
    let removed = PetToyRepo::unassociate(&state.pool, pet_id, toy_id).await?;
    tracing::info!(pet_id, toy_id, removed, "Toy association removed");
    Ok(redirect_to_pet(pet_id))
}

async fn ensure_pet_exists(state: &AppState, pet_id: DbId) -> AppResult<()> {
    PetRepo::find_by_id(&state.pool, pet_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Pet",
            id: pet_id,
        }))?;
    Ok(())
}
