//! Handlers for the `/pets` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use petbook_core::error::CoreError;
use petbook_core::types::DbId;
use petbook_db::models::pet::{CreatePet, Pet, PetDetail, UpdatePet};
use petbook_db::repositories::{FeedingRepo, PetRepo, PhotoRepo, ToyRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/pets
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePet>,
) -> AppResult<(StatusCode, Json<Pet>)> {
    let pet = PetRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(pet)))
}

/// GET /api/v1/pets
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Pet>>> {
    let pets = PetRepo::list_all(&state.pool).await?;
    Ok(Json(pets))
}

/// GET /api/v1/pets/{id}
///
/// Returns the pet together with its feedings, photos, associated toys,
/// and the toys it does not yet have (offered as assignable).
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<PetDetail>> {
    let pet = PetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Pet", id }))?;

    let toys = ToyRepo::list_for_pet(&state.pool, id).await?;
    let available_toys = ToyRepo::list_available_for_pet(&state.pool, id).await?;
    let feedings = FeedingRepo::list_by_pet(&state.pool, id).await?;
    let photos = PhotoRepo::list_by_pet(&state.pool, id).await?;

    Ok(Json(PetDetail {
        pet,
        toys,
        available_toys,
        feedings,
        photos,
    }))
}

/// PUT /api/v1/pets/{id}
///
/// Only breed, description, and age are editable; a pet keeps its name.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePet>,
) -> AppResult<Json<Pet>> {
    let pet = PetRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Pet", id }))?;
    Ok(Json(pet))
}

/// DELETE /api/v1/pets/{id}
///
/// Feedings, photos, and toy associations cascade with the row.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = PetRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Pet", id }))
    }
}
