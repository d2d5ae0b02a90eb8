//! Handlers for the `/toys` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use petbook_core::error::CoreError;
use petbook_core::palette::validate_color;
use petbook_core::types::DbId;
use petbook_db::models::toy::{CreateToy, Toy, ToyDetail, UpdateToy};
use petbook_db::repositories::{PetRepo, ToyRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/toys
///
/// Rejects colors outside the palette with 400.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateToy>,
) -> AppResult<(StatusCode, Json<Toy>)> {
    validate_color(&input.color)?;
    let toy = ToyRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(toy)))
}

/// GET /api/v1/toys
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Toy>>> {
    let toys = ToyRepo::list_all(&state.pool).await?;
    Ok(Json(toys))
}

/// GET /api/v1/toys/{id}
///
/// Returns the toy together with the pets it is associated with.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ToyDetail>> {
    let toy = ToyRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Toy", id }))?;
    let pets = PetRepo::list_by_toy(&state.pool, id).await?;
    Ok(Json(ToyDetail { toy, pets }))
}

/// PUT /api/v1/toys/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateToy>,
) -> AppResult<Json<Toy>> {
    if let Some(color) = &input.color {
        validate_color(color)?;
    }
    let toy = ToyRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Toy", id }))?;
    Ok(Json(toy))
}

/// DELETE /api/v1/toys/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ToyRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Toy", id }))
    }
}
