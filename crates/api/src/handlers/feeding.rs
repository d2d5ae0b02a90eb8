//! Handler for adding a feeding to a pet.
//!
//! Feedings arrive as a browser form POST and redirect back to the pet's
//! detail page. An invalid form is logged and dropped without surfacing an
//! error to the caller; the redirect happens either way. That silent-drop
//! contract is covered by tests.

use axum::extract::{Path, State};
use axum::response::Redirect;
use axum::Form;
use petbook_core::error::CoreError;
use petbook_core::feeding::parse_feeding_form;
use petbook_core::types::DbId;
use petbook_db::models::feeding::CreateFeeding;
use petbook_db::repositories::FeedingRepo;
use serde::Deserialize;

use crate::error::AppResult;
use crate::handlers::redirect_to_pet;
use crate::state::AppState;

/// Raw form fields as submitted by the browser. Kept as optional strings
/// so that malformed or partial input reaches our validation instead of
/// failing extraction.
#[derive(Debug, Deserialize)]
pub struct FeedingForm {
    pub date: Option<String>,
    pub meal: Option<String>,
}

/// POST /api/v1/pets/{pet_id}/feedings
///
/// The pet id itself is not re-validated; a stale id surfaces as a
/// foreign-key-rejected write.
pub async fn create(
    State(state): State<AppState>,
    Path(pet_id): Path<DbId>,
    Form(form): Form<FeedingForm>,
) -> AppResult<Redirect> {
    let parsed = match (&form.date, &form.meal) {
        (Some(date), Some(meal)) => parse_feeding_form(date, meal),
        _ => Err(CoreError::Validation("missing date or meal field".into())),
    };
    match parsed {
        Ok((date, meal)) => {
            let feeding =
                FeedingRepo::create(&state.pool, &CreateFeeding { pet_id, date, meal }).await?;
            tracing::info!(pet_id, feeding_id = feeding.id, meal = %meal, "Feeding added");
        }
        Err(err) => {
            tracing::debug!(pet_id, error = %err, "Discarding invalid feeding form");
        }
    }
    Ok(redirect_to_pet(pet_id))
}
