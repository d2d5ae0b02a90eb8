//! Route definitions for pets and their nested resources.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{association, feeding, pet, photo};
use crate::state::AppState;

/// Routes mounted under `/api/v1` for the pet resource.
///
/// ```text
/// GET    /pets                          -> list
/// POST   /pets                          -> create
/// GET    /pets/{id}                     -> get_by_id
/// PUT    /pets/{id}                     -> update
/// DELETE /pets/{id}                     -> delete
/// POST   /pets/{pet_id}/feedings        -> feeding::create
/// POST   /pets/{pet_id}/toys/{toy_id}   -> association::associate
/// DELETE /pets/{pet_id}/toys/{toy_id}   -> association::unassociate
/// POST   /pets/{pet_id}/photos          -> photo::upload
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/pets", get(pet::list).post(pet::create))
        .route(
            "/pets/{id}",
            get(pet::get_by_id).put(pet::update).delete(pet::delete),
        )
        .route("/pets/{pet_id}/feedings", post(feeding::create))
        .route(
            "/pets/{pet_id}/toys/{toy_id}",
            post(association::associate).delete(association::unassociate),
        )
        .route("/pets/{pet_id}/photos", post(photo::upload))
}
