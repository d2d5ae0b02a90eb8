//! Route definitions for toys.

use axum::routing::get;
use axum::Router;

use crate::handlers::toy;
use crate::state::AppState;

/// Routes mounted under `/api/v1` for the toy resource.
///
/// ```text
/// GET    /toys          -> list
/// POST   /toys          -> create
/// GET    /toys/{id}     -> get_by_id
/// PUT    /toys/{id}     -> update
/// DELETE /toys/{id}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/toys", get(toy::list).post(toy::create))
        .route(
            "/toys/{id}",
            get(toy::get_by_id).put(toy::update).delete(toy::delete),
        )
}
