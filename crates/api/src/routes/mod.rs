//! Route definitions.
//!
//! `/health` and the two static pages mount at root level; everything else
//! lives under `/api/v1`.

pub mod health;
pub mod pages;
pub mod pet;
pub mod toy;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /pets                            GET list, POST create
/// /pets/{id}                       GET detail, PUT update, DELETE delete
/// /pets/{pet_id}/feedings          POST add feeding (form body)
/// /pets/{pet_id}/toys/{toy_id}     POST associate, DELETE unassociate
/// /pets/{pet_id}/photos            POST upload (multipart body)
/// /toys                            GET list, POST create
/// /toys/{id}                       GET detail, PUT update, DELETE delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(pet::router()).merge(toy::router())
}
