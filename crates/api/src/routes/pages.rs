//! Static home and about pages, mounted at root level.

use axum::response::Html;
use axum::{routing::get, Router};

use crate::state::AppState;

const HOME_HTML: &str = "<!doctype html>\n<html>\n  <head><title>Petbook</title></head>\n  <body>\n    <h1>Petbook</h1>\n    <p>A catalog of pets, their toys, feedings, and photos.</p>\n  </body>\n</html>\n";

const ABOUT_HTML: &str = "<!doctype html>\n<html>\n  <head><title>About Petbook</title></head>\n  <body>\n    <h1>About</h1>\n    <p>Petbook keeps track of pets and everything they hoard.</p>\n  </body>\n</html>\n";

async fn home() -> Html<&'static str> {
    Html(HOME_HTML)
}

async fn about() -> Html<&'static str> {
    Html(ABOUT_HTML)
}

/// Mount the home and about pages.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/about", get(about))
}
