pub mod cars;
pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /ping                       outbound-connectivity probe
///
/// /cars                       create (multipart)
/// /cars/{id}                  get, full-replace update (multipart), delete
///
/// /catalog?q=&sort=           filtered + sorted listing
/// /search?q=                  catalog matches + external web/image/video results
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/ping", get(handlers::ping::ping))
        .route("/catalog", get(handlers::catalog::catalog))
        .route("/search", get(handlers::search::combined_search))
        .nest("/cars", cars::router())
}
