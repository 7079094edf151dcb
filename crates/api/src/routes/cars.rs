//! Route definitions for the `/cars` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::car;
use crate::state::AppState;

/// Routes mounted at `/cars`.
///
/// ```text
/// POST   /          create (multipart form)
/// GET    /{id}      get_by_id
/// PUT    /{id}      update (multipart form, full replace)
/// DELETE /{id}      delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(car::create))
        .route(
            "/{id}",
            get(car::get_by_id).put(car::update).delete(car::delete),
        )
}
