//! Handler for the catalog listing.

use axum::extract::{Query, State};
use axum::Json;
use carkat_core::search::SortKey;
use carkat_db::models::car::Car;
use carkat_db::repositories::CarRepo;

use crate::error::AppResult;
use crate::query::CatalogParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/catalog?q=&sort=
///
/// Filtered and sorted car listing. An empty or whitespace-only `q` applies
/// no filter; an unrecognized `sort` falls back to newest-first.
pub async fn catalog(
    State(state): State<AppState>,
    Query(params): Query<CatalogParams>,
) -> AppResult<Json<DataResponse<Vec<Car>>>> {
    let sort = SortKey::parse(params.sort.as_deref());
    let query_text = params.q.as_deref().unwrap_or("");

    let cars = CarRepo::catalog(&state.pool, query_text, sort).await?;

    tracing::debug!(query = query_text, ?sort, results = cars.len(), "Catalog listed");
    Ok(Json(DataResponse { data: cars }))
}
