//! Handler for the combined search view.
//!
//! Runs the catalog query and the three external lookups for one query
//! string. External results are merged for display only and never
//! persisted; a degraded category simply comes back empty.

use axum::extract::{Query, State};
use axum::Json;
use carkat_core::search::{search_tokens, SortKey};
use carkat_db::models::car::Car;
use carkat_db::repositories::CarRepo;
use carkat_websearch::SearchHit;
use serde::Serialize;

use crate::error::AppResult;
use crate::query::SearchParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Result-count caps per external category.
const WEB_RESULTS_CAP: u8 = 5;
const IMAGE_RESULTS_CAP: u8 = 3;
const VIDEO_RESULTS_CAP: u8 = 2;

/// Combined search payload: local catalog matches plus external results.
#[derive(Debug, Serialize)]
pub struct CombinedSearchResponse {
    pub cars: Vec<Car>,
    pub web: Vec<SearchHit>,
    pub images: Vec<SearchHit>,
    pub videos: Vec<SearchHit>,
}

impl CombinedSearchResponse {
    fn empty() -> Self {
        Self {
            cars: Vec::new(),
            web: Vec::new(),
            images: Vec::new(),
            videos: Vec::new(),
        }
    }
}

/// GET /api/v1/search?q=
///
/// An empty or whitespace-only query returns empty sets in every category
/// and performs no external calls.
pub async fn combined_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<DataResponse<CombinedSearchResponse>>> {
    let query_text = params.q.as_deref().unwrap_or("").trim();
    if search_tokens(query_text).is_none() {
        return Ok(Json(DataResponse {
            data: CombinedSearchResponse::empty(),
        }));
    }

    let cars = CarRepo::catalog(&state.pool, query_text, SortKey::Date).await?;

    // The three lookups are independent; run them concurrently. Each one
    // degrades to an empty list on its own failure.
    let (web, images, videos) = tokio::join!(
        state.websearch.search_web(query_text, WEB_RESULTS_CAP),
        state.websearch.search_images(query_text, IMAGE_RESULTS_CAP),
        state.websearch.search_videos(query_text, VIDEO_RESULTS_CAP),
    );

    tracing::debug!(
        query = query_text,
        db_results = cars.len(),
        web = web.len(),
        images = images.len(),
        videos = videos.len(),
        "Combined search executed",
    );

    Ok(Json(DataResponse {
        data: CombinedSearchResponse {
            cars,
            web,
            images,
            videos,
        },
    }))
}
