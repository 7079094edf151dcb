//! Outbound-connectivity probe.

use std::time::Duration;

use axum::Json;
use serde::Serialize;

/// Well-known URL used to check that outbound HTTP works at all.
const PROBE_URL: &str = "https://www.google.com";

/// Probe timeout; a slow network counts as offline.
const PROBE_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Serialize)]
pub struct PingResponse {
    status: &'static str,
}

/// GET /api/v1/ping
///
/// Reports whether the server can reach the public internet, which the
/// combined search view needs for its external lookups.
pub async fn ping() -> Json<PingResponse> {
    let online = reqwest::Client::new()
        .get(PROBE_URL)
        .timeout(PROBE_TIMEOUT)
        .send()
        .await
        .map(|response| response.status().is_success())
        .unwrap_or(false);

    Json(PingResponse {
        status: if online { "online" } else { "offline" },
    })
}
