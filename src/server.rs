//! The portal's small HTTP API: a weather proxy and catalog search.
//!
//! `/api/weather` keeps the upstream key (if any) server-side and lets the
//! browser cache responses for five minutes. `/api/search` serves the
//! catalog fallback for clients without the rich index.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Extension, Query};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::catalog::PageEntry;
use crate::resolver::{fallback_search, SearchResult};
use crate::weather::WeatherClient;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Vec<PageEntry>>,
    pub weather: Arc<WeatherClient>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/weather", get(handle_weather))
        .route("/api/search", get(handle_search))
        .layer(Extension(state))
}

/// Bind and serve until the task is dropped or the listener fails.
pub async fn serve(addr: SocketAddr, state: AppState) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("portal API listening on {}", listener.local_addr()?);
    axum::serve(listener, router(state)).await
}

async fn handle_weather(Extension(state): Extension<AppState>) -> Response {
    match state.weather.fetch_current().await {
        Ok(conditions) => {
            let mut response = Json(conditions).into_response();
            response.headers_mut().insert(
                header::CACHE_CONTROL,
                HeaderValue::from_static("public, max-age=300"),
            );
            response
        }
        Err(err) => {
            error!(error = %err, "weather proxy request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": "Error al obtener datos del clima" })),
            )
                .into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchParams {
    #[serde(default)]
    q: String,
}

#[derive(Debug, Serialize)]
struct SearchResponse {
    query: String,
    results: Vec<SearchResult>,
}

async fn handle_search(
    Extension(state): Extension<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResponse> {
    let results = fallback_search(&state.catalog, &params.q);
    Json(SearchResponse {
        query: params.q,
        results,
    })
}
