//! HTTP surface
//!
//! `POST /api/search` runs one request through the pipeline and maps the
//! outcome onto the response contract. `GET /health` is a liveness probe.

use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{Method, StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::browser_session::SessionLauncher;
use crate::error::ScoutError;
use crate::pipeline::{ArticlePipeline, SearchRequest, SearchResponse};
use crate::summarizer::Summarize;

/// Request body for `POST /api/search`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchBody {
    #[serde(default)]
    pub search_prompt: Option<String>,
}

/// Build the router for a shared pipeline
pub fn router<L, S>(pipeline: Arc<ArticlePipeline<L, S>>) -> Router
where
    L: SessionLauncher + 'static,
    S: Summarize + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/api/search", post(search::<L, S>))
        .route("/health", get(liveness))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(pipeline)
}

/// POST /api/search
///
/// The body is decoded by hand so a malformed payload maps onto the
/// `search failed` shape instead of axum's plain-text rejection.
async fn search<L, S>(
    State(pipeline): State<Arc<ArticlePipeline<L, S>>>,
    body: Bytes,
) -> impl IntoResponse
where
    L: SessionLauncher + 'static,
    S: Summarize + 'static,
{
    let parsed: SearchBody = match serde_json::from_slice(&body) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!("Rejected malformed search body: {}", e);
            return respond(SearchResponse::from_error(&ScoutError::InvalidRequest(
                e.to_string(),
            )));
        }
    };

    let request = match SearchRequest::new(parsed.search_prompt.as_deref()) {
        Ok(request) => request,
        Err(e) => return respond(SearchResponse::from_error(&e)),
    };

    info!("Article search for '{}'", request.query());
    let outcome = pipeline.run(&request).await;
    let status = outcome.status_code();
    respond((status, SearchResponse::from(outcome)))
}

fn respond((status, body): (StatusCode, SearchResponse)) -> axum::response::Response {
    (status, Json(body)).into_response()
}

/// GET /health
async fn liveness() -> &'static str {
    "OK"
}
