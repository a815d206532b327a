//! HTTP handlers and router for the simplify API.
//!
//! `POST /api/simplify_pdf` stages the upload, extracts its text, runs the
//! summary pipeline, and answers with one summary card. `GET /health` is a
//! liveness probe.

use std::path::Path;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Multipart, State, multipart::MultipartRejection},
    routing::{get, post},
};
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};
use uuid::Uuid;

use super::helpers::{ApiError, internal, service_unavailable, unprocessable};
use super::upload::{StagedUpload, read_file_field};
use crate::core::models::SimplifyResponse;
use crate::errors::SimplifyError;
use crate::pdf::{TextExtractor, join_segments};
use crate::summarize::SummaryGenerator;

/// Shared, immutable per-process state handed to every request.
#[derive(Clone)]
pub struct AppState {
    summarizer: Arc<SummaryGenerator>,
    extractor: Arc<dyn TextExtractor>,
}

impl AppState {
    #[must_use]
    pub fn new(summarizer: Arc<SummaryGenerator>, extractor: Arc<dyn TextExtractor>) -> Self {
        Self {
            summarizer,
            extractor,
        }
    }
}

/// Builds the application router.
pub fn router(state: AppState, max_upload_bytes: usize) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/simplify_pdf", post(simplify_pdf))
        .route("/health", get(health))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(cors)
        .with_state(state)
}

/// # Errors
///
/// Returns 422 for a malformed form, 500 if the PDF text cannot be
/// extracted, 503 if the text-generation service fails, and 413 if the
/// body exceeds the upload limit.
#[tracing::instrument(level = "info", skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn simplify_pdf(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<SimplifyResponse>, ApiError> {
    let mut multipart = multipart.map_err(|e| {
        error!("Rejected upload: {}", e);
        unprocessable(e.body_text())
    })?;

    let bytes = read_file_field(&mut multipart).await?;
    info!(bytes = bytes.len(), "Received PDF upload");

    simplify_document(&state, &bytes).await.map(Json)
}

/// Runs the whole pipeline for one uploaded document.
///
/// # Errors
///
/// See [`simplify_pdf`].
pub async fn simplify_document(
    state: &AppState,
    bytes: &[u8],
) -> Result<SimplifyResponse, ApiError> {
    let staged = StagedUpload::stage(bytes).map_err(|e| {
        error!("Failed to stage upload: {}", e);
        internal("Failed to store uploaded file.")
    })?;

    let text = extract_text(state, staged.path()).await?;

    let result = state.summarizer.summarize(&text).await.map_err(|e| {
        error!("Error generating summary: {}", e);
        if e.is_generation_failure() {
            service_unavailable()
        } else {
            internal("Failed to generate summary.")
        }
    })?;

    info!("Summary generated");
    Ok(SimplifyResponse::single(result))
}

async fn extract_text(state: &AppState, path: &Path) -> Result<String, ApiError> {
    let extractor = Arc::clone(&state.extractor);
    let path = path.to_path_buf();

    let segments = tokio::task::spawn_blocking(move || extractor.extract(&path))
        .await
        .map_err(|e| SimplifyError::ExtractionError(format!("extraction task failed: {e}")))
        .and_then(|res| res)
        .map_err(|e| {
            error!("{}", e);
            internal("Failed to extract text from PDF.")
        })?;

    Ok(join_segments(&segments))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
