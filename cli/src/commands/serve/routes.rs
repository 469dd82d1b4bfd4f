//! # codetidy Upload Routes
//!
//! File: cli/src/commands/serve/routes.rs
//!
//! ## Overview
//!
//! Axum router and handlers of the upload server:
//!
//! | Route                              | Purpose                                  |
//! |------------------------------------|------------------------------------------|
//! | `GET /`                            | Upload page                              |
//! | `POST /api/process?name=<file>`    | Process the raw request body             |
//! | `GET /api/result`                  | Latest outcome as JSON                   |
//! | `GET /download/readme`             | Generated `README.md` (archives only)    |
//! | `GET /download/formatted/{index}`  | `formatted_<name>` of the indexed file   |
//!
//! Failures are reported to clients as a 422 with the fixed message
//! `Error processing file`; the underlying cause only goes to the log.
//!
use super::page;
use super::state::{LastOutcome, ProcessedUpload, SharedState};
use crate::common::source::ingest::{self, FileRecord};
use crate::core::error::{CodetidyError, Result, GENERIC_PROCESSING_MESSAGE};
use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, Level};

/// Query string of `POST /api/process`.
#[derive(Debug, Deserialize)]
pub struct UploadQuery {
    /// Original file name of the upload; decides single file vs. archive.
    pub name: String,
}

/// JSON body describing a processed upload.
#[derive(Debug, Serialize)]
struct UploadSummary<'a> {
    token: u64,
    /// `false` when a newer upload finished first and this one was not stored.
    current: bool,
    upload_name: &'a str,
    is_archive: bool,
    files: &'a [FileRecord],
    readme: Option<&'a str>,
}

/// # Create Router (`create_app`)
///
/// Builds the router with tracing, optional permissive CORS and no request
/// body limit.
pub fn create_app(state: SharedState, enable_cors: bool) -> Router {
    let cors_layer = if enable_cors {
        info!("CORS middleware enabled (permissive).");
        CorsLayer::permissive()
    } else {
        info!("CORS middleware disabled.");
        CorsLayer::new()
    };

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::default().include_headers(false))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/", get(index_page))
        .route("/api/process", post(process_upload))
        .route("/api/result", get(latest_result))
        .route("/download/readme", get(download_readme))
        .route("/download/formatted/{index}", get(download_formatted))
        .layer(DefaultBodyLimit::disable())
        .layer(ServiceBuilder::new().layer(trace_layer).layer(cors_layer))
        .with_state(state)
}

async fn index_page() -> Html<&'static str> {
    Html(page::INDEX_HTML)
}

async fn process_upload(
    State(state): State<SharedState>,
    Query(query): Query<UploadQuery>,
    body: Bytes,
) -> Response {
    let token = state.begin_request();
    info!(
        "Request {}: processing '{}' ({} bytes)",
        token,
        query.name,
        body.len()
    );

    match run_pipeline(&state, &query.name, body).await {
        Ok(processed) => {
            let current = state
                .publish(token, LastOutcome::Processed(processed.clone()))
                .await;
            (StatusCode::OK, Json(summary(token, current, &processed))).into_response()
        }
        Err(e) => {
            error!("Request {}: failed to process '{}': {:#}", token, query.name, e);
            state
                .publish(
                    token,
                    LastOutcome::Failed {
                        upload_name: query.name,
                        message: GENERIC_PROCESSING_MESSAGE.to_string(),
                    },
                )
                .await;
            processing_error()
        }
    }
}

/// Ingestion is CPU-bound, so it runs off the async worker threads.
async fn run_pipeline(state: &SharedState, name: &str, body: Bytes) -> Result<ProcessedUpload> {
    let options = state.format_options.clone();
    let name = name.to_string();
    tokio::task::spawn_blocking(move || ProcessedUpload::from_upload(&name, &body, &options))
        .await
        .map_err(|e| anyhow::anyhow!(CodetidyError::Processing(e.to_string())))?
}

async fn latest_result(State(state): State<SharedState>) -> Response {
    let Some(latest) = state.latest().await else {
        return not_found("Nothing has been processed yet");
    };
    match latest.outcome.as_ref() {
        LastOutcome::Processed(processed) => {
            Json(summary(latest.token, true, processed)).into_response()
        }
        LastOutcome::Failed { message, .. } => {
            (StatusCode::UNPROCESSABLE_ENTITY, Json(json!({ "error": message }))).into_response()
        }
    }
}

async fn download_readme(State(state): State<SharedState>) -> Response {
    let latest = state.latest().await;
    let readme = latest
        .as_ref()
        .and_then(|latest| processed(&latest.outcome))
        .and_then(|processed| processed.readme.clone());
    match readme {
        Some(text) => attachment("README.md", "text/markdown; charset=utf-8", text),
        None => not_found("No README available"),
    }
}

async fn download_formatted(
    State(state): State<SharedState>,
    Path(index): Path<usize>,
) -> Response {
    let latest = state.latest().await;
    let record = latest
        .as_ref()
        .and_then(|latest| processed(&latest.outcome))
        .and_then(|processed| processed.files.get(index));
    match record {
        Some(record) => {
            let file_name = ingest::formatted_file_name(&record.name);
            let text = record.formatted.as_ref().unwrap_or(&record.content).clone();
            attachment(&file_name, "text/plain; charset=utf-8", text)
        }
        None => not_found("No formatted file at that index"),
    }
}

/// Borrows the upload out of a stored outcome; only the response body is copied.
fn processed(outcome: &LastOutcome) -> Option<&ProcessedUpload> {
    match outcome {
        LastOutcome::Processed(processed) => Some(processed),
        LastOutcome::Failed { .. } => None,
    }
}

fn summary(token: u64, current: bool, processed: &ProcessedUpload) -> UploadSummary<'_> {
    UploadSummary {
        token,
        current,
        upload_name: &processed.upload_name,
        is_archive: processed.is_archive(),
        files: &processed.files,
        readme: processed.readme.as_deref(),
    }
}

fn processing_error() -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({ "error": GENERIC_PROCESSING_MESSAGE })),
    )
        .into_response()
}

fn not_found(message: &str) -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": message }))).into_response()
}

fn attachment(file_name: &str, content_type: &str, body: String) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (header::CONTENT_DISPOSITION, content_disposition(file_name)),
        ],
        body,
    )
        .into_response()
}

/// `Content-Disposition` value with characters that are unsafe in a quoted
/// header parameter replaced by `_`.
fn content_disposition(file_name: &str) -> String {
    let safe: String = file_name
        .chars()
        .map(|c| {
            if c == ' ' || (c.is_ascii_graphic() && c != '"' && c != '\\') {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("attachment; filename=\"{}\"", safe)
}
