//! Index, scan, process and image detail endpoints.

use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::library::{ImageDetails, LibraryError};
use crate::model::ImageInfo;
use crate::process::RandomTags;
use crate::server::error::{ApiError, ApiResult};
use crate::server::state::AppState;

/// Image route group.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/scan", post(scan))
        .route("/process", post(process))
        .route("/image/{*path}", get(image_details))
}

/// Index view payload.
#[derive(Debug, Serialize, Deserialize)]
pub struct IndexView {
    pub images: Vec<ImageInfo>,
}

/// `POST /scan` body.
#[derive(Debug, Default, Deserialize)]
pub struct ScanRequest {
    /// Directory to scan; blank or absent falls back to the configured
    /// default, then the working directory.
    pub path: Option<String>,
}

/// `POST /scan` success payload.
#[derive(Debug, Serialize, Deserialize)]
pub struct ScanResponse {
    pub success: bool,
    pub count: usize,
}

/// Bare acknowledgment payload.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub const OK: Self = Self { success: true };
}

/// `GET /`
pub async fn index(State(state): State<AppState>) -> Json<IndexView> {
    let library = state.library.read().await;
    Json(IndexView {
        images: library.image_infos(),
    })
}

/// `POST /scan`
///
/// The directory walk runs on a blocking thread; the image store is only
/// locked to swap in the result.
pub async fn scan(
    State(state): State<AppState>,
    request: Option<Json<ScanRequest>>,
) -> ApiResult<Json<ScanResponse>> {
    let request = request.map(|Json(r)| r).unwrap_or_default();
    let root: Option<PathBuf> = request
        .path
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| state.config.default_scan_dir.clone());

    let scanner = state.config.scanner();
    let records = tokio::task::spawn_blocking(move || scanner.scan(root.as_deref()))
        .await
        .map_err(|e| ApiError::Internal(format!("scan task failed: {e}")))??;

    let count = state.library.write().await.replace_images(records);
    Ok(Json(ScanResponse {
        success: true,
        count,
    }))
}

/// `POST /process`
///
/// Tagging refreshes file metadata for every record, so the whole pass runs on
/// a blocking thread holding the write lock.
pub async fn process(State(state): State<AppState>) -> ApiResult<Json<SuccessResponse>> {
    let reset = state.config.process.reset_collections;
    let library = Arc::clone(&state.library);
    tokio::task::spawn_blocking(move || {
        let mut picker = RandomTags::from_entropy();
        library.blocking_write().process(&mut picker, reset);
    })
    .await
    .map_err(|e| ApiError::Internal(format!("process task failed: {e}")))?;
    Ok(Json(SuccessResponse::OK))
}

/// `GET /image/{path}/details`
///
/// The captured path may be a bare filename or an absolute path; only its
/// base name is used for the lookup.
pub async fn image_details(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> ApiResult<Json<ImageDetails>> {
    let filename = path
        .strip_suffix("/details")
        .ok_or_else(|| LibraryError::NotFound(format!("/image/{path}")))?;

    let library = state.library.read().await;
    Ok(Json(library.image_details(filename)?))
}
