//! Collection endpoints.

use axum::extract::{Path, State};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use super::images::SuccessResponse;
use crate::library::{CollectionSummary, CollectionView, LibraryError};
use crate::server::error::ApiResult;
use crate::server::state::AppState;

/// Names taken by static routes under `/collections/`; a collection with one
/// of these names could not be viewed or deleted.
pub const RESERVED_NAMES: &[&str] = &["create"];

/// Collection route group.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/collections", get(list_collections))
        .route("/collections/create", post(create_collection))
        .route(
            "/collections/{name}",
            get(view_collection).delete(delete_collection),
        )
        .route("/collections/{name}/images", post(add_image))
        .route("/collections/{name}/images/{filename}", delete(remove_image))
}

/// `GET /collections` payload.
#[derive(Debug, Serialize, Deserialize)]
pub struct CollectionList {
    pub collections: Vec<CollectionSummary>,
}

/// `POST /collections/create` body.
#[derive(Debug, Deserialize)]
pub struct CreateCollectionRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// `POST /collections/{name}/images` body.
#[derive(Debug, Deserialize)]
pub struct AddImageRequest {
    pub filename: String,
}

/// `GET /collections`
pub async fn list_collections(State(state): State<AppState>) -> Json<CollectionList> {
    let library = state.library.read().await;
    Json(CollectionList {
        collections: library.collection_summaries(),
    })
}

/// `POST /collections/create`
pub async fn create_collection(
    State(state): State<AppState>,
    Json(request): Json<CreateCollectionRequest>,
) -> ApiResult<Json<SuccessResponse>> {
    if let Some(name) = request
        .name
        .as_deref()
        .map(str::trim)
        .filter(|name| RESERVED_NAMES.contains(name))
    {
        return Err(LibraryError::ReservedName(name.to_string()).into());
    }

    state
        .library
        .write()
        .await
        .create_collection(request.name.as_deref(), request.description.as_deref())?;
    Ok(Json(SuccessResponse::OK))
}

/// `GET /collections/{name}`
pub async fn view_collection(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<CollectionView>> {
    let library = state.library.read().await;
    Ok(Json(library.collection_view(&name)?))
}

/// `DELETE /collections/{name}`
pub async fn delete_collection(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<SuccessResponse>> {
    state.library.write().await.remove_collection(&name)?;
    Ok(Json(SuccessResponse::OK))
}

/// `POST /collections/{name}/images`
pub async fn add_image(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(request): Json<AddImageRequest>,
) -> ApiResult<Json<SuccessResponse>> {
    state
        .library
        .write()
        .await
        .add_to_collection(&name, &request.filename)?;
    Ok(Json(SuccessResponse::OK))
}

/// `DELETE /collections/{name}/images/{filename}`
pub async fn remove_image(
    State(state): State<AppState>,
    Path((name, filename)): Path<(String, String)>,
) -> ApiResult<Json<SuccessResponse>> {
    state
        .library
        .write()
        .await
        .remove_from_collection(&name, &filename)?;
    Ok(Json(SuccessResponse::OK))
}
