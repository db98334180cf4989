//! HTTP layer
//!
//! Exposes the library operations as a JSON API with axum. Handlers share an
//! [`AppState`] holding the library behind a read-write lock.

pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult, ErrorResponse};
pub use state::AppState;

use axum::Router;
use axum::extract::OriginalUri;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::StudioConfig;
use crate::library::LibraryError;

/// Creates the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(routes::images::routes())
        .merge(routes::collections::routes())
        .merge(routes::files::routes())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found(uri: OriginalUri) -> ApiError {
    LibraryError::NotFound(uri.0.path().to_string()).into()
}

/// Bind to the configured address and serve until the process is stopped.
///
/// # Errors
///
/// Returns an I/O error if the listener cannot be bound or the server fails.
pub async fn serve(config: StudioConfig) -> std::io::Result<()> {
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, "shots-studio listening");

    axum::serve(listener, router(AppState::new(config))).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::routes::collections::CollectionList;
    use crate::server::routes::images::{IndexView, ScanResponse};
    use crate::testing::ShotTree;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use serde::de::DeserializeOwned;
    use tower::ServiceExt;

    fn app() -> Router {
        router(AppState::new(StudioConfig::default()))
    }

    fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("request")
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).expect("request")
    }

    async fn json<T: DeserializeOwned>(response: Response) -> T {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        serde_json::from_slice(&bytes).expect("json")
    }

    #[tokio::test]
    async fn scan_reports_count() {
        let tree = ShotTree::with_files(&["a.png", "b.txt", "c/d.jpg"]);
        let response = app()
            .oneshot(post_json("/scan", &serde_json::json!({ "path": tree.path() })))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let body: ScanResponse = json(response).await;
        assert!(body.success);
        assert_eq!(body.count, 2);
    }

    #[tokio::test]
    async fn scan_missing_directory_is_400() {
        let tree = ShotTree::new();
        let missing = tree.path().join("missing");
        let response = app()
            .oneshot(post_json("/scan", &serde_json::json!({ "path": missing })))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = json(response).await;
        assert!(!body.success);
        assert!(body.error.contains("does not exist"));
    }

    #[tokio::test]
    async fn scan_without_path_uses_configured_default() {
        let tree = ShotTree::with_files(&["a.png", "b.png"]);
        let config = StudioConfig {
            default_scan_dir: Some(tree.path().to_path_buf()),
            ..StudioConfig::default()
        };
        let app = router(AppState::new(config));

        for body in [serde_json::json!({}), serde_json::json!({ "path": "  " })] {
            let response = app
                .clone()
                .oneshot(post_json("/scan", &body))
                .await
                .expect("response");

            let body: ScanResponse = json(response).await;
            assert_eq!(body.count, 2);
        }
    }

    #[tokio::test]
    async fn process_then_list_collections() {
        let tree = ShotTree::with_files(&["a.png"]);
        let state = AppState::new(StudioConfig::default());
        let app = router(state.clone());

        app.clone()
            .oneshot(post_json("/scan", &serde_json::json!({ "path": tree.path() })))
            .await
            .expect("response");
        let response = app
            .clone()
            .oneshot(Request::post("/process").body(Body::empty()).expect("request"))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.oneshot(get("/collections")).await.expect("response");
        let body: CollectionList = json(response).await;
        let image_path = tree.path().join("a.png");
        assert!((2..=4).contains(&body.collections.len()));
        for summary in &body.collections {
            assert_eq!(summary.count, 1);
            assert_eq!(summary.preview.as_deref(), image_path.to_str());
        }

        let library = state.library.read().await;
        assert!(library.images().iter().all(|r| r.is_processed()));
    }

    #[tokio::test]
    async fn create_collection_validation() {
        let state = AppState::new(StudioConfig::default());
        let app = router(state);

        let response = app
            .clone()
            .oneshot(post_json("/collections/create", &serde_json::json!({ "name": "x" })))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .clone()
            .oneshot(post_json("/collections/create", &serde_json::json!({ "name": "x" })))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = json(response).await;
        assert_eq!(body.error, "Collection already exists: x");

        let response = app
            .oneshot(post_json("/collections/create", &serde_json::json!({ "description": "d" })))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = json(response).await;
        assert_eq!(body.error, "Name is required");
    }

    #[tokio::test]
    async fn create_rejects_route_segment_names() {
        let state = AppState::new(StudioConfig::default());
        let app = router(state.clone());

        let response = app
            .oneshot(post_json("/collections/create", &serde_json::json!({ "name": " create " })))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = json(response).await;
        assert_eq!(body.error, "Collection name is reserved: create");
        assert_eq!(state.library.read().await.collections().len(), 0);
    }

    #[tokio::test]
    async fn image_details_and_misses() {
        let tree = ShotTree::with_files(&["shot.png"]);
        let app = app();
        app.clone()
            .oneshot(post_json("/scan", &serde_json::json!({ "path": tree.path() })))
            .await
            .expect("response");

        let uri = format!("/image{}/details", tree.path().join("shot.png").display());
        let response = app.clone().oneshot(get(&uri)).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let details: crate::library::ImageDetails = json(response).await;
        assert_eq!(details.filename, "shot.png");
        assert!(details.tags.is_empty());
        assert!(details.collections.is_empty());

        let response = app
            .clone()
            .oneshot(get("/image/missing.png/details"))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app.oneshot(get("/image/shot.png")).await.expect("response");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn index_lists_images() {
        let tree = ShotTree::with_files(&["a.png", "b.bmp"]);
        let app = app();
        app.clone()
            .oneshot(post_json("/scan", &serde_json::json!({ "path": tree.path() })))
            .await
            .expect("response");

        let response = app.oneshot(get("/")).await.expect("response");
        let body: IndexView = json(response).await;
        assert_eq!(body.images.len(), 2);
        assert!(body.images.iter().all(|i| !i.processed));
    }

    #[tokio::test]
    async fn user_files_serves_and_guards() {
        let tree = ShotTree::new();
        tree.add_file("a.png", b"PNGDATA");
        let config = StudioConfig {
            user_files_root: tree.path().to_path_buf(),
            ..StudioConfig::default()
        };
        let app = router(AppState::new(config));

        let response = app
            .clone()
            .oneshot(get("/user_files/a.png"))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        assert_eq!(&bytes[..], b"PNGDATA");

        let response = app
            .oneshot(get("/user_files/x/..%2F..%2Fetc/passwd"))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn scanned_paths_are_servable_from_user_files() {
        let tree = ShotTree::new();
        tree.add_file("shots/a.png", b"PNGDATA");
        let spelled = tree.path().join("shots").join("..").join("shots");
        let app = app();

        let response = app
            .clone()
            .oneshot(post_json("/scan", &serde_json::json!({ "path": spelled })))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.clone().oneshot(get("/")).await.expect("response");
        let body: IndexView = json(response).await;
        let path = &body.images[0].path;
        assert!(!path.contains(".."));

        let response = app
            .oneshot(get(&format!("/user_files{path}")))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let response = app().oneshot(get("/nope")).await.expect("response");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
