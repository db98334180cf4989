//! Read-only file serving for image previews.

use std::path::{Path as FsPath, PathBuf};

use axum::Router;
use axum::body::Body;
use axum::extract::{Path, Request, State};
use axum::response::Response;
use axum::routing::get;
use tower::ServiceExt;
use tower_http::services::ServeFile;

use crate::library::LibraryError;
use crate::server::error::ApiResult;
use crate::server::state::AppState;

/// File route group.
pub fn routes() -> Router<AppState> {
    Router::new().route("/user_files/{*path}", get(serve_user_file))
}

/// Map a requested relative path onto `root`
///
/// Any `..` sequence is rejected outright.
///
/// # Errors
///
/// Returns `LibraryError::InvalidPath` for traversal attempts.
pub fn resolve_user_file(root: &FsPath, requested: &str) -> Result<PathBuf, LibraryError> {
    if requested.contains("..") {
        tracing::warn!(requested, "rejected user file path");
        return Err(LibraryError::InvalidPath(requested.to_string()));
    }
    Ok(root.join(requested.trim_start_matches('/')))
}

/// `GET /user_files/{path}`
pub async fn serve_user_file(
    State(state): State<AppState>,
    Path(path): Path<String>,
    request: Request,
) -> ApiResult<Response> {
    let full_path = resolve_user_file(&state.config.user_files_root, &path)?;
    tracing::debug!(path = %full_path.display(), "serving user file");

    let response = match ServeFile::new(full_path).oneshot(request).await {
        Ok(response) => response,
        Err(never) => match never {},
    };
    Ok(response.map(Body::new))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_relative_and_absolute_requests() {
        let root = FsPath::new("/srv/files");
        assert_eq!(
            resolve_user_file(root, "shots/a.png").unwrap(),
            PathBuf::from("/srv/files/shots/a.png")
        );
        assert_eq!(
            resolve_user_file(root, "/shots/a.png").unwrap(),
            PathBuf::from("/srv/files/shots/a.png")
        );
    }

    #[test]
    fn rejects_traversal() {
        let root = FsPath::new("/srv/files");
        for bad in ["../etc/passwd", "shots/../../etc", "a/..", ".."] {
            assert!(matches!(
                resolve_user_file(root, bad),
                Err(LibraryError::InvalidPath(_))
            ));
        }
    }
}
