use axum::{
    body::Body,
    extract::{Path, State},
    http::StatusCode,
    response::{AppendHeaders, IntoResponse, Response},
};
use tokio::fs;
use tracing::warn;

use crate::{
    types::app_state::AppState,
    utils::{app_error::AppError, mime::content_type_for},
};

/// Serves files under the configured asset directory. The resolved path is
/// canonicalized and must stay inside the canonicalized root; anything else
/// is a 404, never a fault.
pub async fn get_static_asset(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Result<Response, AppError> {
    let not_found = AppError::new(StatusCode::NOT_FOUND, "Not Found");

    let root = match fs::canonicalize(&state.static_dir).await {
        Ok(root) => root,
        Err(e) => {
            warn!(
                "Static directory {} is not accessible: {}",
                state.static_dir.display(),
                e
            );
            return Err(not_found);
        }
    };

    let requested = root.join(path.trim_start_matches('/'));
    let resolved = match fs::canonicalize(&requested).await {
        Ok(resolved) => resolved,
        Err(_) => return Err(not_found),
    };

    if !resolved.starts_with(&root) {
        warn!("Blocked static path escaping the asset root: {}", path);
        return Err(not_found);
    }

    match fs::metadata(&resolved).await {
        Ok(meta) if meta.is_file() => {}
        _ => return Err(not_found),
    }

    let file = match fs::File::open(&resolved).await {
        Ok(file) => file,
        Err(_) => return Err(not_found),
    };

    let content_type = content_type_for(resolved.extension().and_then(|e| e.to_str()));
    let stream = tokio_util::io::ReaderStream::new(file);
    let body = Body::from_stream(stream);

    let headers = AppendHeaders([("content-type", content_type)]);

    Ok((headers, body).into_response())
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::app::gen_mock_app;

    #[tokio::test]
    async fn serves_existing_asset_with_content_type() {
        let mock_app = gen_mock_app().await;

        let response = mock_app
            .app
            .oneshot(
                Request::builder()
                    .uri("/static/background.png")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "image/png"
        );

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(!body.is_empty());
    }

    #[tokio::test]
    async fn missing_asset_is_not_found() {
        let mock_app = gen_mock_app().await;

        let response = mock_app
            .app
            .oneshot(
                Request::builder()
                    .uri("/static/no-such-file.png")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn traversal_outside_the_root_is_blocked() {
        let mock_app = gen_mock_app().await;

        let response = mock_app
            .app
            .oneshot(
                Request::builder()
                    .uri("/static/../Cargo.toml")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(!body.contains("[package]"));
    }
}
