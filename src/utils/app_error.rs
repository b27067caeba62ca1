use axum::{
    body::Body,
    http::{Response, StatusCode},
    response::{Html, IntoResponse},
};

use crate::views::results_page::render_error_page;

#[derive(Debug)]
pub struct AppError {
    pub code: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(code: StatusCode, message: &str) -> Self {
        AppError {
            code,
            message: message.to_string(),
        }
    }
}

// This service talks to browsers, so errors render as small HTML pages
// rather than JSON bodies.
impl IntoResponse for AppError {
    fn into_response(self) -> Response<Body> {
        (self.code, Html(render_error_page(self.code, &self.message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn renders_as_html_with_status() {
        let error = AppError::new(StatusCode::BAD_REQUEST, "Invalid query: latitude");
        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let content_type = response.headers().get("content-type").unwrap();
        assert!(content_type.to_str().unwrap().starts_with("text/html"));
    }
}
