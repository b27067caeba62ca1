use axum::response::Html;

use crate::views::form_page::FORM_PAGE_HTML;

/// Root page: the static submission form. Same bytes on every request.
pub async fn get_form_page() -> Html<&'static str> {
    Html(FORM_PAGE_HTML)
}
