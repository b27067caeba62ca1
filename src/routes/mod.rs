use axum::{routing::get, Router};

use crate::types::app_state::AppState;

pub mod get_form_page;
mod get_hospital_recommendations;
mod get_static_asset;

pub fn apply_routes(app: Router<AppState>) -> Router<AppState> {
    app.route(
        "/hospital/hospital_by_module",
        get(get_hospital_recommendations::get_hospital_recommendations),
    )
    .route("/static/*path", get(get_static_asset::get_static_asset))
}
