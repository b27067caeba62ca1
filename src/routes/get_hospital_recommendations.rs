use crate::{
    services::recommender::recommender_service::RecommendationInput,
    types::app_state::AppState,
    utils::{app_error::AppError, validated_query::ValidatedQuery},
    views::results_page::render_results_page,
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use tracing::error;
use validator::Validate;

#[derive(Validate, Deserialize)]
pub struct GetHospitalRecommendationsPayload {
    #[validate(length(min = 1, message = "Must be at least 1 character"))]
    pub request: String,

    pub latitude: f64,

    pub longitude: f64,

    // Typed as an integer, so fractional counts are rejected at parse time.
    // 0 is forwarded to the engine unchanged.
    pub count: u32,
}

pub async fn get_hospital_recommendations(
    State(state): State<AppState>,
    ValidatedQuery(payload): ValidatedQuery<GetHospitalRecommendationsPayload>,
) -> Result<Response, AppError> {
    let result = state
        .recommender_service
        .recommend(RecommendationInput {
            text: payload.request,
            user_lat: payload.latitude,
            user_lon: payload.longitude,
            top_n: payload.count,
        })
        .await
        .map_err(|e| {
            error!("Failed to fetch hospital recommendations: {}", e);
            AppError::new(
                StatusCode::BAD_GATEWAY,
                "Failed to fetch hospital recommendations",
            )
        })?;

    Ok(Html(render_results_page(&result)).into_response())
}
