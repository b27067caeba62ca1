use std::time::Duration;

use urlencoding::encode;

use super::types::{
    recommendation_response::RecommendationResponse,
    recommender_service_error::RecommenderServiceError,
};

// A stalled engine must not hold a form submission open indefinitely.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct RecommenderServiceConfig {
    pub host: String,
}

/// Client for the external hospital-recommendation engine. The engine does the
/// actual work (summarization, nearest-hospital search, travel-time
/// estimation); this service only marshals the request and reshapes the
/// response for rendering.
#[derive(Clone)]
pub struct RecommenderService {
    config: RecommenderServiceConfig,
    client: reqwest::Client,
}

pub struct RecommendationInput {
    pub text: String,
    pub user_lat: f64,
    pub user_lon: f64,
    pub top_n: u32,
}

pub struct RecommendedHospital {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub distance_km: String,
    pub duration: String,
    pub arrival_time: String,
}

pub struct RecommendationOutput {
    pub summary: String,
    pub keywords: String,
    pub hospitals: Vec<RecommendedHospital>,
}

impl RecommenderService {
    pub fn new(config: RecommenderServiceConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// `top_n` is a request, not a bound: the engine may return fewer or more
    /// hospitals, and the returned order is the display order.
    pub async fn recommend(
        &self,
        input: RecommendationInput,
    ) -> Result<RecommendationOutput, RecommenderServiceError> {
        let url = format!(
            "{}/recommend?text={}&user_lat={}&user_lon={}&top_n={}",
            self.config.host,
            encode(&input.text),
            input.user_lat,
            input.user_lon,
            input.top_n
        );

        let resp = self
            .client
            .get(&url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| {
                RecommenderServiceError::Internal(format!("Failed to send request: {}", e))
            })?;

        if !resp.status().is_success() {
            return Err(RecommenderServiceError::UpstreamStatus(
                resp.status().as_u16(),
            ));
        }

        let body = resp.json::<RecommendationResponse>().await.map_err(|e| {
            RecommenderServiceError::Internal(format!("Failed to get response body: {}", e))
        })?;

        Ok(RecommendationOutput {
            summary: body.summary.summary,
            keywords: body.summary.keywords.joined(),
            hospitals: body
                .nearest_hospitals
                .into_iter()
                .map(|h| RecommendedHospital {
                    name: h.hospital_name,
                    address: h.address,
                    phone: h.tel1,
                    distance_km: h.distance_km.into_text(),
                    duration: h.duration,
                    arrival_time: h.arrival_time,
                })
                .collect(),
        })
    }
}
