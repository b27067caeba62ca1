use std::path::PathBuf;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

use crate::{
    routes::{apply_routes, get_form_page::get_form_page},
    services::recommender::recommender_service::{RecommenderService, RecommenderServiceConfig},
    types::app_state::AppState,
};

pub fn gen_app(recommender_host: &str, static_dir: &str) -> Router {
    let cors_middleware = CorsLayer::new();
    let state = AppState {
        recommender_service: RecommenderService::new(RecommenderServiceConfig {
            host: recommender_host.to_string(),
        }),
        static_dir: PathBuf::from(static_dir),
    };

    apply_routes(Router::new())
        .route("/", get(get_form_page))
        .layer(cors_middleware)
        .with_state(state)
}

#[cfg(test)]
pub struct MockApp {
    pub app: Router,
    pub recommender_server: mockito::ServerGuard,
}

/// App wired to a mockito server standing in for the recommendation engine.
#[cfg(test)]
pub async fn gen_mock_app() -> MockApp {
    let recommender_server = mockito::Server::new_async().await;
    let app = gen_app(recommender_server.url().as_str(), "static");

    MockApp {
        app,
        recommender_server,
    }
}
