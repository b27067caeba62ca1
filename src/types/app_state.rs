use std::path::PathBuf;

use crate::services::recommender::recommender_service::RecommenderService;

#[derive(Clone)]
pub struct AppState {
    pub recommender_service: RecommenderService,
    pub static_dir: PathBuf,
}
