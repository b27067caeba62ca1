pub mod recommender_service;
pub mod types;
