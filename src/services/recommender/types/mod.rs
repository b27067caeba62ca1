pub mod recommendation_response;
pub mod recommender_service_error;
