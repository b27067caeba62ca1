pub enum RecommenderServiceError {
    Internal(String),
    UpstreamStatus(u16),
}

impl std::fmt::Display for RecommenderServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            RecommenderServiceError::Internal(e) => write!(f, "Internal error: {}", e),
            RecommenderServiceError::UpstreamStatus(code) => {
                write!(f, "Unexpected upstream status: {}", code)
            }
        }
    }
}
