pub mod app_error;
pub mod mime;
pub mod validated_query;
