pub mod form_page;
pub mod results_page;
