mod app;
mod routes;
mod services;
mod types;
mod utils;
mod views;

use std::env;
use tracing::info;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    info!("Starting app...");

    let recommender_host = env::var("RECOMMENDER_HOST").unwrap();
    let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());
    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

    let app = app::gen_app(recommender_host.as_str(), static_dir.as_str());

    let listener = tokio::net::TcpListener::bind(&bind_addr).await.unwrap();
    info!("Listening on {}", bind_addr);
    axum::serve(listener, app).await.unwrap();
}
