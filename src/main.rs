use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

mod api;
mod config;
mod error;
mod models;
mod services;
mod store;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::Config::from_env()?;
    let shared_state = Arc::new(models::AppState::new(&config));

    // build our application with a route
    let app = Router::new()
        .route("/analyze", post(api::analyze_handler))
        .route("/report", get(api::last_report_handler))
        .fallback_service(ServeDir::new(&config.public_dir))
        .with_state(shared_state);

    println!("🚀 Server running on http://0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
