use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use preonboarding_planner::api::preonboarding::{
    AppState, deload_handler, frequency_handler, injuries_handler, nutrition_handler,
    preview_handler, progression_handler, swap_handler,
};
use preonboarding_planner::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    let state = AppState {
        config: config.clone(),
    };

    let app = Router::new()
        .route("/", get(|| async { "preonboarding planner" }))
        .route("/preonboarding/preview", post(preview_handler))
        .route("/preonboarding/patch/frequency", post(frequency_handler))
        .route("/preonboarding/patch/swap", post(swap_handler))
        .route("/preonboarding/patch/progression", post(progression_handler))
        .route("/preonboarding/patch/deload", post(deload_handler))
        .route("/preonboarding/patch/injuries", post(injuries_handler))
        .route("/preonboarding/nutrition", post(nutrition_handler))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    tracing::info!(port = %config.port, "server.listening");
    axum::serve(listener, app).await?;
    Ok(())
}
