pub mod handlers;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;

use crate::{
    pkg::{conf::settings, state::AppState},
    prelude::Result,
};
use handlers::{
    probes::{healthz, livez},
    sample::sample_function,
};

pub fn build_routes(state: AppState) -> Router {
    Router::new()
        .route("/livez/", get(livez))
        .route("/healthz/", get(healthz))
        .route("/samplefunction", post(sample_function))
        .with_state(state)
}

pub async fn listen() -> Result<()> {
    let app = build_routes(AppState::new());
    let addr = format!("0.0.0.0:{}", settings.http_port);
    tracing::info!("listening on {}", &addr);
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
