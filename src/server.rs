//! Router assembly and serving: request tracing, body limit, 404 fallback.

use crate::config::{ServerConfig, DEFAULT_LOG_FILTER};
use crate::routes::{
    common_routes_with_ready, docs_routes, movie_routes, student_routes, MovieApiDoc, StudentApiDoc,
};
use crate::state::{MovieState, StudentState};
use axum::{http::StatusCode, Router};
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Oops! Not found")
}

/// Wrap `api` with the fallback and the layers shared by both services.
pub fn app(api: Router, config: &ServerConfig) -> Router {
    api.fallback(not_found)
        .layer(RequestBodyLimitLayer::new(config.body_limit_bytes))
        .layer(TraceLayer::new_for_http())
}

pub fn students_app(state: StudentState, config: &ServerConfig) -> Router {
    let api = student_routes(state.clone())
        .merge(common_routes_with_ready(state.students))
        .merge(docs_routes::<StudentApiDoc>());
    app(api, config)
}

pub fn movies_app(state: MovieState, config: &ServerConfig) -> Router {
    let api = movie_routes(state.clone())
        .merge(common_routes_with_ready(state.movies))
        .merge(docs_routes::<MovieApiDoc>());
    app(api, config)
}

/// Install the global `fmt` subscriber. An unparseable filter falls back to the default.
pub fn init_tracing(config: &ServerConfig) {
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

pub async fn serve(app: Router, config: &ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
