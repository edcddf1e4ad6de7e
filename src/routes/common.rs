//! Service status routes: liveness, readiness with the live record count, build version.

use crate::store::{Entity, SharedStore};
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct StatusBody {
    status: &'static str,
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    records: Option<usize>,
}

#[derive(Serialize)]
struct VersionBody {
    name: &'static str,
    version: &'static str,
}

async fn health<E: Entity>() -> Json<StatusBody> {
    Json(StatusBody {
        status: "ok",
        kind: E::KIND,
        records: None,
    })
}

async fn ready<E: Entity>(State(store): State<SharedStore<E>>) -> Json<StatusBody> {
    Json(StatusBody {
        status: "ok",
        kind: E::KIND,
        records: Some(store.len()),
    })
}

async fn version() -> Json<VersionBody> {
    Json(VersionBody {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /health, GET /ready (record count of `store`) and GET /version.
pub fn common_routes_with_ready<E: Entity>(store: SharedStore<E>) -> Router {
    Router::new()
        .route("/health", get(health::<E>))
        .route("/ready", get(ready::<E>))
        .route("/version", get(version))
        .with_state(store)
}
