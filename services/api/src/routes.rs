use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;
use std::sync::Arc;

use echo_crm::listings::agreements::{
    agreement_router, ActivityLog, ActorProvider, AgreementService, AgreementStore, Directory,
};
use echo_crm::listings::copy::{copy_router, CopyService, TemplateStore};

pub(crate) fn with_crm_routes<T, S, P, D, L>(
    copy: Arc<CopyService<T>>,
    agreements: Arc<AgreementService<S, P, D, L>>,
) -> axum::Router
where
    T: TemplateStore + 'static,
    S: AgreementStore + 'static,
    P: ActorProvider + 'static,
    D: Directory + 'static,
    L: ActivityLog + 'static,
{
    copy_router(copy)
        .merge(agreement_router(agreements))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
