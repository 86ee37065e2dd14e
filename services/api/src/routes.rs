use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;
use std::sync::Arc;

use recruit_ops::workflows::engagement::{
    engagement_router, CandidateRepository, EngagementService,
};
use recruit_ops::workflows::hierarchy::{hierarchy_router, HierarchyRepository, HierarchyService};

/// Compose the workflow routers with the operational endpoints.
pub(crate) fn app_router<C, H>(
    engagement: Arc<EngagementService<C>>,
    hierarchy: Arc<HierarchyService<H>>,
) -> axum::Router
where
    C: CandidateRepository + 'static,
    H: HierarchyRepository + 'static,
{
    engagement_router(engagement)
        .merge(hierarchy_router(hierarchy))
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
