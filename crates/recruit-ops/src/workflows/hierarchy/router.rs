use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{RecruiterDraft, RecruiterId};
use super::repository::HierarchyRepository;
use super::service::{HierarchyService, HierarchyServiceError, OrgChartFilter};
use crate::workflows::engagement::RepositoryError;

/// Router builder exposing HTTP endpoints for the recruiter organization.
pub fn hierarchy_router<R>(service: Arc<HierarchyService<R>>) -> Router
where
    R: HierarchyRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/recruiters",
            get(org_chart_handler::<R>).post(create_recruiter_handler::<R>),
        )
        .route(
            "/api/v1/recruiters/:recruiter_id/deactivate",
            post(deactivate_recruiter_handler::<R>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct OrgChartQuery {
    #[serde(default)]
    department: Option<String>,
    #[serde(default)]
    active: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreateRecruiterRequest {
    pub(crate) actor_id: String,
    #[serde(flatten)]
    pub(crate) draft: RecruiterDraft,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DeactivateRequest {
    pub(crate) actor_id: String,
}

fn error_response(err: HierarchyServiceError) -> Response {
    let status = match &err {
        HierarchyServiceError::Permission(_) => StatusCode::FORBIDDEN,
        HierarchyServiceError::Integrity(_) => StatusCode::CONFLICT,
        HierarchyServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        HierarchyServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        HierarchyServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let payload = json!({ "error": err.to_string() });
    (status, axum::Json(payload)).into_response()
}

pub(crate) async fn org_chart_handler<R>(
    State(service): State<Arc<HierarchyService<R>>>,
    Query(query): Query<OrgChartQuery>,
) -> Response
where
    R: HierarchyRepository + 'static,
{
    let filter = OrgChartFilter {
        department: query.department,
        active_only: query.active,
    };

    match service.org_chart(&filter) {
        Ok(forest) => (StatusCode::OK, axum::Json(forest)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn create_recruiter_handler<R>(
    State(service): State<Arc<HierarchyService<R>>>,
    axum::Json(request): axum::Json<CreateRecruiterRequest>,
) -> Response
where
    R: HierarchyRepository + 'static,
{
    let actor = RecruiterId(request.actor_id);
    match service.create_recruiter(&actor, request.draft) {
        Ok(profile) => (StatusCode::CREATED, axum::Json(profile)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn deactivate_recruiter_handler<R>(
    State(service): State<Arc<HierarchyService<R>>>,
    Path(recruiter_id): Path<String>,
    axum::Json(request): axum::Json<DeactivateRequest>,
) -> Response
where
    R: HierarchyRepository + 'static,
{
    let actor = RecruiterId(request.actor_id);
    let target = RecruiterId(recruiter_id);
    match service.deactivate_recruiter(&actor, &target) {
        Ok(profile) => (StatusCode::OK, axum::Json(profile)).into_response(),
        Err(err) => error_response(err),
    }
}
