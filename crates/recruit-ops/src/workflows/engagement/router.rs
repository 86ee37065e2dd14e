use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Router,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;

use super::domain::{CandidateId, InterviewId, PlacementDraft};
use super::repository::{CandidateRepository, CandidateScope, RepositoryError};
use super::service::{EngagementService, EngagementServiceError, FeedbackDraft};
use crate::workflows::hierarchy::RecruiterId;

/// Router builder exposing HTTP endpoints for the candidate pipeline.
pub fn engagement_router<R>(service: Arc<EngagementService<R>>) -> Router
where
    R: CandidateRepository + 'static,
{
    Router::new()
        .route("/api/v1/candidates", get(ranked_candidates_handler::<R>))
        .route(
            "/api/v1/interviews/:interview_id/feedback",
            post(submit_feedback_handler::<R>),
        )
        .route(
            "/api/v1/candidates/:candidate_id/placement",
            post(place_candidate_handler::<R>),
        )
        .route(
            "/api/v1/candidates/:candidate_id/placement/milestones",
            post(add_milestone_handler::<R>),
        )
        .route(
            "/api/v1/candidates/:candidate_id/placement/milestones/:index",
            delete(remove_milestone_handler::<R>),
        )
        .route(
            "/api/v1/candidates/:candidate_id/placement/milestones/:index/toggle",
            post(toggle_milestone_handler::<R>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct RankedCandidatesQuery {
    #[serde(default)]
    scope: Option<String>,
    #[serde(default)]
    recruiter_id: Option<String>,
    /// Override for the ranking instant; defaults to the server clock.
    #[serde(default)]
    now: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddMilestoneRequest {
    pub(crate) title: String,
}

fn error_response(err: EngagementServiceError) -> Response {
    let status = match &err {
        EngagementServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        EngagementServiceError::FeedbackAlreadySubmitted { .. } => StatusCode::CONFLICT,
        EngagementServiceError::NotPlaced { .. } => StatusCode::CONFLICT,
        EngagementServiceError::Milestone(_) => StatusCode::NOT_FOUND,
        EngagementServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        EngagementServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        EngagementServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let payload = json!({ "error": err.to_string() });
    (status, axum::Json(payload)).into_response()
}

pub(crate) async fn ranked_candidates_handler<R>(
    State(service): State<Arc<EngagementService<R>>>,
    Query(query): Query<RankedCandidatesQuery>,
) -> Response
where
    R: CandidateRepository + 'static,
{
    let scope = match query.scope.as_deref() {
        None | Some("org") | Some("organization") => CandidateScope::Organization,
        Some("mine") => match query.recruiter_id {
            Some(id) => CandidateScope::Mine(RecruiterId(id)),
            None => {
                let payload = json!({ "error": "scope=mine requires recruiter_id" });
                return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
            }
        },
        Some(other) => {
            let payload = json!({ "error": format!("unknown scope '{other}'") });
            return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
        }
    };

    let now = query.now.unwrap_or_else(Utc::now);
    match service.ranked_candidates(&scope, now) {
        Ok(ranked) => (StatusCode::OK, axum::Json(ranked)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn submit_feedback_handler<R>(
    State(service): State<Arc<EngagementService<R>>>,
    Path(interview_id): Path<String>,
    axum::Json(draft): axum::Json<FeedbackDraft>,
) -> Response
where
    R: CandidateRepository + 'static,
{
    let id = InterviewId(interview_id);
    match service.submit_feedback(&id, draft, Utc::now()) {
        Ok(interview) => (StatusCode::OK, axum::Json(interview)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn place_candidate_handler<R>(
    State(service): State<Arc<EngagementService<R>>>,
    Path(candidate_id): Path<String>,
    axum::Json(draft): axum::Json<PlacementDraft>,
) -> Response
where
    R: CandidateRepository + 'static,
{
    let id = CandidateId(candidate_id);
    match service.place_candidate(&id, draft, Utc::now()) {
        Ok(placement) => (StatusCode::CREATED, axum::Json(placement)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn add_milestone_handler<R>(
    State(service): State<Arc<EngagementService<R>>>,
    Path(candidate_id): Path<String>,
    axum::Json(request): axum::Json<AddMilestoneRequest>,
) -> Response
where
    R: CandidateRepository + 'static,
{
    let id = CandidateId(candidate_id);
    match service.add_milestone(&id, request.title) {
        Ok(placement) => (StatusCode::OK, axum::Json(placement)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn remove_milestone_handler<R>(
    State(service): State<Arc<EngagementService<R>>>,
    Path((candidate_id, index)): Path<(String, usize)>,
) -> Response
where
    R: CandidateRepository + 'static,
{
    let id = CandidateId(candidate_id);
    match service.remove_milestone(&id, index) {
        Ok(placement) => (StatusCode::OK, axum::Json(placement)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn toggle_milestone_handler<R>(
    State(service): State<Arc<EngagementService<R>>>,
    Path((candidate_id, index)): Path<(String, usize)>,
) -> Response
where
    R: CandidateRepository + 'static,
{
    let id = CandidateId(candidate_id);
    match service.toggle_milestone(&id, index) {
        Ok(placement) => (StatusCode::OK, axum::Json(placement)).into_response(),
        Err(err) => error_response(err),
    }
}
