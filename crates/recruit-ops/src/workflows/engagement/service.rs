use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::domain::{
    Candidate, CandidateId, FeedbackOutcome, FeedbackRatings, Interview, InterviewFeedback,
    InterviewId, Placement, PlacementDraft, Recommendation,
};
use super::feedback::{summarize, FeedbackSummary};
use super::placement::{
    add_milestone, remove_milestone, toggle_milestone, transition_to_placed, MilestoneOutOfRange,
    PlacementValidationError,
};
use super::priority::{priority_bucket, rank};
use super::repository::{CandidateRepository, CandidateScope, RepositoryError};

/// Feedback as entered by the interviewer. The submission instant is
/// assigned here, never trusted from the client.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackDraft {
    pub outcome: FeedbackOutcome,
    #[serde(default)]
    pub ratings: FeedbackRatings,
    #[serde(default = "FeedbackDraft::unknown_recommendation")]
    pub would_recommend_hiring: Recommendation,
    #[serde(default)]
    pub notes: Option<String>,
}

impl FeedbackDraft {
    fn unknown_recommendation() -> Recommendation {
        Recommendation::Unknown
    }
}

/// Candidate plus the derived fields list consumers need, computed against
/// the single `now` the whole query was ranked with.
#[derive(Debug, Clone, Serialize)]
pub struct RankedCandidate {
    pub priority: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<FeedbackSummary>,
    pub candidate: Candidate,
}

/// Service composing the classifier, aggregator, ranker, and placement
/// guard over a candidate repository.
pub struct EngagementService<R> {
    repository: Arc<R>,
}

impl<R> EngagementService<R>
where
    R: CandidateRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Fetch and rank a scope's candidates. Ranking is recomputed on every
    /// call — an upcoming interview silently becomes awaiting-feedback as
    /// `now` advances, so nothing here may be cached.
    pub fn ranked_candidates(
        &self,
        scope: &CandidateScope,
        now: DateTime<Utc>,
    ) -> Result<Vec<RankedCandidate>, EngagementServiceError> {
        let candidates = self.repository.list(scope)?;
        let ranked = rank(candidates, now);

        Ok(ranked
            .into_iter()
            .map(|candidate| RankedCandidate {
                priority: priority_bucket(&candidate, now),
                feedback: summarize(&candidate),
                candidate,
            })
            .collect())
    }

    pub fn get(&self, id: &CandidateId) -> Result<Candidate, EngagementServiceError> {
        let candidate = self.repository.fetch(id)?.ok_or(RepositoryError::NotFound)?;
        Ok(candidate)
    }

    /// Attach feedback to an interview. Feedback is write-once; a second
    /// submission for the same interview is a conflict, not an overwrite.
    pub fn submit_feedback(
        &self,
        interview_id: &InterviewId,
        draft: FeedbackDraft,
        now: DateTime<Utc>,
    ) -> Result<Interview, EngagementServiceError> {
        let mut candidate = self
            .repository
            .find_by_interview(interview_id)?
            .ok_or(RepositoryError::NotFound)?;

        let interview = candidate
            .interview_mut(interview_id)
            .ok_or(RepositoryError::NotFound)?;

        if interview.feedback_submitted() {
            return Err(EngagementServiceError::FeedbackAlreadySubmitted {
                interview_id: interview_id.clone(),
            });
        }

        interview.feedback = Some(InterviewFeedback {
            outcome: draft.outcome,
            ratings: draft.ratings,
            would_recommend_hiring: draft.would_recommend_hiring,
            submitted_at: now,
            notes: draft.notes,
        });
        let updated = interview.clone();

        info!(
            interview = %interview_id.0,
            candidate = %candidate.id.0,
            outcome = ?updated.feedback.as_ref().map(|f| f.outcome),
            "interview feedback recorded"
        );
        self.repository.upsert(candidate)?;
        Ok(updated)
    }

    /// Run the placement guard and persist the result through the
    /// idempotent upsert, so repeated calls update the one record.
    pub fn place_candidate(
        &self,
        candidate_id: &CandidateId,
        draft: PlacementDraft,
        now: DateTime<Utc>,
    ) -> Result<Placement, EngagementServiceError> {
        let mut candidate = self
            .repository
            .fetch(candidate_id)?
            .ok_or(RepositoryError::NotFound)?;

        transition_to_placed(&mut candidate, draft, now)?;
        let placement = candidate
            .placement
            .clone()
            .expect("guard attached a placement");

        info!(
            candidate = %candidate_id.0,
            client = %placement.client.client_company,
            "candidate placed"
        );
        self.repository.upsert(candidate)?;
        Ok(placement)
    }

    pub fn add_milestone(
        &self,
        candidate_id: &CandidateId,
        title: String,
    ) -> Result<Placement, EngagementServiceError> {
        self.with_placement(candidate_id, |placement| {
            add_milestone(placement, title);
            Ok(())
        })
    }

    pub fn remove_milestone(
        &self,
        candidate_id: &CandidateId,
        index: usize,
    ) -> Result<Placement, EngagementServiceError> {
        self.with_placement(candidate_id, |placement| remove_milestone(placement, index))
    }

    pub fn toggle_milestone(
        &self,
        candidate_id: &CandidateId,
        index: usize,
    ) -> Result<Placement, EngagementServiceError> {
        self.with_placement(candidate_id, |placement| {
            toggle_milestone(placement, index)?;
            Ok(())
        })
    }

    fn with_placement(
        &self,
        candidate_id: &CandidateId,
        apply: impl FnOnce(&mut Placement) -> Result<(), MilestoneOutOfRange>,
    ) -> Result<Placement, EngagementServiceError> {
        let mut candidate = self
            .repository
            .fetch(candidate_id)?
            .ok_or(RepositoryError::NotFound)?;

        let placement = candidate
            .placement
            .as_mut()
            .ok_or(EngagementServiceError::NotPlaced {
                candidate_id: candidate_id.clone(),
            })?;
        apply(placement)?;
        let snapshot = placement.clone();

        self.repository.upsert(candidate)?;
        Ok(snapshot)
    }
}

/// Error raised by the engagement service.
#[derive(Debug, thiserror::Error)]
pub enum EngagementServiceError {
    #[error(transparent)]
    Validation(#[from] PlacementValidationError),
    #[error("feedback already submitted for interview {}", interview_id.0)]
    FeedbackAlreadySubmitted { interview_id: InterviewId },
    #[error("candidate {} has no placement", candidate_id.0)]
    NotPlaced { candidate_id: CandidateId },
    #[error(transparent)]
    Milestone(#[from] MilestoneOutOfRange),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
