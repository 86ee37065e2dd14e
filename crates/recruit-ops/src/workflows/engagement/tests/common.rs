use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeZone, Utc};

use crate::workflows::engagement::domain::{
    Candidate, CandidateId, CandidateStatus, FeedbackOutcome, FeedbackRatings, Interview,
    InterviewFeedback, InterviewId, InterviewStatus, Recommendation,
};
use crate::workflows::engagement::repository::{
    CandidateRepository, CandidateScope, RepositoryError,
};
use crate::workflows::engagement::service::EngagementService;
use crate::workflows::hierarchy::RecruiterId;

pub(super) fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).single().expect("valid instant")
}

pub(super) fn candidate(id: &str) -> Candidate {
    Candidate {
        id: CandidateId(id.to_string()),
        name: format!("Candidate {id}"),
        email: format!("{id}@example.com"),
        status: CandidateStatus::Active,
        skills: vec!["rust".to_string(), "sql".to_string()],
        added_by: RecruiterId("rec-000001".to_string()),
        created_at: at(2024, 1, 2, 9, 0),
        interviews: Vec::new(),
        placement: None,
    }
}

pub(super) fn interview(id: &str, scheduled_at: DateTime<Utc>, minutes: u32) -> Interview {
    Interview {
        id: InterviewId(id.to_string()),
        scheduled_at,
        duration_minutes: minutes,
        status: InterviewStatus::Confirmed,
        feedback: None,
    }
}

pub(super) fn feedback_at(
    outcome: FeedbackOutcome,
    submitted_at: DateTime<Utc>,
) -> InterviewFeedback {
    InterviewFeedback {
        outcome,
        ratings: FeedbackRatings {
            overall: Some(4),
            technical: Some(4),
            communication: Some(5),
            cultural_fit: None,
        },
        would_recommend_hiring: Recommendation::Yes,
        submitted_at,
        notes: None,
    }
}

#[derive(Default, Clone)]
pub(super) struct InMemoryCandidateRepository {
    records: Arc<Mutex<Vec<Candidate>>>,
}

impl InMemoryCandidateRepository {
    pub(super) fn seeded(candidates: Vec<Candidate>) -> Self {
        Self {
            records: Arc::new(Mutex::new(candidates)),
        }
    }
}

impl CandidateRepository for InMemoryCandidateRepository {
    fn insert(&self, candidate: Candidate) -> Result<Candidate, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.iter().any(|existing| existing.id == candidate.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(candidate.clone());
        Ok(candidate)
    }

    fn upsert(&self, candidate: Candidate) -> Result<Candidate, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        match guard.iter_mut().find(|existing| existing.id == candidate.id) {
            Some(existing) => *existing = candidate.clone(),
            None => guard.push(candidate.clone()),
        }
        Ok(candidate)
    }

    fn fetch(&self, id: &CandidateId) -> Result<Option<Candidate>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.iter().find(|candidate| &candidate.id == id).cloned())
    }

    fn list(&self, scope: &CandidateScope) -> Result<Vec<Candidate>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .iter()
            .filter(|candidate| match scope {
                CandidateScope::Organization => true,
                CandidateScope::Mine(recruiter) => &candidate.added_by == recruiter,
            })
            .cloned()
            .collect())
    }

    fn find_by_interview(
        &self,
        interview_id: &InterviewId,
    ) -> Result<Option<Candidate>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .iter()
            .find(|candidate| candidate.interview(interview_id).is_some())
            .cloned())
    }
}

pub(super) fn service_with(
    candidates: Vec<Candidate>,
) -> Arc<EngagementService<InMemoryCandidateRepository>> {
    let repository = Arc::new(InMemoryCandidateRepository::seeded(candidates));
    Arc::new(EngagementService::new(repository))
}
