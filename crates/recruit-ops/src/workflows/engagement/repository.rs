use serde::{Deserialize, Serialize};

use super::domain::{Candidate, CandidateId};
use crate::workflows::hierarchy::RecruiterId;

/// Which slice of the pipeline a caller may see. Admins and leads query
/// the whole organization; everyone else queries their own candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "scope", content = "recruiter_id")]
pub enum CandidateScope {
    Mine(RecruiterId),
    Organization,
}

/// Storage abstraction over the remote candidate store so the engagement
/// service can be exercised in isolation.
///
/// `upsert` must be atomic per candidate id in whatever way the backing
/// store offers; that conditional write is what keeps concurrent
/// placements from attaching two records to one candidate.
pub trait CandidateRepository: Send + Sync {
    fn insert(&self, candidate: Candidate) -> Result<Candidate, RepositoryError>;
    fn upsert(&self, candidate: Candidate) -> Result<Candidate, RepositoryError>;
    fn fetch(&self, id: &CandidateId) -> Result<Option<Candidate>, RepositoryError>;
    /// Candidates in insertion order; ranking happens in the service.
    fn list(&self, scope: &CandidateScope) -> Result<Vec<Candidate>, RepositoryError>;
    fn find_by_interview(
        &self,
        interview_id: &super::domain::InterviewId,
    ) -> Result<Option<Candidate>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
