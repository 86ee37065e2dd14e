//! Candidate engagement lifecycle: interview classification, feedback
//! aggregation, priority ranking, and the placement transition guard.
//!
//! Everything except the service's persistence calls is a pure function of
//! `(data, now)`; "now" is always passed in explicitly so one ranking pass
//! judges every interview against the same instant.

pub mod domain;
pub mod feedback;
pub mod placement;
pub mod priority;
pub mod repository;
pub mod router;
pub mod schedule;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    Candidate, CandidateId, CandidateStatus, ClientEngagement, FeedbackOutcome, FeedbackRatings,
    Interview, InterviewFeedback, InterviewId, InterviewStatus, Milestone, Placement,
    PlacementDraft, Recommendation,
};
pub use feedback::{summarize, FeedbackSummary};
pub use placement::{
    add_milestone, remove_milestone, toggle_milestone, transition_to_placed, MilestoneOutOfRange,
    PlacementValidationError,
};
pub use priority::{compare, priority_bucket, rank};
pub use repository::{CandidateRepository, CandidateScope, RepositoryError};
pub use router::engagement_router;
pub use schedule::{classify, InterviewBucket};
pub use service::{EngagementService, EngagementServiceError, FeedbackDraft, RankedCandidate};
