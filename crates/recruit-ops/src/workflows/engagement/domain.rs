use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::workflows::hierarchy::RecruiterId;

/// Identifier wrapper for candidates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CandidateId(pub String);

/// Identifier wrapper for scheduled interviews.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InterviewId(pub String);

/// Candidate lifecycle status. `Placed` is only ever entered through the
/// placement guard so the placement record and status cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateStatus {
    Active,
    Placed,
    Inactive,
    DoNotContact,
}

impl CandidateStatus {
    pub const fn label(self) -> &'static str {
        match self {
            CandidateStatus::Active => "active",
            CandidateStatus::Placed => "placed",
            CandidateStatus::Inactive => "inactive",
            CandidateStatus::DoNotContact => "do_not_contact",
        }
    }
}

/// A candidate in the pipeline together with every scheduled interview and
/// the placement record once hired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    pub email: String,
    pub status: CandidateStatus,
    pub skills: Vec<String>,
    pub added_by: RecruiterId,
    pub created_at: DateTime<Utc>,
    pub interviews: Vec<Interview>,
    pub placement: Option<Placement>,
}

impl Candidate {
    pub fn interview(&self, id: &InterviewId) -> Option<&Interview> {
        self.interviews.iter().find(|interview| &interview.id == id)
    }

    pub fn interview_mut(&mut self, id: &InterviewId) -> Option<&mut Interview> {
        self.interviews
            .iter_mut()
            .find(|interview| &interview.id == id)
    }
}

/// Scheduling status as reported by the calendar integration. Feedback
/// eligibility is *not* read from this field; it is derived from the
/// scheduled window (see `schedule::classify`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewStatus {
    Scheduled,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
    Rescheduled,
}

/// A single scheduled interview, owned by exactly one candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interview {
    pub id: InterviewId,
    pub scheduled_at: DateTime<Utc>,
    /// Scheduled length in minutes, always positive.
    pub duration_minutes: u32,
    pub status: InterviewStatus,
    /// Present once the interviewer has submitted feedback. Storing the
    /// payload rather than a submitted flag keeps "flag set, payload
    /// missing" unrepresentable.
    pub feedback: Option<InterviewFeedback>,
}

impl Interview {
    /// The instant the scheduled window closes.
    pub fn ends_at(&self) -> DateTime<Utc> {
        self.scheduled_at + Duration::minutes(i64::from(self.duration_minutes))
    }

    pub fn feedback_submitted(&self) -> bool {
        self.feedback.is_some()
    }
}

/// Interviewer verdict on how the conversation went.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackOutcome {
    Excellent,
    Good,
    Average,
    Poor,
}

impl FeedbackOutcome {
    /// Outcomes counted toward a candidate's positive-feedback tally.
    pub const fn is_positive(self) -> bool {
        matches!(self, FeedbackOutcome::Excellent | FeedbackOutcome::Good)
    }
}

/// Hiring recommendation; interviewers may decline to answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    Yes,
    No,
    Unknown,
}

/// Per-axis scores in 1..=5. Axes an interviewer skipped stay `None` and
/// are excluded from averages rather than counted as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FeedbackRatings {
    pub overall: Option<u8>,
    pub technical: Option<u8>,
    pub communication: Option<u8>,
    pub cultural_fit: Option<u8>,
}

impl FeedbackRatings {
    /// Mean over the axes that were actually scored.
    pub fn mean(&self) -> Option<f64> {
        let present: Vec<u8> = [
            self.overall,
            self.technical,
            self.communication,
            self.cultural_fit,
        ]
        .into_iter()
        .flatten()
        .collect();

        if present.is_empty() {
            return None;
        }

        let sum: u32 = present.iter().map(|axis| u32::from(*axis)).sum();
        Some(f64::from(sum) / present.len() as f64)
    }
}

/// Submitted interview feedback. Immutable once attached; resubmission is
/// rejected at the service layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewFeedback {
    pub outcome: FeedbackOutcome,
    pub ratings: FeedbackRatings,
    pub would_recommend_hiring: Recommendation,
    pub submitted_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Client-side sub-record attached to a placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientEngagement {
    pub client_company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_manager: Option<String>,
}

/// Tracking milestone on a placement (onboarding call, first invoice, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub title: String,
    pub completed: bool,
}

impl Milestone {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            completed: false,
        }
    }

    /// Untitled milestones are legal placeholders but cannot be marked
    /// complete until someone names them.
    pub fn is_completable(&self) -> bool {
        !self.title.trim().is_empty()
    }
}

/// The compensation and client record attached once a candidate is hired.
/// At most one exists per candidate; a repeat placement replaces the
/// terms in place instead of creating a second record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub candidate_id: CandidateId,
    pub job_title: String,
    /// Annual salary in whole currency units, always positive.
    pub salary: u32,
    pub client: ClientEngagement,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    pub milestones: Vec<Milestone>,
    pub placed_at: DateTime<Utc>,
}

/// Unvalidated placement terms as entered by a recruiter. The guard in
/// `placement.rs` turns this into a `Placement` or rejects it wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlacementDraft {
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub salary: Option<u32>,
    #[serde(default)]
    pub client_company: String,
    #[serde(default)]
    pub vendor_name: Option<String>,
    #[serde(default)]
    pub account_manager: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
}
