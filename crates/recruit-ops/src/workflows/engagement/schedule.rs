use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{Interview, InterviewStatus};

/// Lifecycle bucket derived from an interview and the current instant.
///
/// Nothing persists this; it is recomputed on every read so the list stays
/// honest as wall-clock time advances past the scheduled window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewBucket {
    Upcoming,
    AwaitingFeedback,
    FeedbackDone,
    PastNoFeedbackNeeded,
}

impl InterviewBucket {
    pub const fn label(self) -> &'static str {
        match self {
            InterviewBucket::Upcoming => "upcoming",
            InterviewBucket::AwaitingFeedback => "awaiting_feedback",
            InterviewBucket::FeedbackDone => "feedback_done",
            InterviewBucket::PastNoFeedbackNeeded => "past_no_feedback_needed",
        }
    }
}

/// Classify an interview against an explicit `now`.
///
/// The end boundary is inclusive: an interview becomes eligible for
/// feedback the instant its scheduled window closes, not one tick later.
pub fn classify(interview: &Interview, now: DateTime<Utc>) -> InterviewBucket {
    if interview.status == InterviewStatus::Cancelled {
        return InterviewBucket::PastNoFeedbackNeeded;
    }

    if interview.scheduled_at > now
        && matches!(
            interview.status,
            InterviewStatus::Scheduled | InterviewStatus::Confirmed
        )
    {
        return InterviewBucket::Upcoming;
    }

    if interview.ends_at() <= now && !interview.feedback_submitted() {
        return InterviewBucket::AwaitingFeedback;
    }

    if interview.feedback_submitted() {
        return InterviewBucket::FeedbackDone;
    }

    // Window opened but not yet closed (e.g. in progress) with nothing
    // submitted: no feedback is owed yet.
    InterviewBucket::PastNoFeedbackNeeded
}
