use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use super::domain::{Candidate, CandidateStatus};
use super::schedule::{classify, InterviewBucket};

/// Urgency tier for a candidate; 1 is the most urgent. Every interview in
/// one call is judged against the same `now` so a ranking pass never sees
/// torn time.
///
/// The ladder is first-match-wins:
/// 1. an upcoming interview exists
/// 2. an interview awaits feedback
/// 3. placed
/// 4. active with at least one past interview
/// 5. placed with no interview history (shadowed by tier 3 today; retained
///    so the 1..=6 scale stays stable for consumers)
/// 6. everything else
pub fn priority_bucket(candidate: &Candidate, now: DateTime<Utc>) -> u8 {
    let buckets: Vec<InterviewBucket> = candidate
        .interviews
        .iter()
        .map(|interview| classify(interview, now))
        .collect();

    if buckets.contains(&InterviewBucket::Upcoming) {
        return 1;
    }
    if buckets.contains(&InterviewBucket::AwaitingFeedback) {
        return 2;
    }
    if candidate.status == CandidateStatus::Placed {
        return 3;
    }

    let has_past_interview = candidate
        .interviews
        .iter()
        .any(|interview| interview.ends_at() <= now);
    if candidate.status == CandidateStatus::Active && has_past_interview {
        return 4;
    }

    if candidate.status == CandidateStatus::Placed && candidate.interviews.is_empty() {
        return 5;
    }

    6
}

/// Total order for list rendering: tier ascending, then `created_at`
/// descending so fresh entries surface first. Equal keys compare equal;
/// pair this with a stable sort so input order survives ties.
pub fn compare(a: &Candidate, b: &Candidate, now: DateTime<Utc>) -> Ordering {
    priority_bucket(a, now)
        .cmp(&priority_bucket(b, now))
        .then_with(|| b.created_at.cmp(&a.created_at))
}

/// Rank candidates by urgency. The sort is stable, which is what keeps
/// equal-tier, equal-timestamp candidates in their input order; the tier
/// is computed once per candidate rather than per comparison.
pub fn rank(mut candidates: Vec<Candidate>, now: DateTime<Utc>) -> Vec<Candidate> {
    candidates.sort_by_cached_key(|candidate| {
        (
            priority_bucket(candidate, now),
            std::cmp::Reverse(candidate.created_at),
        )
    });
    candidates
}
