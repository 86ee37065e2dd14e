use super::common::*;
use crate::workflows::engagement::domain::{FeedbackOutcome, InterviewStatus};
use crate::workflows::engagement::schedule::{classify, InterviewBucket};

#[test]
fn cancelled_interviews_never_owe_feedback() {
    let mut i1 = interview("i-1", at(2024, 1, 10, 10, 0), 60);
    i1.status = InterviewStatus::Cancelled;

    // Before, during, and long after the window.
    for now in [
        at(2024, 1, 10, 9, 0),
        at(2024, 1, 10, 10, 30),
        at(2024, 2, 1, 0, 0),
    ] {
        assert_eq!(classify(&i1, now), InterviewBucket::PastNoFeedbackNeeded);
    }
}

#[test]
fn future_confirmed_interview_is_upcoming() {
    let i1 = interview("i-1", at(2024, 1, 10, 10, 0), 60);
    assert_eq!(
        classify(&i1, at(2024, 1, 10, 9, 0)),
        InterviewBucket::Upcoming
    );
}

#[test]
fn end_boundary_is_inclusive() {
    // Window closes at exactly 11:00; at that very instant feedback is due.
    let i1 = interview("i-1", at(2024, 1, 10, 10, 0), 60);
    assert_eq!(
        classify(&i1, at(2024, 1, 10, 11, 0)),
        InterviewBucket::AwaitingFeedback
    );
}

#[test]
fn mid_window_interview_owes_nothing_yet() {
    let mut i1 = interview("i-1", at(2024, 1, 10, 10, 0), 60);
    i1.status = InterviewStatus::InProgress;
    assert_eq!(
        classify(&i1, at(2024, 1, 10, 10, 30)),
        InterviewBucket::PastNoFeedbackNeeded
    );
}

#[test]
fn submitted_feedback_closes_the_loop() {
    let mut i1 = interview("i-1", at(2024, 1, 10, 10, 0), 60);
    i1.feedback = Some(feedback_at(FeedbackOutcome::Good, at(2024, 1, 10, 12, 0)));
    assert_eq!(
        classify(&i1, at(2024, 1, 10, 13, 0)),
        InterviewBucket::FeedbackDone
    );
}

#[test]
fn buckets_advance_monotonically_with_time() {
    let mut i1 = interview("i-1", at(2024, 1, 10, 10, 0), 60);

    let before = classify(&i1, at(2024, 1, 10, 9, 0));
    let during = classify(&i1, at(2024, 1, 10, 10, 30));
    let after = classify(&i1, at(2024, 1, 10, 11, 1));
    assert_eq!(before, InterviewBucket::Upcoming);
    assert_eq!(during, InterviewBucket::PastNoFeedbackNeeded);
    assert_eq!(after, InterviewBucket::AwaitingFeedback);

    i1.feedback = Some(feedback_at(FeedbackOutcome::Good, at(2024, 1, 10, 12, 0)));
    assert_eq!(
        classify(&i1, at(2024, 1, 10, 12, 5)),
        InterviewBucket::FeedbackDone
    );
    // Never regresses once feedback exists.
    assert_eq!(
        classify(&i1, at(2024, 3, 1, 0, 0)),
        InterviewBucket::FeedbackDone
    );
}

#[test]
fn rescheduled_past_interview_still_owes_feedback() {
    let mut i1 = interview("i-1", at(2024, 1, 10, 10, 0), 60);
    i1.status = InterviewStatus::Rescheduled;

    // Not upcoming even though it sits in the future: only scheduled or
    // confirmed interviews count as upcoming.
    assert_eq!(
        classify(&i1, at(2024, 1, 10, 9, 0)),
        InterviewBucket::PastNoFeedbackNeeded
    );
    assert_eq!(
        classify(&i1, at(2024, 1, 10, 11, 0)),
        InterviewBucket::AwaitingFeedback
    );
}
