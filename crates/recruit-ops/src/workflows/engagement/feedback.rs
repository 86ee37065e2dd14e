use serde::{Deserialize, Serialize};

use super::domain::{Candidate, FeedbackOutcome, InterviewId, Recommendation};

/// Rolling summary folded from a candidate's feedback-bearing interviews.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackSummary {
    /// Interview whose feedback was submitted most recently; ties on the
    /// submission instant resolve to the lowest interview id so repeated
    /// summaries of the same data agree.
    pub latest_interview_id: InterviewId,
    pub latest_outcome: FeedbackOutcome,
    /// Mean of each interview's mean over the rating axes it actually
    /// scored, rounded to one decimal. `None` when no feedback carries a
    /// single scored axis; a zero is never synthesized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f64>,
    pub positive_count: usize,
    pub recommended_count: usize,
    pub feedback_count: usize,
}

/// Fold a candidate's submitted feedback into one summary.
///
/// Returns `None` for a candidate with no feedback-bearing interviews —
/// callers must treat "no data" and "rated poorly" as different things.
pub fn summarize(candidate: &Candidate) -> Option<FeedbackSummary> {
    let mut with_feedback: Vec<_> = candidate
        .interviews
        .iter()
        .filter_map(|interview| {
            interview
                .feedback
                .as_ref()
                .map(|feedback| (interview, feedback))
        })
        .collect();

    if with_feedback.is_empty() {
        return None;
    }

    with_feedback.sort_by(|(a, fa), (b, fb)| {
        fa.submitted_at
            .cmp(&fb.submitted_at)
            .then_with(|| b.id.cmp(&a.id))
    });
    let (latest, latest_feedback) = with_feedback
        .last()
        .expect("non-empty feedback subset has a latest element");

    let axis_means: Vec<f64> = with_feedback
        .iter()
        .filter_map(|(_, feedback)| feedback.ratings.mean())
        .collect();
    let average_rating = if axis_means.is_empty() {
        None
    } else {
        let mean = axis_means.iter().sum::<f64>() / axis_means.len() as f64;
        Some((mean * 10.0).round() / 10.0)
    };

    let positive_count = with_feedback
        .iter()
        .filter(|(_, feedback)| feedback.outcome.is_positive())
        .count();
    let recommended_count = with_feedback
        .iter()
        .filter(|(_, feedback)| feedback.would_recommend_hiring == Recommendation::Yes)
        .count();

    Some(FeedbackSummary {
        latest_interview_id: latest.id.clone(),
        latest_outcome: latest_feedback.outcome,
        average_rating,
        positive_count,
        recommended_count,
        feedback_count: with_feedback.len(),
    })
}
