use chrono::{DateTime, Utc};

use super::domain::{
    Candidate, CandidateStatus, ClientEngagement, Milestone, Placement, PlacementDraft,
};

/// Rejection raised when placement terms are incomplete. Every missing
/// field is reported in one pass so the caller fixes the draft once.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("placement draft incomplete: missing {}", missing.join(", "))]
pub struct PlacementValidationError {
    pub missing: Vec<&'static str>,
}

/// Rejection raised when addressing a milestone that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no milestone at index {0}")]
pub struct MilestoneOutOfRange(pub usize);

fn validate(draft: &PlacementDraft) -> Result<(), PlacementValidationError> {
    let mut missing = Vec::new();

    match draft.salary {
        Some(salary) if salary > 0 => {}
        _ => missing.push("salary"),
    }
    if draft.client_company.trim().is_empty() {
        missing.push("client_company");
    }
    if draft.job_title.trim().is_empty() {
        missing.push("job_title");
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(PlacementValidationError { missing })
    }
}

/// Move a candidate into `Placed` and attach the placement record.
///
/// All preconditions are checked before anything is written: a rejected
/// draft leaves the candidate's status and any existing placement exactly
/// as they were. A second successful call replaces the terms of the
/// existing record in place and keeps its milestones, so a candidate never
/// carries two placements.
pub fn transition_to_placed(
    candidate: &mut Candidate,
    draft: PlacementDraft,
    now: DateTime<Utc>,
) -> Result<&Placement, PlacementValidationError> {
    validate(&draft)?;

    let salary = draft.salary.expect("validated above");
    let client = ClientEngagement {
        client_company: draft.client_company.trim().to_string(),
        vendor_name: draft.vendor_name,
        account_manager: draft.account_manager,
    };

    match candidate.placement.as_mut() {
        Some(existing) => {
            existing.job_title = draft.job_title.trim().to_string();
            existing.salary = salary;
            existing.client = client;
            existing.start_date = draft.start_date;
        }
        None => {
            candidate.placement = Some(Placement {
                candidate_id: candidate.id.clone(),
                job_title: draft.job_title.trim().to_string(),
                salary,
                client,
                start_date: draft.start_date,
                milestones: Vec::new(),
                placed_at: now,
            });
        }
    }
    candidate.status = CandidateStatus::Placed;

    Ok(candidate
        .placement
        .as_ref()
        .expect("placement attached above"))
}

/// Append a milestone. Empty titles are accepted as placeholders; they
/// only become blocking when someone tries to complete them.
pub fn add_milestone(placement: &mut Placement, title: impl Into<String>) -> &Milestone {
    placement.milestones.push(Milestone::new(title));
    placement
        .milestones
        .last()
        .expect("milestone pushed above")
}

pub fn remove_milestone(placement: &mut Placement, index: usize) -> Result<(), MilestoneOutOfRange> {
    if index >= placement.milestones.len() {
        return Err(MilestoneOutOfRange(index));
    }
    placement.milestones.remove(index);
    Ok(())
}

/// Flip a milestone's completion and return the new state. An untitled
/// milestone still toggles; surfacing it as not complete-able is the
/// caller's concern (`Milestone::is_completable`), never a hard failure
/// here. Candidate status is untouched either way.
pub fn toggle_milestone(placement: &mut Placement, index: usize) -> Result<bool, MilestoneOutOfRange> {
    let milestone = placement
        .milestones
        .get_mut(index)
        .ok_or(MilestoneOutOfRange(index))?;

    milestone.completed = !milestone.completed;
    Ok(milestone.completed)
}
