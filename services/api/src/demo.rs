use chrono::{DateTime, Duration, Utc};
use clap::Args;
use std::sync::Arc;

use crate::infra::{
    seed_candidates, seed_recruiters, InMemoryCandidateRepository, InMemoryHierarchyRepository,
};
use recruit_ops::error::AppError;
use recruit_ops::workflows::engagement::{
    CandidateScope, EngagementService, FeedbackDraft, FeedbackOutcome, FeedbackRatings,
    InterviewId, PlacementDraft, Recommendation,
};
use recruit_ops::workflows::hierarchy::{
    HierarchyService, PermissionGate, RecruiterId, RecruiterType,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Fixed "now" for reproducible output (RFC 3339); defaults to the
    /// system clock
    #[arg(long)]
    now: Option<DateTime<Utc>>,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let now = args.now.unwrap_or_else(Utc::now);

    let engagement = Arc::new(EngagementService::new(Arc::new(
        InMemoryCandidateRepository::seeded(seed_candidates(now)),
    )));
    let hierarchy = Arc::new(HierarchyService::new(Arc::new(
        InMemoryHierarchyRepository::seeded(seed_recruiters()),
    )));

    println!("Recruiting-operations walkthrough (now = {now})");
    println!();

    println!("== Ranked pipeline ==");
    print_ranked(&engagement, now);

    println!();
    println!("== Submitting feedback for the overdue interview ==");
    match engagement.submit_feedback(
        &InterviewId("int-002".to_string()),
        FeedbackDraft {
            outcome: FeedbackOutcome::Excellent,
            ratings: FeedbackRatings {
                overall: Some(5),
                technical: Some(5),
                communication: Some(4),
                cultural_fit: Some(4),
            },
            would_recommend_hiring: Recommendation::Yes,
            notes: Some("strong systems design round".to_string()),
        },
        now,
    ) {
        Ok(interview) => println!("feedback recorded for {}", interview.id.0),
        Err(err) => println!("feedback rejected: {err}"),
    }
    print_ranked(&engagement, now + Duration::minutes(1));

    println!();
    println!("== Placing the candidate ==");
    match engagement.place_candidate(
        &recruit_ops::workflows::engagement::CandidateId("cand-002".to_string()),
        PlacementDraft {
            job_title: "Senior Platform Engineer".to_string(),
            salary: Some(155_000),
            client_company: "Northwind Logistics".to_string(),
            ..PlacementDraft::default()
        },
        now,
    ) {
        Ok(placement) => println!(
            "placed at {} for {} ({})",
            placement.client.client_company, placement.salary, placement.job_title
        ),
        Err(err) => println!("placement rejected: {err}"),
    }

    println!();
    println!("== Permission gate ==");
    let forest = hierarchy
        .forest()
        .map_err(|err| AppError::Io(std::io::Error::new(std::io::ErrorKind::Other, err)))?;
    let gate = PermissionGate;
    for actor_id in ["alice", "bob", "lena"] {
        let actor = forest
            .get(&RecruiterId(actor_id.to_string()))
            .expect("seeded recruiter");
        println!(
            "{:<6} create admin: {:<5} create TA: {}",
            actor.name.split(' ').next().unwrap_or(actor_id),
            gate.can_create(actor, RecruiterType::Admin),
            gate.can_create(actor, RecruiterType::TalentAcquisition),
        );
    }

    println!();
    println!("== Org chart (Engineering only, ancestors preserved) ==");
    let filtered = forest.filter_preserving_ancestry(|profile| {
        profile
            .department
            .as_deref()
            .is_some_and(|department| department.eq_ignore_ascii_case("engineering"))
    });
    for profile in filtered.flatten() {
        let depth = filtered.depth(&profile.id).unwrap_or(0);
        println!(
            "{}{} [{}]",
            "  ".repeat(depth),
            profile.name,
            profile.recruiter_type.label()
        );
    }

    Ok(())
}

fn print_ranked(service: &EngagementService<InMemoryCandidateRepository>, now: DateTime<Utc>) {
    match service.ranked_candidates(&CandidateScope::Organization, now) {
        Ok(ranked) => {
            for entry in ranked {
                let rating = entry
                    .feedback
                    .as_ref()
                    .and_then(|summary| summary.average_rating)
                    .map(|rating| format!("{rating:.1}"))
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "  tier {}  {:<14} status={:<9} avg-rating={}",
                    entry.priority,
                    entry.candidate.name,
                    entry.candidate.status.label(),
                    rating
                );
            }
        }
        Err(err) => println!("ranking failed: {err}"),
    }
}
