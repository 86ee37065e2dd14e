use super::common::*;
use crate::workflows::hierarchy::domain::{RecruiterDraft, RecruiterId, RecruiterType};
use crate::workflows::hierarchy::service::{HierarchyServiceError, OrgChartFilter};
use crate::workflows::hierarchy::AdminRequestPolicy;

fn draft(recruiter_type: RecruiterType, manager: Option<&str>) -> RecruiterDraft {
    RecruiterDraft {
        name: "New Member".to_string(),
        email: "new@example.com".to_string(),
        recruiter_type,
        is_main_admin: false,
        reporting_manager: manager.map(|id| RecruiterId(id.to_string())),
        department: Some("Engineering".to_string()),
    }
}

#[test]
fn main_admin_creates_an_admin() {
    let service = service_with(vec![alice()]);

    let created = service
        .create_recruiter(
            &RecruiterId("alice".to_string()),
            draft(RecruiterType::Admin, Some("alice")),
        )
        .expect("main admin may mint admins");

    assert_eq!(created.recruiter_type, RecruiterType::Admin);
    assert!(created.is_active);
    assert!(!created.is_main_admin);
}

#[test]
fn sub_admin_admin_request_hard_fails_by_default() {
    let service = service_with(vec![alice(), bob()]);

    let err = service
        .create_recruiter(
            &RecruiterId("bob".to_string()),
            draft(RecruiterType::Admin, Some("bob")),
        )
        .expect_err("sub-admin denied");

    assert!(matches!(err, HierarchyServiceError::Permission(_)));
    let forest = service.forest().expect("forest");
    assert_eq!(forest.len(), 2);
}

#[test]
fn sub_admin_admin_request_downgrades_only_under_the_coercion_policy() {
    let service = service_with_policy(
        vec![alice(), bob()],
        AdminRequestPolicy::DowngradeToLead,
    );

    let created = service
        .create_recruiter(
            &RecruiterId("bob".to_string()),
            draft(RecruiterType::Admin, Some("bob")),
        )
        .expect("coerced instead of denied");

    assert_eq!(created.recruiter_type, RecruiterType::Lead);
}

#[test]
fn second_main_admin_claim_is_an_integrity_error() {
    let service = service_with(vec![alice()]);

    let mut attempt = draft(RecruiterType::Admin, Some("alice"));
    attempt.is_main_admin = true;
    let err = service
        .create_recruiter(&RecruiterId("alice".to_string()), attempt)
        .expect_err("slot already taken");

    assert!(matches!(err, HierarchyServiceError::Integrity(_)));
}

#[test]
fn create_under_unknown_manager_is_not_found() {
    let service = service_with(vec![alice()]);

    let err = service
        .create_recruiter(
            &RecruiterId("alice".to_string()),
            draft(RecruiterType::Junior, Some("ghost")),
        )
        .expect_err("manager must exist");

    assert!(matches!(err, HierarchyServiceError::Repository(_)));
}

#[test]
fn deactivation_applies_the_gate_and_persists() {
    let service = service_with(vec![
        alice(),
        bob(),
        reporting_to(profile("ta-1", RecruiterType::TalentAcquisition), "bob"),
    ]);

    let updated = service
        .deactivate_recruiter(
            &RecruiterId("bob".to_string()),
            &RecruiterId("ta-1".to_string()),
        )
        .expect("in subtree");
    assert!(!updated.is_active);

    let err = service
        .deactivate_recruiter(
            &RecruiterId("bob".to_string()),
            &RecruiterId("alice".to_string()),
        )
        .expect_err("main admin protected");
    assert!(matches!(err, HierarchyServiceError::Permission(_)));
}

#[test]
fn org_chart_filter_preserves_ancestry() {
    let mut ta = reporting_to(profile("ta-1", RecruiterType::TalentAcquisition), "lead-1");
    ta.department = Some("Engineering".to_string());
    let service = service_with(vec![
        alice(),
        reporting_to(profile("lead-1", RecruiterType::Lead), "alice"),
        ta,
        reporting_to(profile("hr-1", RecruiterType::HumanResources), "alice"),
    ]);

    let chart = service
        .org_chart(&OrgChartFilter {
            department: Some("engineering".to_string()),
            active_only: None,
        })
        .expect("chart");

    let ids: Vec<&str> = chart
        .flatten()
        .into_iter()
        .map(|profile| profile.id.0.as_str())
        .collect();
    assert_eq!(ids, vec!["alice", "lead-1", "ta-1"]);
}

#[test]
fn org_chart_without_filters_returns_everything() {
    let service = service_with(vec![alice(), bob()]);

    let chart = service.org_chart(&OrgChartFilter::default()).expect("chart");
    assert_eq!(chart.len(), 2);
}

#[test]
fn org_chart_active_filter_keeps_inactive_ancestors_of_active_reports() {
    let mut lead = reporting_to(profile("lead-1", RecruiterType::Lead), "alice");
    lead.is_active = false;
    let service = service_with(vec![
        alice(),
        lead,
        reporting_to(profile("ta-1", RecruiterType::TalentAcquisition), "lead-1"),
    ]);

    let chart = service
        .org_chart(&OrgChartFilter {
            department: None,
            active_only: Some(true),
        })
        .expect("chart");

    let ids: Vec<&str> = chart
        .flatten()
        .into_iter()
        .map(|profile| profile.id.0.as_str())
        .collect();
    // The inactive lead survives because an active report sits below.
    assert_eq!(ids, vec!["alice", "lead-1", "ta-1"]);
}
