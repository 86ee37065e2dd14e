use chrono::{DateTime, Duration, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use recruit_ops::workflows::engagement::{
    Candidate, CandidateId, CandidateRepository, CandidateScope, CandidateStatus, Interview,
    InterviewId, InterviewStatus, RepositoryError,
};
use recruit_ops::workflows::hierarchy::{
    HierarchyRepository, RecruiterId, RecruiterProfile, RecruiterType,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryCandidateRepository {
    records: Arc<Mutex<Vec<Candidate>>>,
}

impl InMemoryCandidateRepository {
    pub(crate) fn seeded(candidates: Vec<Candidate>) -> Self {
        Self {
            records: Arc::new(Mutex::new(candidates)),
        }
    }
}

impl CandidateRepository for InMemoryCandidateRepository {
    fn insert(&self, candidate: Candidate) -> Result<Candidate, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.iter().any(|existing| existing.id == candidate.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(candidate.clone());
        Ok(candidate)
    }

    fn upsert(&self, candidate: Candidate) -> Result<Candidate, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        match guard.iter_mut().find(|existing| existing.id == candidate.id) {
            Some(existing) => *existing = candidate.clone(),
            None => guard.push(candidate.clone()),
        }
        Ok(candidate)
    }

    fn fetch(&self, id: &CandidateId) -> Result<Option<Candidate>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.iter().find(|candidate| &candidate.id == id).cloned())
    }

    fn list(&self, scope: &CandidateScope) -> Result<Vec<Candidate>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .iter()
            .filter(|candidate| match scope {
                CandidateScope::Organization => true,
                CandidateScope::Mine(recruiter) => &candidate.added_by == recruiter,
            })
            .cloned()
            .collect())
    }

    fn find_by_interview(
        &self,
        interview_id: &InterviewId,
    ) -> Result<Option<Candidate>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .iter()
            .find(|candidate| candidate.interview(interview_id).is_some())
            .cloned())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryHierarchyRepository {
    records: Arc<Mutex<Vec<RecruiterProfile>>>,
}

impl InMemoryHierarchyRepository {
    pub(crate) fn seeded(profiles: Vec<RecruiterProfile>) -> Self {
        Self {
            records: Arc::new(Mutex::new(profiles)),
        }
    }
}

impl HierarchyRepository for InMemoryHierarchyRepository {
    fn insert(&self, profile: RecruiterProfile) -> Result<RecruiterProfile, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.iter().any(|existing| existing.id == profile.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(profile.clone());
        Ok(profile)
    }

    fn update(&self, profile: RecruiterProfile) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        match guard.iter_mut().find(|existing| existing.id == profile.id) {
            Some(existing) => {
                *existing = profile;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn fetch(&self, id: &RecruiterId) -> Result<Option<RecruiterProfile>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.iter().find(|profile| &profile.id == id).cloned())
    }

    fn all(&self) -> Result<Vec<RecruiterProfile>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.clone())
    }
}

/// Demo organization: one main admin, a sub-admin, and a lead with reports.
pub(crate) fn seed_recruiters() -> Vec<RecruiterProfile> {
    fn member(
        id: &str,
        name: &str,
        recruiter_type: RecruiterType,
        manager: Option<&str>,
        department: Option<&str>,
    ) -> RecruiterProfile {
        RecruiterProfile {
            id: RecruiterId(id.to_string()),
            name: name.to_string(),
            email: format!("{id}@recruit-ops.example"),
            recruiter_type,
            is_main_admin: false,
            reporting_manager: manager.map(|m| RecruiterId(m.to_string())),
            department: department.map(str::to_string),
            is_active: true,
        }
    }

    let mut alice = member("alice", "Alice Navarro", RecruiterType::Admin, None, None);
    alice.is_main_admin = true;

    vec![
        alice,
        member(
            "bob",
            "Bob Osei",
            RecruiterType::Admin,
            Some("alice"),
            None,
        ),
        member(
            "lena",
            "Lena Fischer",
            RecruiterType::Lead,
            Some("bob"),
            Some("Engineering"),
        ),
        member(
            "tara",
            "Tara Iyer",
            RecruiterType::TalentAcquisition,
            Some("lena"),
            Some("Engineering"),
        ),
        member(
            "hugo",
            "Hugo Martins",
            RecruiterType::HumanResources,
            Some("alice"),
            Some("People"),
        ),
    ]
}

/// Demo pipeline: one upcoming interview, one overdue for feedback, one
/// idle candidate.
pub(crate) fn seed_candidates(now: DateTime<Utc>) -> Vec<Candidate> {
    fn entry(
        id: &str,
        name: &str,
        added_by: &str,
        created_at: DateTime<Utc>,
        interviews: Vec<Interview>,
    ) -> Candidate {
        Candidate {
            id: CandidateId(id.to_string()),
            name: name.to_string(),
            email: format!("{id}@candidates.example"),
            status: CandidateStatus::Active,
            skills: vec!["rust".to_string(), "distributed-systems".to_string()],
            added_by: RecruiterId(added_by.to_string()),
            created_at,
            interviews,
            placement: None,
        }
    }

    fn slot(id: &str, scheduled_at: DateTime<Utc>, minutes: u32) -> Interview {
        Interview {
            id: InterviewId(id.to_string()),
            scheduled_at,
            duration_minutes: minutes,
            status: InterviewStatus::Confirmed,
            feedback: None,
        }
    }

    vec![
        entry(
            "cand-001",
            "Priya Raman",
            "tara",
            now - Duration::days(10),
            vec![slot("int-001", now + Duration::hours(3), 60)],
        ),
        entry(
            "cand-002",
            "Marcus Webb",
            "tara",
            now - Duration::days(6),
            vec![slot("int-002", now - Duration::hours(26), 45)],
        ),
        entry(
            "cand-003",
            "Sofia Keller",
            "lena",
            now - Duration::days(1),
            Vec::new(),
        ),
    ]
}
