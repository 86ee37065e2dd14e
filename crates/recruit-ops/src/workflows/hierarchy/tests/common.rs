use std::sync::{Arc, Mutex};

use crate::workflows::engagement::RepositoryError;
use crate::workflows::hierarchy::domain::{RecruiterId, RecruiterProfile, RecruiterType};
use crate::workflows::hierarchy::repository::HierarchyRepository;
use crate::workflows::hierarchy::service::HierarchyService;
use crate::workflows::hierarchy::AdminRequestPolicy;

pub(super) fn profile(id: &str, recruiter_type: RecruiterType) -> RecruiterProfile {
    RecruiterProfile {
        id: RecruiterId(id.to_string()),
        name: format!("Recruiter {id}"),
        email: format!("{id}@example.com"),
        recruiter_type,
        is_main_admin: false,
        reporting_manager: None,
        department: None,
        is_active: true,
    }
}

pub(super) fn reporting_to(mut p: RecruiterProfile, manager: &str) -> RecruiterProfile {
    p.reporting_manager = Some(RecruiterId(manager.to_string()));
    p
}

/// Alice is the single main admin; Bob is an ordinary admin under her.
pub(super) fn alice() -> RecruiterProfile {
    let mut p = profile("alice", RecruiterType::Admin);
    p.name = "Alice".to_string();
    p.is_main_admin = true;
    p
}

pub(super) fn bob() -> RecruiterProfile {
    let mut p = reporting_to(profile("bob", RecruiterType::Admin), "alice");
    p.name = "Bob".to_string();
    p
}

#[derive(Default, Clone)]
pub(super) struct InMemoryHierarchyRepository {
    records: Arc<Mutex<Vec<RecruiterProfile>>>,
}

impl InMemoryHierarchyRepository {
    pub(super) fn seeded(profiles: Vec<RecruiterProfile>) -> Self {
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

pub(super) fn service_with(
    profiles: Vec<RecruiterProfile>,
) -> Arc<HierarchyService<InMemoryHierarchyRepository>> {
    let repository = Arc::new(InMemoryHierarchyRepository::seeded(profiles));
    Arc::new(HierarchyService::new(repository))
}

pub(super) fn service_with_policy(
    profiles: Vec<RecruiterProfile>,
    policy: AdminRequestPolicy,
) -> Arc<HierarchyService<InMemoryHierarchyRepository>> {
    let repository = Arc::new(InMemoryHierarchyRepository::seeded(profiles));
    Arc::new(HierarchyService::with_policy(repository, policy))
}
