use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::info;

use super::domain::{RecruiterDraft, RecruiterId, RecruiterProfile};
use super::permissions::{AdminRequestPolicy, PermissionError, PermissionGate};
use super::repository::HierarchyRepository;
use super::tree::{IntegrityError, RecruiterForest};
use crate::workflows::engagement::RepositoryError;

static RECRUITER_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_recruiter_id() -> RecruiterId {
    let id = RECRUITER_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    RecruiterId(format!("rec-{id:06}"))
}

/// Service composing the permission gate and tree integrity checks over a
/// recruiter repository.
pub struct HierarchyService<R> {
    repository: Arc<R>,
    gate: PermissionGate,
    admin_policy: AdminRequestPolicy,
}

impl<R> HierarchyService<R>
where
    R: HierarchyRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_policy(repository, AdminRequestPolicy::default())
    }

    pub fn with_policy(repository: Arc<R>, admin_policy: AdminRequestPolicy) -> Self {
        Self {
            repository,
            gate: PermissionGate,
            admin_policy,
        }
    }

    /// The current organization as a checked forest.
    pub fn forest(&self) -> Result<RecruiterForest, HierarchyServiceError> {
        let profiles = self.repository.all()?;
        Ok(RecruiterForest::from_profiles(profiles)?)
    }

    /// Admit a new member: gate the actor, settle the effective role under
    /// the admin-request policy, enforce main-admin singularity, and run
    /// the pre-insert ancestry check before anything is persisted.
    pub fn create_recruiter(
        &self,
        actor_id: &RecruiterId,
        draft: RecruiterDraft,
    ) -> Result<RecruiterProfile, HierarchyServiceError> {
        let actor = self
            .repository
            .fetch(actor_id)?
            .ok_or(RepositoryError::NotFound)?;
        let forest = self.forest()?;

        let effective_type =
            self.gate
                .effective_create_type(&actor, draft.recruiter_type, self.admin_policy)?;
        self.gate
            .check_main_admin_slot(&forest, draft.is_main_admin)?;

        if let Some(manager) = &draft.reporting_manager {
            if forest.get(manager).is_none() {
                return Err(HierarchyServiceError::Repository(RepositoryError::NotFound));
            }
        }

        let profile = RecruiterProfile {
            id: next_recruiter_id(),
            name: draft.name,
            email: draft.email,
            recruiter_type: effective_type,
            is_main_admin: draft.is_main_admin,
            reporting_manager: draft.reporting_manager,
            department: draft.department,
            is_active: true,
        };

        // Attaching under an existing node cannot create a cycle for a
        // fresh id, but re-validating the whole snapshot keeps the
        // invariant checked in exactly one place.
        let mut profiles = self.repository.all()?;
        profiles.push(profile.clone());
        RecruiterForest::from_profiles(profiles)?;

        let stored = self.repository.insert(profile)?;
        info!(
            recruiter = %stored.id.0,
            role = stored.recruiter_type.label(),
            by = %actor.id.0,
            "recruiter created"
        );
        Ok(stored)
    }

    /// Deactivate a member, subject to the gate: active admin or lead,
    /// target in subtree, never self, never the main admin.
    pub fn deactivate_recruiter(
        &self,
        actor_id: &RecruiterId,
        target_id: &RecruiterId,
    ) -> Result<RecruiterProfile, HierarchyServiceError> {
        let actor = self
            .repository
            .fetch(actor_id)?
            .ok_or(RepositoryError::NotFound)?;
        let target = self
            .repository
            .fetch(target_id)?
            .ok_or(RepositoryError::NotFound)?;
        let forest = self.forest()?;

        self.gate.authorize_deactivate(&forest, &actor, &target)?;

        let mut updated = target;
        updated.is_active = false;
        self.repository.update(updated.clone())?;
        info!(recruiter = %updated.id.0, by = %actor.id.0, "recruiter deactivated");
        Ok(updated)
    }

    /// Org chart filtered without orphaning: every ancestor of a surviving
    /// node survives with it.
    pub fn org_chart(
        &self,
        filter: &OrgChartFilter,
    ) -> Result<RecruiterForest, HierarchyServiceError> {
        let forest = self.forest()?;

        if filter.is_empty() {
            return Ok(forest);
        }

        Ok(forest.filter_preserving_ancestry(|profile| {
            let department_matches = filter
                .department
                .as_ref()
                .map(|wanted| {
                    profile
                        .department
                        .as_ref()
                        .is_some_and(|have| have.eq_ignore_ascii_case(wanted))
                })
                .unwrap_or(true);
            let active_matches = filter
                .active_only
                .map(|wanted| !wanted || profile.is_active)
                .unwrap_or(true);

            department_matches && active_matches
        }))
    }
}

/// Filters accepted by the org chart view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrgChartFilter {
    pub department: Option<String>,
    pub active_only: Option<bool>,
}

impl OrgChartFilter {
    pub fn is_empty(&self) -> bool {
        self.department.is_none() && self.active_only.is_none()
    }
}

/// Error raised by the hierarchy service.
#[derive(Debug, thiserror::Error)]
pub enum HierarchyServiceError {
    #[error(transparent)]
    Permission(#[from] PermissionError),
    #[error(transparent)]
    Integrity(#[from] IntegrityError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
