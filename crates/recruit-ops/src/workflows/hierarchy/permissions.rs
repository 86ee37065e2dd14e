use serde::{Deserialize, Serialize};

use super::domain::{RecruiterProfile, RecruiterType};
use super::tree::{IntegrityError, RecruiterForest};

/// Gate rejections, surfaced as typed errors so callers can tell a denied
/// request from an empty result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PermissionError {
    #[error("{actor} may not create a {} profile", target.label())]
    CreateDenied {
        actor: String,
        target: RecruiterType,
    },
    #[error("{actor} may not deactivate {target}")]
    DeactivateDenied { actor: String, target: String },
}

/// What to do when a sub-admin asks to create another admin.
///
/// `Reject` (the default) hard-fails with `PermissionError`. The legacy
/// behavior of quietly coercing the request to a `Lead` remains available
/// as `DowngradeToLead`, but a caller has to opt into that coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminRequestPolicy {
    #[default]
    Reject,
    DowngradeToLead,
}

/// Role and hierarchy based authorization, pure policy over a forest
/// snapshot. Every "is this user allowed to" branch in the platform runs
/// through here so the rules have one home and one test surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissionGate;

impl PermissionGate {
    /// May `actor` create a profile of `target` type?
    ///
    /// Only the single main admin may mint other admins; any active admin
    /// or lead may create the line roles.
    pub fn can_create(&self, actor: &RecruiterProfile, target: RecruiterType) -> bool {
        if !actor.is_active {
            return false;
        }

        match target {
            RecruiterType::Admin => actor.is_main_admin,
            _ => matches!(
                actor.recruiter_type,
                RecruiterType::Admin | RecruiterType::Lead
            ),
        }
    }

    pub fn authorize_create(
        &self,
        actor: &RecruiterProfile,
        target: RecruiterType,
    ) -> Result<(), PermissionError> {
        if self.can_create(actor, target) {
            Ok(())
        } else {
            Err(PermissionError::CreateDenied {
                actor: actor.name.clone(),
                target,
            })
        }
    }

    /// Apply the admin-request policy to a requested role. Under
    /// `DowngradeToLead` a sub-admin's admin request becomes a lead
    /// request instead of failing; everything else passes through.
    pub fn effective_create_type(
        &self,
        actor: &RecruiterProfile,
        requested: RecruiterType,
        policy: AdminRequestPolicy,
    ) -> Result<RecruiterType, PermissionError> {
        if requested == RecruiterType::Admin
            && !actor.is_main_admin
            && policy == AdminRequestPolicy::DowngradeToLead
            && self.can_create(actor, RecruiterType::Lead)
        {
            return Ok(RecruiterType::Lead);
        }

        self.authorize_create(actor, requested)?;
        Ok(requested)
    }

    /// May `actor` deactivate `target`?
    ///
    /// Requires an active admin or lead, a non-admin target inside the
    /// actor's subtree, and never the actor themselves or the main admin.
    pub fn can_deactivate(
        &self,
        forest: &RecruiterForest,
        actor: &RecruiterProfile,
        target: &RecruiterProfile,
    ) -> bool {
        if !actor.is_active {
            return false;
        }
        if actor.id == target.id || target.is_main_admin {
            return false;
        }
        if target.recruiter_type == RecruiterType::Admin && !actor.is_main_admin {
            return false;
        }
        if !matches!(
            actor.recruiter_type,
            RecruiterType::Admin | RecruiterType::Lead
        ) {
            return false;
        }

        // The main admin reaches the whole organization; everyone else
        // only their own subtree.
        actor.is_main_admin || forest.in_subtree(&actor.id, &target.id)
    }

    pub fn authorize_deactivate(
        &self,
        forest: &RecruiterForest,
        actor: &RecruiterProfile,
        target: &RecruiterProfile,
    ) -> Result<(), PermissionError> {
        if self.can_deactivate(forest, actor, target) {
            Ok(())
        } else {
            Err(PermissionError::DeactivateDenied {
                actor: actor.name.clone(),
                target: target.name.clone(),
            })
        }
    }

    /// Enforce main-admin singularity for a profile about to be admitted.
    pub fn check_main_admin_slot(
        &self,
        forest: &RecruiterForest,
        wants_main_admin: bool,
    ) -> Result<(), IntegrityError> {
        if !wants_main_admin {
            return Ok(());
        }

        match forest.main_admin() {
            Some(existing) => Err(IntegrityError::DuplicateMainAdmin {
                existing: existing.id.clone(),
            }),
            None => Ok(()),
        }
    }
}

/// Convenience check used by scope resolution: whether a recruiter may
/// query the whole organization rather than just their own candidates.
pub fn sees_whole_org(profile: &RecruiterProfile) -> bool {
    matches!(
        profile.recruiter_type,
        RecruiterType::Admin | RecruiterType::Lead
    ) && profile.is_active
}
