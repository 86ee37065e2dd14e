//! Recruiter organization: the tree itself, the role/hierarchy permission
//! gate layered on top, and the membership service that mutates through
//! both.

pub mod domain;
pub mod permissions;
pub mod repository;
pub mod router;
pub mod service;
pub mod tree;

#[cfg(test)]
mod tests;

pub use domain::{RecruiterDraft, RecruiterId, RecruiterProfile, RecruiterType};
pub use permissions::{sees_whole_org, AdminRequestPolicy, PermissionError, PermissionGate};
pub use repository::HierarchyRepository;
pub use router::hierarchy_router;
pub use service::{HierarchyService, HierarchyServiceError, OrgChartFilter};
pub use tree::{IntegrityError, RecruiterForest, RecruiterNode};
