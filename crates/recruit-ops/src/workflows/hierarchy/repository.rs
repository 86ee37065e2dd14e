use super::domain::{RecruiterId, RecruiterProfile};
use crate::workflows::engagement::RepositoryError;

/// Storage abstraction over the remote recruiter store. Profiles travel
/// flat (parent pointers); the service rebuilds the owned forest on each
/// call so integrity is re-checked against the current snapshot.
pub trait HierarchyRepository: Send + Sync {
    fn insert(&self, profile: RecruiterProfile) -> Result<RecruiterProfile, RepositoryError>;
    fn update(&self, profile: RecruiterProfile) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &RecruiterId) -> Result<Option<RecruiterProfile>, RepositoryError>;
    /// All profiles in insertion order.
    fn all(&self) -> Result<Vec<RecruiterProfile>, RepositoryError>;
}
