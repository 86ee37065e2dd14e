use serde::{Deserialize, Serialize};

/// Identifier wrapper for recruiter profiles.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecruiterId(pub String);

/// Role of a recruiter within the organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecruiterType {
    Admin,
    Lead,
    TalentAcquisition,
    HumanResources,
    ClientServicing,
    Junior,
}

impl RecruiterType {
    pub const fn label(self) -> &'static str {
        match self {
            RecruiterType::Admin => "admin",
            RecruiterType::Lead => "lead",
            RecruiterType::TalentAcquisition => "talent_acquisition",
            RecruiterType::HumanResources => "human_resources",
            RecruiterType::ClientServicing => "client_servicing",
            RecruiterType::Junior => "junior",
        }
    }
}

/// A member of the recruiting organization. `reporting_manager` is a weak
/// back-reference; the owned tree shape lives in `tree::RecruiterForest`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecruiterProfile {
    pub id: RecruiterId,
    pub name: String,
    pub email: String,
    pub recruiter_type: RecruiterType,
    /// Exactly one profile per organization carries this flag; the
    /// permission gate rejects a second.
    pub is_main_admin: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporting_manager: Option<RecruiterId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    pub is_active: bool,
}

/// A new-member request before the permission gate has ruled on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecruiterDraft {
    pub name: String,
    pub email: String,
    pub recruiter_type: RecruiterType,
    #[serde(default)]
    pub is_main_admin: bool,
    #[serde(default)]
    pub reporting_manager: Option<RecruiterId>,
    #[serde(default)]
    pub department: Option<String>,
}
