use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::database::models::office::OfficeSummary;

/// Roles a portal user can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortalRole {
    SuperAdmin,
    OfficeAdmin,
    Agent,
}

impl PortalRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            PortalRole::SuperAdmin => "super_admin",
            PortalRole::OfficeAdmin => "office_admin",
            PortalRole::Agent => "agent",
        }
    }
}

impl std::fmt::Display for PortalRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortalUser {
    pub id: Uuid,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    pub role: PortalRole,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortalAgent {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Authenticated context of a portal request.
///
/// When `is_impersonating` is set, `user` is the identity being acted as
/// and `original_user` holds the elevated user behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortalSession {
    pub user: PortalUser,
    #[serde(default)]
    pub agent: Option<PortalAgent>,
    #[serde(default)]
    pub offices: Option<Vec<OfficeSummary>>,
    #[serde(default)]
    pub is_impersonating: bool,
    #[serde(default)]
    pub original_user: Option<PortalUser>,
}

impl PortalSession {
    /// Session carrying only a user, as issued for a plain login
    pub fn for_user(user: PortalUser) -> Self {
        Self {
            user,
            agent: None,
            offices: None,
            is_impersonating: false,
            original_user: None,
        }
    }

    pub fn has_any_role(&self, roles: &[PortalRole]) -> bool {
        roles.contains(&self.user.role)
    }
}
