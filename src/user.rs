//! Registered portal users with role-specific profile data.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::types::{AccountStatus, Role};

/// Role-specific profile data, tagged per role so citizen counters and
/// official departments cannot be confused.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum RoleProfile {
    Citizen {
        issues_reported: u32,
    },
    Official {
        department: String,
        issues_resolved: u32,
    },
    Admin,
}

impl RoleProfile {
    pub fn role(&self) -> Role {
        match self {
            RoleProfile::Citizen { .. } => Role::Citizen,
            RoleProfile::Official { .. } => Role::Official,
            RoleProfile::Admin => Role::Admin,
        }
    }

    pub fn department(&self) -> Option<&str> {
        match self {
            RoleProfile::Official { department, .. } => Some(department),
            _ => None,
        }
    }
}

/// A registered user account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique within the session's user collection.
    pub id: u32,
    pub name: String,
    pub email: String,
    #[serde(flatten)]
    pub profile: RoleProfile,
    pub status: AccountStatus,
    pub verified: bool,
    /// None for accounts that have never signed in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_active: Option<Timestamp>,
    pub joined: Timestamp,
}

impl User {
    pub fn role(&self) -> Role {
        self.profile.role()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_profile_role() {
        assert_eq!(RoleProfile::Citizen { issues_reported: 3 }.role(), Role::Citizen);
        assert_eq!(
            RoleProfile::Official {
                department: "Roads Department".to_string(),
                issues_resolved: 45,
            }
            .role(),
            Role::Official
        );
        assert_eq!(RoleProfile::Admin.role(), Role::Admin);
    }

    #[test]
    fn test_department_only_for_officials() {
        let official = RoleProfile::Official {
            department: "Water Supply Department".to_string(),
            issues_resolved: 28,
        };
        assert_eq!(official.department(), Some("Water Supply Department"));
        assert_eq!(RoleProfile::Citizen { issues_reported: 0 }.department(), None);
        assert_eq!(RoleProfile::Admin.department(), None);
    }
}
