use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Well-known route paths for the dashboard shell.
pub mod paths {
    pub const LOGIN: &str = "/login";
    pub const RECOVERY: &str = "/forgot-password";

    pub const SUPER_ADMIN_HOME: &str = "/admin/dashboard";
    pub const ORG_ADMIN_HOME: &str = "/org/dashboard";
    pub const ORG_MINER_HOME: &str = "/miner/dashboard";
}

/// Privilege tier attached to an authenticated identity.
///
/// The set is closed: route policies reference these variants directly, so a
/// role that is not in the enum cannot be named in an allow-list, and
/// `landing_path` is an exhaustive match, so every role has exactly one
/// default destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    OrgAdmin,
    OrgMiner,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::SuperAdmin, Role::OrgAdmin, Role::OrgMiner];

    /// Default destination for the role. Used both to send a wrong-role user
    /// somewhere valid and to bounce a signed-in user off public-only pages.
    pub fn landing_path(self) -> &'static str {
        match self {
            Role::SuperAdmin => paths::SUPER_ADMIN_HOME,
            Role::OrgAdmin => paths::ORG_ADMIN_HOME,
            Role::OrgMiner => paths::ORG_MINER_HOME,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::SuperAdmin => "super_admin",
            Role::OrgAdmin => "org_admin",
            Role::OrgMiner => "org_miner",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "super_admin" => Ok(Role::SuperAdmin),
            "org_admin" => Ok(Role::OrgAdmin),
            "org_miner" => Ok(Role::OrgMiner),
            other => Err(AppError::invalid_role(other)),
        }
    }
}
