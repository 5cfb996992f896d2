use serde::{Deserialize, Serialize};

use super::role::{paths, Role};
use super::user::UserIdentity;

/// One sidebar link. `icon` is an icon-set key the rendering layer resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    pub label: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl NavEntry {
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Presentational sidebar container: an identity plus its navigation entries.
/// Carries no decision logic; gating happened before this is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavShell {
    pub identity: UserIdentity,
    pub entries: Vec<NavEntry>,
}

impl NavShell {
    /// Missing identities fall back to the placeholder so the shell always
    /// has something to render in the profile slot.
    pub fn new(identity: Option<UserIdentity>, entries: Vec<NavEntry>) -> Self {
        Self {
            identity: identity.unwrap_or_else(UserIdentity::placeholder),
            entries,
        }
    }
}

/// Stock sidebar for each tier. Composed here, rendered elsewhere; the shell
/// itself stays decision-free.
pub fn default_entries(role: Role) -> Vec<NavEntry> {
    match role {
        Role::SuperAdmin => vec![
            NavEntry::new("Overview", paths::SUPER_ADMIN_HOME).with_icon("gauge"),
            NavEntry::new("Organizations", "/admin/organizations").with_icon("building"),
            NavEntry::new("Users", "/admin/users").with_icon("users"),
        ],
        Role::OrgAdmin => vec![
            NavEntry::new("Overview", paths::ORG_ADMIN_HOME).with_icon("gauge"),
            NavEntry::new("Miners", "/org/miners").with_icon("pickaxe"),
            NavEntry::new("Reports", "/org/reports").with_icon("chart"),
        ],
        Role::OrgMiner => vec![
            NavEntry::new("Overview", paths::ORG_MINER_HOME).with_icon("gauge"),
            NavEntry::new("My Shifts", "/miner/shifts").with_icon("calendar"),
        ],
    }
}
