use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};
use crate::models::role::{paths, Role};
use crate::session::Session;

use super::decision::Decision;
use super::evaluator::{authorize, authorize_public};

/// Policy attached to a protected route at composition time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutePolicy {
    /// Empty means any authenticated role.
    pub allowed_roles: Vec<Role>,
    /// Where anonymous sessions are sent.
    pub redirect_target: String,
}

impl RoutePolicy {
    pub fn new(allowed_roles: Vec<Role>, redirect_target: impl Into<String>) -> Self {
        Self {
            allowed_roles,
            redirect_target: redirect_target.into(),
        }
    }

    /// Top tier only.
    pub fn super_admin() -> Self {
        Self::new(vec![Role::SuperAdmin], paths::LOGIN)
    }

    /// Top two tiers.
    pub fn org_admins() -> Self {
        Self::new(vec![Role::SuperAdmin, Role::OrgAdmin], paths::LOGIN)
    }

    /// Any signed-in role.
    pub fn any_role() -> Self {
        Self::new(Vec::new(), paths::LOGIN)
    }

    pub fn decide(&self, session: &Session) -> Decision {
        authorize(session, &self.allowed_roles, &self.redirect_target)
    }
}

/// Rule attached to a registered route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RouteRule {
    Protected(RoutePolicy),
    /// Inaccessible once signed in (login, recovery).
    PublicOnly,
}

/// Composition-time route registry.
///
/// Registration validates eagerly: a malformed path or redirect target is a
/// configuration mistake and must surface when the table is built, not on
/// some later navigation.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    rules: BTreeMap<String, RouteRule>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, path: &str, rule: RouteRule) -> AppResult<()> {
        if !path.starts_with('/') {
            return Err(AppError::configuration(format!(
                "route path must start with '/': {path:?}"
            )));
        }

        if let RouteRule::Protected(policy) = &rule {
            if !policy.redirect_target.starts_with('/') {
                return Err(AppError::configuration(format!(
                    "redirect target must start with '/': {:?} (route {path})",
                    policy.redirect_target
                )));
            }
        }

        if self.rules.contains_key(path) {
            return Err(AppError::configuration(format!(
                "route registered twice: {path}"
            )));
        }

        self.rules.insert(path.to_string(), rule);
        Ok(())
    }

    pub fn protect(&mut self, path: &str, policy: RoutePolicy) -> AppResult<()> {
        self.register(path, RouteRule::Protected(policy))
    }

    pub fn public_only(&mut self, path: &str) -> AppResult<()> {
        self.register(path, RouteRule::PublicOnly)
    }

    /// Evaluate the rule for `path` against a session snapshot. `None` for
    /// unregistered paths; not-found handling belongs to the router.
    pub fn decide(&self, path: &str, session: &Session) -> Option<Decision> {
        self.rules.get(path).map(|rule| match rule {
            RouteRule::Protected(policy) => policy.decide(session),
            RouteRule::PublicOnly => authorize_public(session),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RouteRule)> {
        self.rules.iter().map(|(path, rule)| (path.as_str(), rule))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The dashboard's stock route map: one landing area per tier plus the
    /// public-only auth pages.
    pub fn dashboard_defaults() -> AppResult<Self> {
        let mut table = Self::new();

        table.protect(paths::SUPER_ADMIN_HOME, RoutePolicy::super_admin())?;
        table.protect(paths::ORG_ADMIN_HOME, RoutePolicy::org_admins())?;
        table.protect(paths::ORG_MINER_HOME, RoutePolicy::any_role())?;
        table.public_only(paths::LOGIN)?;
        table.public_only(paths::RECOVERY)?;

        Ok(table)
    }
}
