use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppResult;
use crate::models::role::Role;
use crate::models::user::UserIdentity;

/// Authentication state as observed by the UI on a single render: who is
/// signed in (if anyone), their role, and whether the external check is
/// still in flight. Snapshots are immutable; the gate only ever reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: Option<UserIdentity>,
    pub role_id: Option<Role>,
    pub resolving: bool,
}

impl Session {
    /// State at application start, before the authentication check returns.
    pub fn resolving() -> Self {
        Self {
            user: None,
            role_id: None,
            resolving: true,
        }
    }

    /// Well-defined signed-out state. Not an error.
    pub fn anonymous() -> Self {
        Self {
            user: None,
            role_id: None,
            resolving: false,
        }
    }

    pub fn authenticated(user: UserIdentity, role: Role) -> Self {
        Self {
            user: Some(user),
            role_id: Some(role),
            resolving: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.role_id.is_some()
    }
}

/// External authentication check. Implementations talk to whatever backend
/// owns the credentials; this crate only consumes the outcome.
#[async_trait]
pub trait SessionResolver: Send + Sync {
    /// `Ok(None)` means the check completed and nobody is signed in.
    async fn resolve(&self) -> AppResult<Option<(UserIdentity, Role)>>;
}

/// Explicitly-owned session holder with the lifecycle
/// initialize -> resolving -> resolved/anonymous -> reset on sign-out.
///
/// The caller injects this wherever session state is needed; there is no
/// process-wide singleton. Gates receive `snapshot()` values, never `&mut`.
#[derive(Debug, Clone)]
pub struct AuthContext {
    session: Session,
    resolved_at: Option<DateTime<Utc>>,
}

impl AuthContext {
    /// Starts in the resolving state, matching application start.
    pub fn new() -> Self {
        Self {
            session: Session::resolving(),
            resolved_at: None,
        }
    }

    pub fn snapshot(&self) -> Session {
        self.session.clone()
    }

    /// When the last resolution (either outcome) completed.
    pub fn resolved_at(&self) -> Option<DateTime<Utc>> {
        self.resolved_at
    }

    /// Re-enter the resolving state, e.g. ahead of a token re-check.
    pub fn begin_resolving(&mut self) {
        tracing::debug!("session resolution started");
        self.session = Session::resolving();
    }

    pub fn resolve(&mut self, user: UserIdentity, role: Role) {
        tracing::debug!(user_id = %user.id, role = %role, "session resolved");
        self.session = Session::authenticated(user, role);
        self.resolved_at = Some(Utc::now());
    }

    pub fn resolve_anonymous(&mut self) {
        tracing::debug!("session resolved anonymous");
        self.session = Session::anonymous();
        self.resolved_at = Some(Utc::now());
    }

    pub fn sign_out(&mut self) {
        tracing::debug!("session signed out");
        self.session = Session::anonymous();
    }

    /// Drive one full lifecycle round trip through a resolver. A failed
    /// check leaves the context anonymous rather than stuck resolving, then
    /// surfaces the error to the caller.
    pub async fn resolve_with(&mut self, resolver: &dyn SessionResolver) -> AppResult<()> {
        self.begin_resolving();

        match resolver.resolve().await {
            Ok(Some((user, role))) => {
                self.resolve(user, role);
                Ok(())
            }
            Ok(None) => {
                self.resolve_anonymous();
                Ok(())
            }
            Err(err) => {
                self.resolve_anonymous();
                Err(err)
            }
        }
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolver returning a canned outcome. Backs the CLI demo and tests; real
/// deployments implement [`SessionResolver`] against their auth backend.
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    outcome: Option<(UserIdentity, Role)>,
}

impl StaticResolver {
    pub fn anonymous() -> Self {
        Self { outcome: None }
    }

    pub fn signed_in(user: UserIdentity, role: Role) -> Self {
        Self {
            outcome: Some((user, role)),
        }
    }
}

#[async_trait]
impl SessionResolver for StaticResolver {
    async fn resolve(&self) -> AppResult<Option<(UserIdentity, Role)>> {
        Ok(self.outcome.clone())
    }
}
