use crate::models::role::Role;
use crate::session::Session;

use super::decision::Decision;

/// Decide whether a protected route may render for the given session.
///
/// Evaluation order:
/// 1. resolution still pending -> `Pending`
/// 2. nobody signed in -> redirect to `fallback_path`, carrying the origin
/// 3. role outside a non-empty allow-list -> redirect to the role's landing
///    path, origin dropped
/// 4. allow
///
/// Pure and synchronous: no I/O, no session mutation, same decision for the
/// same snapshot every time.
pub fn authorize(session: &Session, allowed_roles: &[Role], fallback_path: &str) -> Decision {
    if session.resolving {
        tracing::debug!("session still resolving, holding render");
        return Decision::Pending;
    }

    let user = match &session.user {
        Some(user) => user,
        None => {
            tracing::debug!(fallback = %fallback_path, "anonymous session, redirecting to sign-in");
            return Decision::redirect(fallback_path, true);
        }
    };

    if !allowed_roles.is_empty() {
        match session.role_id {
            Some(role) if allowed_roles.contains(&role) => {}
            Some(role) => {
                tracing::debug!(
                    user_id = %user.id,
                    role = %role,
                    "role not in allow-list, redirecting to landing path"
                );
                return Decision::redirect(role.landing_path(), false);
            }
            // Signed in but roleless: a sign-in-state problem, not a
            // wrong-role one, so treat it like the anonymous branch.
            None => {
                tracing::debug!(user_id = %user.id, "session has no role, redirecting to sign-in");
                return Decision::redirect(fallback_path, true);
            }
        }
    }

    tracing::debug!(user_id = %user.id, "route allowed");
    Decision::Allow
}

/// Inverse policy for routes that must be unreachable once signed in
/// (login, password recovery).
pub fn authorize_public(session: &Session) -> Decision {
    if session.resolving {
        tracing::debug!("session still resolving, holding render");
        return Decision::Pending;
    }

    if let (Some(user), Some(role)) = (&session.user, session.role_id) {
        tracing::debug!(
            user_id = %user.id,
            role = %role,
            "already signed in, leaving public-only page"
        );
        return Decision::redirect(role.landing_path(), false);
    }

    Decision::Allow
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::UserIdentity;
    use uuid::Uuid;

    fn signed_in(role: Role) -> Session {
        Session::authenticated(
            UserIdentity::new(Uuid::new_v4(), "Dana Ore", "dana@example.com"),
            role,
        )
    }

    #[test]
    fn test_resolving_always_pending() {
        let session = Session::resolving();

        assert!(authorize(&session, &[], "/login").is_pending());
        assert!(authorize(&session, &[Role::SuperAdmin], "/login").is_pending());
        assert!(authorize_public(&session).is_pending());
    }

    #[test]
    fn test_anonymous_redirects_to_fallback_with_origin() {
        let session = Session::anonymous();

        let decision = authorize(&session, &[Role::SuperAdmin], "/login");
        assert_eq!(decision, Decision::redirect("/login", true));
    }

    #[test]
    fn test_wrong_role_lands_on_own_dashboard_without_origin() {
        let session = signed_in(Role::OrgMiner);

        let decision = authorize(&session, &[Role::SuperAdmin, Role::OrgAdmin], "/login");
        assert_eq!(
            decision,
            Decision::redirect(Role::OrgMiner.landing_path(), false)
        );
    }

    #[test]
    fn test_matching_role_allows() {
        let session = signed_in(Role::OrgAdmin);

        assert!(authorize(&session, &[Role::SuperAdmin, Role::OrgAdmin], "/login").is_allow());
    }

    #[test]
    fn test_empty_allow_list_admits_any_signed_in_role() {
        for role in Role::ALL {
            assert!(authorize(&signed_in(role), &[], "/login").is_allow());
        }
    }

    #[test]
    fn test_roleless_user_treated_as_sign_in_problem() {
        let session = Session {
            user: Some(UserIdentity::new(Uuid::new_v4(), "No Role", "norole@example.com")),
            role_id: None,
            resolving: false,
        };

        let decision = authorize(&session, &[Role::OrgAdmin], "/login");
        assert_eq!(decision, Decision::redirect("/login", true));
    }

    #[test]
    fn test_public_gate_bounces_signed_in_users() {
        let decision = authorize_public(&signed_in(Role::SuperAdmin));
        assert_eq!(
            decision,
            Decision::redirect(Role::SuperAdmin.landing_path(), false)
        );
    }

    #[test]
    fn test_public_gate_allows_anonymous() {
        assert!(authorize_public(&Session::anonymous()).is_allow());
    }
}
