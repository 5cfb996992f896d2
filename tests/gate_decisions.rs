use anyhow::Result;
use serde_json::json;
use uuid::Uuid;

use oredash_core::{authorize, Decision, Role, Session, UserIdentity};

fn identity() -> UserIdentity {
    UserIdentity::new(Uuid::new_v4(), "Terra Vein", "terra@example.com")
}

#[test]
fn resolving_session_holds_for_every_role_set() {
    // resolution pending wins over everything else
    let session = Session::resolving();
    let role_sets: [&[Role]; 4] = [
        &[],
        &[Role::SuperAdmin],
        &[Role::SuperAdmin, Role::OrgAdmin],
        &Role::ALL,
    ];

    for allowed in role_sets {
        assert!(
            authorize(&session, allowed, "/login").is_pending(),
            "resolving session must stay pending for allow-list {allowed:?}"
        );
    }
}

#[test]
fn anonymous_session_redirects_to_fallback_with_origin() {
    let session = Session::anonymous();

    let decision = authorize(&session, &[Role::SuperAdmin], "/login");
    assert_eq!(
        decision,
        Decision::redirect("/login", true),
        "anonymous users go to the fallback and come back after sign-in"
    );
}

#[test]
fn wrong_role_redirects_to_own_landing_without_origin() {
    let session = Session::authenticated(identity(), Role::OrgMiner);

    let decision = authorize(&session, &[Role::SuperAdmin, Role::OrgAdmin], "/login");
    assert_eq!(
        decision,
        Decision::redirect(Role::OrgMiner.landing_path(), false),
        "wrong-role redirects must not loop back to the unauthorized page"
    );
}

#[test]
fn allowed_role_renders_the_route() {
    for role in [Role::SuperAdmin, Role::OrgAdmin] {
        let session = Session::authenticated(identity(), role);
        assert!(
            authorize(&session, &[Role::SuperAdmin, Role::OrgAdmin], "/login").is_allow(),
            "{role} is in the allow-list and must pass"
        );
    }
}

#[test]
fn empty_allow_list_admits_any_signed_in_role() {
    for role in Role::ALL {
        let session = Session::authenticated(identity(), role);
        assert!(
            authorize(&session, &[], "/login").is_allow(),
            "{role} must pass an any-authenticated route"
        );
    }
}

#[test]
fn decisions_are_idempotent() {
    let sessions = [
        Session::resolving(),
        Session::anonymous(),
        Session::authenticated(identity(), Role::OrgMiner),
    ];

    for session in sessions {
        let first = authorize(&session, &[Role::SuperAdmin], "/login");
        let second = authorize(&session, &[Role::SuperAdmin], "/login");
        assert_eq!(first, second, "same snapshot must yield the same decision");
    }
}

#[test]
fn landing_paths_are_total_and_distinct() {
    let mut seen = std::collections::HashSet::new();
    for role in Role::ALL {
        let path = role.landing_path();
        assert!(path.starts_with('/'), "landing path for {role} must be absolute");
        assert!(seen.insert(path), "landing path for {role} collides with another tier");
    }
}

#[test]
fn redirect_decision_serializes_for_the_router() -> Result<()> {
    // The front-end router consumes this shape; the tag names are contract.
    let decision = Decision::redirect("/login", true);

    let value = serde_json::to_value(&decision)?;
    assert_eq!(
        value,
        json!({ "kind": "redirect", "path": "/login", "preserve_origin": true })
    );

    assert_eq!(serde_json::to_value(Decision::Allow)?, json!({ "kind": "allow" }));
    Ok(())
}
