use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity snapshot for a signed-in dashboard user, as observed by the UI.
///
/// Credential material never reaches this type; the external authentication
/// context resolves it and hands over only what the shell needs to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl UserIdentity {
    pub fn new(id: Uuid, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Stand-in identity for the navigation shell when no user is supplied.
    pub fn placeholder() -> Self {
        Self {
            id: Uuid::nil(),
            name: "Guest".to_string(),
            email: "guest@oredash.local".to_string(),
        }
    }
}
