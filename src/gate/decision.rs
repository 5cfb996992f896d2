use serde::{Deserialize, Serialize};

/// Outcome of a gate evaluation. The surrounding router maps this onto a UI
/// action: render the children, render a loading placeholder, or navigate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Decision {
    Allow,
    Pending,
    Redirect {
        path: String,
        /// Whether the destination should receive the originating location
        /// so the user can be sent back after signing in. Wrong-role
        /// redirects never set this; looping back to a page the user cannot
        /// see helps nobody.
        preserve_origin: bool,
    },
}

impl Decision {
    pub fn redirect(path: impl Into<String>, preserve_origin: bool) -> Self {
        Decision::Redirect {
            path: path.into(),
            preserve_origin,
        }
    }

    pub fn is_allow(&self) -> bool {
        matches!(self, Decision::Allow)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Decision::Pending)
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, Decision::Redirect { .. })
    }
}
