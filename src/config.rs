use crate::errors::{AppError, AppResult};
use crate::models::role::paths;

/// Gate paths, overridable from the environment so deployments can move the
/// auth pages without recompiling.
#[derive(Debug, Clone)]
pub struct GateConfig {
    pub login_path: String,
    pub recovery_path: String,
}

impl GateConfig {
    pub fn from_env() -> AppResult<Self> {
        let login_path =
            std::env::var("DASH_LOGIN_PATH").unwrap_or_else(|_| paths::LOGIN.to_string());
        let recovery_path =
            std::env::var("DASH_RECOVERY_PATH").unwrap_or_else(|_| paths::RECOVERY.to_string());

        for (name, value) in [
            ("DASH_LOGIN_PATH", &login_path),
            ("DASH_RECOVERY_PATH", &recovery_path),
        ] {
            if !value.starts_with('/') {
                return Err(AppError::configuration(format!(
                    "{name} must be an absolute path, got {value:?}"
                )));
            }
        }

        Ok(Self {
            login_path,
            recovery_path,
        })
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            login_path: paths::LOGIN.to_string(),
            recovery_path: paths::RECOVERY.to_string(),
        }
    }
}
