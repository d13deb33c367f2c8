use crate::{env_optional, ConfigError, FromEnv};

/// Fallback admin secret used when ADMIN_PASSWORD is not configured.
/// Deploying with this unchanged is a known liability; a warning is
/// logged at startup when it is active.
const FALLBACK_SECRET: &str = "afterdark2026";

/// Shared-secret gate for privileged admin operations.
///
/// Every mutating call (event create/update/delete, image upload) is
/// checked against this secret by direct equality before any store
/// access. There are no sessions, token expiry, or rate limiting.
#[derive(Clone, Debug)]
pub struct AdminConfig {
    secret: String,
    from_fallback: bool,
}

impl AdminConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            from_fallback: false,
        }
    }

    /// Whether the supplied password matches the configured secret.
    pub fn verify(&self, password: &str) -> bool {
        password == self.secret
    }

    /// True when no ADMIN_PASSWORD was configured and the built-in
    /// fallback is in use.
    pub fn uses_fallback(&self) -> bool {
        self.from_fallback
    }
}

impl FromEnv for AdminConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(match env_optional("ADMIN_PASSWORD") {
            Some(secret) => Self {
                secret,
                from_fallback: false,
            },
            None => Self {
                secret: FALLBACK_SECRET.to_string(),
                from_fallback: true,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_matches_configured_secret() {
        let config = AdminConfig::new("hunter2");
        assert!(config.verify("hunter2"));
        assert!(!config.verify("hunter3"));
        assert!(!config.uses_fallback());
    }

    #[test]
    fn test_fallback_when_env_unset() {
        temp_env::with_var_unset("ADMIN_PASSWORD", || {
            let config = AdminConfig::from_env().unwrap();
            assert!(config.uses_fallback());
            assert!(config.verify(FALLBACK_SECRET));
        });
    }

    #[test]
    fn test_env_secret_overrides_fallback() {
        temp_env::with_var("ADMIN_PASSWORD", Some("s3cret"), || {
            let config = AdminConfig::from_env().unwrap();
            assert!(!config.uses_fallback());
            assert!(config.verify("s3cret"));
            assert!(!config.verify(FALLBACK_SECRET));
        });
    }
}
