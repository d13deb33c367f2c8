use crate::{env_optional, env_or_default, ConfigError, FromEnv};

/// Outbound email configuration.
///
/// `smtp` is `None` when no SMTP_HOST is configured; lead notifications
/// then degrade to a log line instead of failing the request.
#[derive(Clone, Debug)]
pub struct EmailConfig {
    /// Fixed operations mailbox receiving lead notifications
    pub recipient: String,
    pub smtp: Option<SmtpSettings>,
}

/// SMTP transport settings (only present when SMTP_HOST is set).
#[derive(Clone, Debug)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub from_email: String,
    pub from_name: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub use_tls: bool,
}

impl EmailConfig {
    pub fn log_only(recipient: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            smtp: None,
        }
    }
}

impl FromEnv for EmailConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let recipient = env_or_default("LEADS_MAILBOX", "bookings@afterdarkevents.com");

        let smtp = match env_optional("SMTP_HOST") {
            Some(host) => {
                let port = env_or_default("SMTP_PORT", "1025").parse().map_err(|e| {
                    ConfigError::ParseError {
                        key: "SMTP_PORT".to_string(),
                        details: format!("{}", e),
                    }
                })?;

                Some(SmtpSettings {
                    host,
                    port,
                    from_email: env_or_default("SMTP_FROM_EMAIL", "no-reply@afterdarkevents.com"),
                    from_name: env_or_default("SMTP_FROM_NAME", "Afterdark Events"),
                    username: env_optional("SMTP_USERNAME"),
                    password: env_optional("SMTP_PASSWORD"),
                    use_tls: env_or_default("SMTP_USE_TLS", "false") == "true",
                })
            }
            None => None,
        };

        Ok(Self { recipient, smtp })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_smtp_host_means_log_only() {
        temp_env::with_var_unset("SMTP_HOST", || {
            let config = EmailConfig::from_env().unwrap();
            assert!(config.smtp.is_none());
            assert!(!config.recipient.is_empty());
        });
    }

    #[test]
    fn test_smtp_settings_loaded() {
        temp_env::with_vars(
            [
                ("SMTP_HOST", Some("mail.example.com")),
                ("SMTP_PORT", Some("587")),
                ("SMTP_USE_TLS", Some("true")),
            ],
            || {
                let config = EmailConfig::from_env().unwrap();
                let smtp = config.smtp.expect("smtp settings");
                assert_eq!(smtp.host, "mail.example.com");
                assert_eq!(smtp.port, 587);
                assert!(smtp.use_tls);
            },
        );
    }
}
