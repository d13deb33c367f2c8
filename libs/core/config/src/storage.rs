use crate::{env_optional, env_or_default, ConfigError, FromEnv};

/// Object storage configuration for uploaded event images.
///
/// When `s3` is `None` the application falls back to an in-memory store,
/// which is only useful for local development and tests.
#[derive(Clone, Debug)]
pub struct StorageConfig {
    /// Bucket holding uploaded images
    pub bucket: String,
    /// Base URL under which objects in the bucket are publicly reachable
    pub public_base_url: String,
    pub s3: Option<S3Settings>,
}

#[derive(Clone, Debug)]
pub struct S3Settings {
    pub region: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    /// Custom endpoint for S3-compatible providers (MinIO, Supabase, R2)
    pub endpoint: Option<String>,
}

impl StorageConfig {
    pub fn in_memory(bucket: impl Into<String>, public_base_url: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            public_base_url: public_base_url.into(),
            s3: None,
        }
    }

    /// Public URL for an object stored under `path` in the bucket.
    pub fn public_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.public_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl FromEnv for StorageConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let bucket = env_or_default("STORAGE_BUCKET", "event-images");
        let public_base_url = env_or_default(
            "STORAGE_PUBLIC_URL",
            &format!("http://localhost:9000/{}", bucket),
        );

        let s3 = match (
            env_optional("S3_ACCESS_KEY_ID"),
            env_optional("S3_SECRET_ACCESS_KEY"),
        ) {
            (Some(access_key_id), Some(secret_access_key)) => Some(S3Settings {
                region: env_or_default("S3_REGION", "us-east-1"),
                access_key_id,
                secret_access_key,
                endpoint: env_optional("S3_ENDPOINT"),
            }),
            _ => None,
        };

        Ok(Self {
            bucket,
            public_base_url,
            s3,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_url_joins_cleanly() {
        let config = StorageConfig::in_memory("event-images", "https://cdn.example.com/event-images/");
        assert_eq!(
            config.public_url("event-1700000000000-a1b2c3.jpg"),
            "https://cdn.example.com/event-images/event-1700000000000-a1b2c3.jpg"
        );
    }

    #[test]
    fn test_no_credentials_means_no_s3() {
        temp_env::with_vars(
            [
                ("S3_ACCESS_KEY_ID", None::<&str>),
                ("S3_SECRET_ACCESS_KEY", None::<&str>),
            ],
            || {
                let config = StorageConfig::from_env().unwrap();
                assert!(config.s3.is_none());
            },
        );
    }
}
