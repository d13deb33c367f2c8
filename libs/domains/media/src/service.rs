use bytes::Bytes;
use chrono::Utc;
use core_config::admin::AdminConfig;
use core_config::storage::StorageConfig;
use object_store::path::Path;
use object_store::{Attribute, AttributeValue, Attributes, ObjectStore, PutMode, PutOptions};
use rand::distr::Alphanumeric;
use rand::RngExt;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::{MediaError, MediaResult};

/// MIME types accepted for event images, with their canonical extension
pub const ALLOWED_IMAGE_TYPES: [(&str, &str); 4] = [
    ("image/jpeg", "jpg"),
    ("image/png", "png"),
    ("image/webp", "webp"),
    ("image/gif", "gif"),
];

/// Upload size cap: 5MB
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Browsers may re-serve a stale image for up to an hour
const CACHE_CONTROL: &str = "max-age=3600";

/// A stored upload: the object path inside the bucket and the public URL
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UploadedMedia {
    pub path: String,
    pub url: String,
}

/// Service layer for image uploads.
///
/// The admin secret is checked before validation or storage; rejected
/// uploads never reach the object store. Object names are generated, so
/// the caller's filename only matters for logging.
#[derive(Clone)]
pub struct MediaService {
    store: Arc<dyn ObjectStore>,
    config: StorageConfig,
    admin: AdminConfig,
}

impl MediaService {
    pub fn new(store: Arc<dyn ObjectStore>, config: StorageConfig, admin: AdminConfig) -> Self {
        Self {
            store,
            config,
            admin,
        }
    }

    fn authorize(&self, password: &str) -> MediaResult<()> {
        if self.admin.verify(password) {
            Ok(())
        } else {
            Err(MediaError::Unauthorized)
        }
    }

    /// Validate and store an uploaded image, returning its public URL.
    pub async fn upload_image(
        &self,
        password: &str,
        content_type: &str,
        data: Bytes,
    ) -> MediaResult<UploadedMedia> {
        self.authorize(password)?;

        let extension = allowed_extension(content_type)
            .ok_or_else(|| MediaError::InvalidFileType(content_type.to_string()))?;

        if data.len() > MAX_UPLOAD_BYTES {
            return Err(MediaError::FileTooLarge(data.len()));
        }
        if data.is_empty() {
            return Err(MediaError::MissingFile);
        }

        let name = object_name(extension);
        let location = Path::from(name.clone());

        let options = PutOptions {
            // Names are random; a collision should fail loudly, not overwrite
            mode: PutMode::Create,
            attributes: Attributes::from_iter([(
                Attribute::CacheControl,
                AttributeValue::from(CACHE_CONTROL),
            )]),
            ..Default::default()
        };

        self.store
            .put_opts(&location, data.into(), options)
            .await
            .map_err(|e| self.classify(e))?;

        tracing::info!(object = %name, "Stored uploaded image");

        Ok(UploadedMedia {
            url: self.config.public_url(&name),
            path: name,
        })
    }

    fn classify(&self, err: object_store::Error) -> MediaError {
        let message = err.to_string();
        if message.contains("NoSuchBucket") || message.contains("bucket does not exist") {
            MediaError::BucketMissing(self.config.bucket.clone())
        } else {
            MediaError::Upstream(message)
        }
    }
}

fn allowed_extension(content_type: &str) -> Option<&'static str> {
    ALLOWED_IMAGE_TYPES
        .iter()
        .find(|(mime, _)| *mime == content_type)
        .map(|(_, ext)| *ext)
}

/// `event-<unix millis>-<6 random alphanumerics>.<ext>`
fn object_name(extension: &str) -> String {
    let suffix: String = rand::rng()
        .sample_iter(Alphanumeric)
        .take(6)
        .map(char::from)
        .collect();

    format!(
        "event-{}-{}.{}",
        Utc::now().timestamp_millis(),
        suffix.to_lowercase(),
        extension
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use object_store::memory::InMemory;

    fn service(store: Arc<InMemory>) -> MediaService {
        MediaService::new(
            store,
            StorageConfig::in_memory("event-images", "https://cdn.example.com/event-images"),
            AdminConfig::new("secret"),
        )
    }

    async fn object_count(store: &InMemory) -> usize {
        use futures::TryStreamExt;
        store.list(None).try_collect::<Vec<_>>().await.unwrap().len()
    }

    #[tokio::test]
    async fn test_upload_returns_public_url() {
        let store = Arc::new(InMemory::new());
        let media = service(Arc::clone(&store));

        let uploaded = media
            .upload_image("secret", "image/jpeg", Bytes::from_static(&[0xFF, 0xD8]))
            .await
            .unwrap();

        assert!(uploaded.path.starts_with("event-"));
        assert!(uploaded.path.ends_with(".jpg"));
        assert_eq!(
            uploaded.url,
            format!("https://cdn.example.com/event-images/{}", uploaded.path)
        );
        assert_eq!(object_count(&store).await, 1);
    }

    #[tokio::test]
    async fn test_wrong_password_stores_nothing() {
        let store = Arc::new(InMemory::new());
        let media = service(Arc::clone(&store));

        let result = media
            .upload_image("wrong", "image/jpeg", Bytes::from_static(&[0xFF, 0xD8]))
            .await;

        assert!(matches!(result, Err(MediaError::Unauthorized)));
        assert_eq!(object_count(&store).await, 0);
    }

    #[tokio::test]
    async fn test_disallowed_type_rejected_before_storage() {
        let store = Arc::new(InMemory::new());
        let media = service(Arc::clone(&store));

        let result = media
            .upload_image("secret", "image/bmp", Bytes::from_static(&[0x42, 0x4D]))
            .await;

        assert!(matches!(result, Err(MediaError::InvalidFileType(_))));
        assert_eq!(object_count(&store).await, 0);
    }

    #[tokio::test]
    async fn test_oversized_upload_rejected_before_storage() {
        let store = Arc::new(InMemory::new());
        let media = service(Arc::clone(&store));

        let oversized = Bytes::from(vec![0u8; MAX_UPLOAD_BYTES + 1]);
        let result = media.upload_image("secret", "image/jpeg", oversized).await;

        assert!(matches!(result, Err(MediaError::FileTooLarge(_))));
        assert_eq!(object_count(&store).await, 0);
    }

    #[tokio::test]
    async fn test_upload_at_cap_is_accepted() {
        let store = Arc::new(InMemory::new());
        let media = service(Arc::clone(&store));

        let at_cap = Bytes::from(vec![0u8; MAX_UPLOAD_BYTES]);
        media.upload_image("secret", "image/png", at_cap).await.unwrap();

        assert_eq!(object_count(&store).await, 1);
    }

    #[test]
    fn test_object_names_are_distinct() {
        let first = object_name("jpg");
        let second = object_name("jpg");
        assert_ne!(first, second);
    }
}
