use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use axum_helpers::{AppError, AuditEvent, AuditOutcome};
use serde_json::json;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::service::{MediaService, UploadedMedia, MAX_UPLOAD_BYTES};

/// Header carrying the shared admin secret on privileged calls
pub const ADMIN_PASSWORD_HEADER: &str = "x-admin-password";

/// OpenAPI documentation for the media API
#[derive(OpenApi)]
#[openapi(
    paths(upload_image),
    components(schemas(UploadedMedia)),
    tags(
        (name = "media", description = "Admin image uploads")
    )
)]
pub struct ApiDoc;

/// Admin upload route, gated on the shared secret
pub fn admin_router(service: MediaService) -> Router {
    Router::new()
        .route("/media", post(upload_image))
        // Multipart framing overhead on top of the image cap
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + 64 * 1024))
        .with_state(Arc::new(service))
}

fn admin_password(headers: &HeaderMap) -> &str {
    headers
        .get(ADMIN_PASSWORD_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

/// Upload an event image. Expects a multipart form with a `file` part.
#[utoipa::path(
    post,
    path = "/admin/media",
    tag = "media",
    request_body(content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Image stored", body = UploadedMedia),
        (status = 400, description = "No file provided"),
        (status = 401, description = "Invalid admin password"),
        (status = 413, description = "File exceeds the 5MB cap"),
        (status = 415, description = "File type not allowed")
    )
)]
async fn upload_image(
    State(service): State<Arc<MediaService>>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let mut file = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() == Some("file") {
            let content_type = field.content_type().unwrap_or_default().to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            file = Some((content_type, data));
            break;
        }
    }

    let Some((content_type, data)) = file else {
        return Err(AppError::BadRequest("No file provided".to_string()));
    };

    let uploaded = service
        .upload_image(admin_password(&headers), &content_type, data)
        .await?;

    AuditEvent::new(
        "media.upload",
        Some(format!("object:{}", uploaded.path)),
        AuditOutcome::Success,
    )
    .with_details(json!({ "content_type": content_type }))
    .log();

    Ok((StatusCode::CREATED, Json(uploaded)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MediaError;
    use axum::body::Body;
    use core_config::admin::AdminConfig;
    use core_config::storage::StorageConfig;
    use http_body_util::BodyExt;
    use object_store::memory::InMemory;
    use tower::ServiceExt;

    const BOUNDARY: &str = "test-boundary";

    fn app() -> Router {
        let service = MediaService::new(
            Arc::new(InMemory::new()),
            StorageConfig::in_memory("event-images", "https://cdn.example.com/event-images"),
            AdminConfig::new("secret"),
        );
        admin_router(service)
    }

    fn multipart_body(field_name: &str, content_type: &str, data: &[u8]) -> Vec<u8> {
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\ncontent-disposition: form-data; name=\"{field_name}\"; \
                 filename=\"upload.bin\"\r\ncontent-type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn upload_request(password: Option<&str>, body: Vec<u8>) -> axum::http::Request<Body> {
        let mut builder = axum::http::Request::post("/media").header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        );
        if let Some(password) = password {
            builder = builder.header(ADMIN_PASSWORD_HEADER, password);
        }
        builder.body(Body::from(body)).unwrap()
    }

    #[tokio::test]
    async fn test_upload_returns_url() {
        let response = app()
            .oneshot(upload_request(
                Some("secret"),
                multipart_body("file", "image/jpeg", &[0xFF, 0xD8, 0xFF]),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(json["url"]
            .as_str()
            .unwrap()
            .starts_with("https://cdn.example.com/event-images/event-"));
    }

    #[tokio::test]
    async fn test_upload_without_password_is_401() {
        let response = app()
            .oneshot(upload_request(
                None,
                multipart_body("file", "image/jpeg", &[0xFF, 0xD8]),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_disallowed_type_is_415() {
        let response = app()
            .oneshot(upload_request(
                Some("secret"),
                multipart_body("file", "image/bmp", &[0x42, 0x4D]),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn test_missing_file_part_is_400() {
        let response = app()
            .oneshot(upload_request(
                Some("secret"),
                multipart_body("avatar", "image/jpeg", &[0xFF, 0xD8]),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_oversized_upload_is_413() {
        let response = app()
            .oneshot(upload_request(
                Some("secret"),
                multipart_body("file", "image/jpeg", &vec![0u8; MAX_UPLOAD_BYTES + 1]),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[test]
    fn test_error_maps_to_service_unavailable_when_bucket_missing() {
        let app_error: AppError = MediaError::BucketMissing("event-images".to_string()).into();
        assert!(matches!(app_error, AppError::ServiceUnavailable(_)));
    }
}
