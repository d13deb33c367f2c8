use axum::{routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize, Clone)]
pub struct HealthResponse {
    pub status: String,
    pub name: String,
    pub version: String,
}

/// Liveness endpoint: `GET /health` returns app name and version.
///
/// Readiness (with real dependency checks) is composed by the app on top
/// of this, since it needs handles to the database and other services.
pub fn health_router(name: &str, version: &str) -> Router {
    let response = HealthResponse {
        status: "ok".to_string(),
        name: name.to_string(),
        version: version.to_string(),
    };

    Router::new().route("/health", get(move || async move { Json(response.clone()) }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_reports_ok() {
        let app = health_router("afterdark-api", "0.1.0");
        let response = app
            .oneshot(
                axum::http::Request::get("/health")
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["name"], "afterdark-api");
    }
}
