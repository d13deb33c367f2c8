//! Route composition for the marketing-site API

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use database::postgres::DatabaseConnection;
use domain_events::{EventService, PgEventRepository, PublicEventCatalog};
use domain_leads::{LeadService, PgLeadRepository};
use domain_media::MediaService;
use serde_json::json;

/// Public routes under `/api` plus admin routes under `/api/admin`.
pub fn routes(
    event_service: EventService<PgEventRepository>,
    catalog: PublicEventCatalog<PgEventRepository>,
    lead_service: LeadService<PgLeadRepository>,
    media_service: MediaService,
) -> Router {
    let public = domain_events::handlers::public_router(catalog)
        .merge(domain_leads::handlers::router(lead_service));

    let admin = domain_events::handlers::admin_router(event_service)
        .merge(domain_media::handlers::admin_router(media_service));

    Router::new()
        .nest("/api", public)
        .nest("/api/admin", admin)
}

/// Readiness endpoint: verifies the database answers a ping.
pub fn readiness_router(db: DatabaseConnection) -> Router {
    Router::new().route("/ready", get(ready)).with_state(db)
}

async fn ready(State(db): State<DatabaseConnection>) -> (StatusCode, Json<serde_json::Value>) {
    match db.ping().await {
        Ok(()) => (StatusCode::OK, Json(json!({ "status": "ready" }))),
        Err(e) => {
            tracing::warn!("Readiness check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "unavailable" })),
            )
        }
    }
}
