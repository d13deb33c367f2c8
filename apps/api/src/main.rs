//! Afterdark marketing-site API server

use axum_helpers::{create_app, create_router, health_router};
use core_config::storage::StorageConfig;
use core_config::tracing::{init_tracing, install_color_eyre};
use database::postgres::{connect_with_retry, run_migrations};
use domain_events::{EventService, PgEventRepository, PublicEventCatalog};
use domain_leads::{LeadService, PgLeadRepository};
use domain_media::MediaService;
use domain_notifications::{LeadMailer, SmtpConfig, SmtpProvider};
use object_store::aws::AmazonS3Builder;
use object_store::memory::InMemory;
use object_store::ObjectStore;
use std::sync::Arc;
use tracing::{info, warn};

mod api;
mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    if config.admin.uses_fallback() {
        warn!("ADMIN_PASSWORD not set; falling back to the built-in admin secret");
    }

    let db = connect_with_retry(config.postgres.clone(), 5).await?;
    run_migrations::<migration::Migrator>(&db).await?;

    let mailer = build_mailer(&config)?;
    let store = build_object_store(&config.storage)?;

    let event_service = EventService::new(
        PgEventRepository::new(db.clone()),
        config.admin.clone(),
    );
    let catalog = PublicEventCatalog::new(
        event_service.repository(),
        domain_events::fallback::sample_events(),
    );
    let lead_service = LeadService::new(PgLeadRepository::new(db.clone()), mailer);
    let media_service = MediaService::new(store, config.storage.clone(), config.admin.clone());

    let routes = api::routes(event_service, catalog, lead_service, media_service);
    let router = create_router::<openapi::ApiDoc>(routes)
        .merge(health_router(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")))
        .merge(api::readiness_router(db.clone()));

    info!("Starting Afterdark API on port {}", config.server.port);

    create_app(router, &config.server, async move {
        info!("Shutting down: closing database connection");
        if let Err(e) = db.close().await {
            warn!("Failed to close database connection cleanly: {}", e);
        }
    })
    .await?;

    info!("Afterdark API shutdown complete");
    Ok(())
}

/// Lead mailer from the email config: SMTP when a host is configured,
/// log-only otherwise.
fn build_mailer(config: &Config) -> eyre::Result<LeadMailer> {
    let Some(smtp) = &config.email.smtp else {
        warn!("SMTP_HOST not set; lead notifications will be logged, not sent");
        return Ok(LeadMailer::log_only(config.email.recipient.clone()));
    };

    let mut smtp_config = SmtpConfig::new(
        smtp.host.clone(),
        smtp.port,
        smtp.from_email.clone(),
        smtp.from_name.clone(),
    )
    .with_tls(smtp.use_tls);

    if let (Some(username), Some(password)) = (&smtp.username, &smtp.password) {
        smtp_config = smtp_config.with_credentials(username.clone(), password.clone());
    }

    let provider = SmtpProvider::new(smtp_config)
        .map_err(|e| eyre::eyre!("Failed to build SMTP transport: {}", e))?;

    info!(host = %smtp.host, "Lead notifications will be sent over SMTP");
    Ok(LeadMailer::new(
        config.email.recipient.clone(),
        Some(Arc::new(provider)),
    ))
}

/// Object store from the storage config: S3 (or an S3-compatible
/// endpoint) when credentials are present, in-memory otherwise.
fn build_object_store(config: &StorageConfig) -> eyre::Result<Arc<dyn ObjectStore>> {
    let Some(s3) = &config.s3 else {
        warn!("S3 credentials not set; uploads go to an in-memory store and vanish on restart");
        return Ok(Arc::new(InMemory::new()));
    };

    let mut builder = AmazonS3Builder::new()
        .with_bucket_name(&config.bucket)
        .with_region(&s3.region)
        .with_access_key_id(&s3.access_key_id)
        .with_secret_access_key(&s3.secret_access_key);

    if let Some(endpoint) = &s3.endpoint {
        builder = builder
            .with_endpoint(endpoint)
            .with_allow_http(endpoint.starts_with("http://"));
    }

    let store = builder
        .build()
        .map_err(|e| eyre::eyre!("Failed to build S3 client: {}", e))?;

    info!(bucket = %config.bucket, "Uploads go to object storage");
    Ok(Arc::new(store))
}
