//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the marketing-site API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Afterdark Events API",
        version = "0.1.0",
        description = "Event calendar, booking leads, inquiries, and image uploads \
                       backing the Afterdark marketing site",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api", api = domain_events::handlers::ApiDoc),
        (path = "/api", api = domain_leads::handlers::ApiDoc),
        (path = "/api", api = domain_media::handlers::ApiDoc)
    ),
    tags(
        (name = "events", description = "Public event calendar and admin CRUD"),
        (name = "leads", description = "Booking leads, inquiries, and newsletter signups"),
        (name = "media", description = "Admin image uploads")
    )
)]
pub struct ApiDoc;
