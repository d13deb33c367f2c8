use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use axum_helpers::{AuditEvent, AuditOutcome, ValidatedJson};
use domain_notifications::NotificationOutcome;
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

use crate::error::LeadResult;
use crate::models::{ContactInquiry, CrawlHostInquiry, CreateLead, HospitalityInquiry, Lead, NewsletterSignup};
use crate::repository::LeadRepository;
use crate::service::LeadService;

/// OpenAPI documentation for the submissions API
#[derive(OpenApi)]
#[openapi(
    paths(
        submit_lead,
        submit_contact,
        submit_hospitality,
        submit_crawl_host,
        subscribe_newsletter,
    ),
    components(schemas(
        Lead,
        CreateLead,
        ContactInquiry,
        HospitalityInquiry,
        CrawlHostInquiry,
        NewsletterSignup,
        LeadSubmissionResponse,
    )),
    tags(
        (name = "leads", description = "Booking leads, inquiries, and newsletter signups")
    )
)]
pub struct ApiDoc;

/// Booking-lead response: the stored record plus what happened to the
/// notification email.
#[derive(Serialize, ToSchema)]
pub struct LeadSubmissionResponse {
    pub lead: Lead,
    #[schema(value_type = String)]
    pub notification: NotificationOutcome,
}

/// Public submission routes
pub fn router<R: LeadRepository + 'static>(service: LeadService<R>) -> Router {
    Router::new()
        .route("/leads", post(submit_lead))
        .route("/contact", post(submit_contact))
        .route("/hospitality", post(submit_hospitality))
        .route("/crawl-hosts", post(submit_crawl_host))
        .route("/newsletter", post(subscribe_newsletter))
        .with_state(Arc::new(service))
}

/// Submit a guestlist/table booking lead
#[utoipa::path(
    post,
    path = "/leads",
    tag = "leads",
    request_body = CreateLead,
    responses(
        (status = 201, description = "Lead captured", body = LeadSubmissionResponse),
        (status = 400, description = "Validation failed"),
        (status = 503, description = "Leads table not provisioned")
    )
)]
async fn submit_lead<R: LeadRepository>(
    State(service): State<Arc<LeadService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateLead>,
) -> LeadResult<impl IntoResponse> {
    let submission = service.submit_lead(input).await?;

    AuditEvent::new(
        "lead.submit",
        Some(format!("lead:{}", submission.lead.id)),
        AuditOutcome::Success,
    )
    .with_details(json!({
        "intent": submission.lead.intent,
        "venue": submission.lead.venue,
        "notification": submission.notification,
    }))
    .log();

    Ok((
        StatusCode::CREATED,
        Json(LeadSubmissionResponse {
            lead: submission.lead,
            notification: submission.notification,
        }),
    ))
}

/// Submit a contact / partnership inquiry
#[utoipa::path(
    post,
    path = "/contact",
    tag = "leads",
    request_body = ContactInquiry,
    responses(
        (status = 201, description = "Inquiry captured"),
        (status = 400, description = "Validation failed")
    )
)]
async fn submit_contact<R: LeadRepository>(
    State(service): State<Arc<LeadService<R>>>,
    ValidatedJson(input): ValidatedJson<ContactInquiry>,
) -> LeadResult<StatusCode> {
    service.submit_contact(input).await?;
    Ok(StatusCode::CREATED)
}

/// Submit an influencer-hospitality campaign inquiry
#[utoipa::path(
    post,
    path = "/hospitality",
    tag = "leads",
    request_body = HospitalityInquiry,
    responses(
        (status = 201, description = "Inquiry captured"),
        (status = 400, description = "Validation failed")
    )
)]
async fn submit_hospitality<R: LeadRepository>(
    State(service): State<Arc<LeadService<R>>>,
    ValidatedJson(input): ValidatedJson<HospitalityInquiry>,
) -> LeadResult<StatusCode> {
    service.submit_hospitality(input).await?;
    Ok(StatusCode::CREATED)
}

/// Submit a host-a-crawl inquiry
#[utoipa::path(
    post,
    path = "/crawl-hosts",
    tag = "leads",
    request_body = CrawlHostInquiry,
    responses(
        (status = 201, description = "Inquiry captured"),
        (status = 400, description = "Validation failed")
    )
)]
async fn submit_crawl_host<R: LeadRepository>(
    State(service): State<Arc<LeadService<R>>>,
    ValidatedJson(input): ValidatedJson<CrawlHostInquiry>,
) -> LeadResult<StatusCode> {
    service.submit_crawl_host(input).await?;
    Ok(StatusCode::CREATED)
}

/// Subscribe to the newsletter; repeat signups succeed quietly
#[utoipa::path(
    post,
    path = "/newsletter",
    tag = "leads",
    request_body = NewsletterSignup,
    responses(
        (status = 201, description = "Subscribed"),
        (status = 400, description = "Validation failed")
    )
)]
async fn subscribe_newsletter<R: LeadRepository>(
    State(service): State<Arc<LeadService<R>>>,
    ValidatedJson(input): ValidatedJson<NewsletterSignup>,
) -> LeadResult<StatusCode> {
    service.subscribe_newsletter(input).await?;
    Ok(StatusCode::CREATED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryLeadRepository;
    use axum::body::Body;
    use domain_notifications::LeadMailer;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app() -> (Router, Arc<InMemoryLeadRepository>) {
        let service = LeadService::new(
            InMemoryLeadRepository::new(),
            LeadMailer::log_only("bookings@afterdarkevents.com"),
        );
        let repo = service.repository();
        (router(service), repo)
    }

    fn lead_body() -> String {
        json!({
            "name": "Jordan Reyes",
            "phone": "4805551234",
            "email": "jordan@example.com",
            "venue": "Casa Nocturna",
            "date": "2026-03-17",
            "party_size": 6,
            "intent": "guestlist"
        })
        .to_string()
    }

    fn post_json(path: &str, body: String) -> axum::http::Request<Body> {
        axum::http::Request::post(path)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    async fn read_json(response: axum::response::Response) -> serde_json::Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_submit_lead_reports_notification_outcome() {
        let (app, repo) = app();

        let response = app
            .oneshot(post_json("/leads", lead_body()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = read_json(response).await;
        assert_eq!(body["notification"], "logged");
        assert_eq!(body["lead"]["status"], "new");
        assert_eq!(body["lead"]["source_page"], "scottsdale-guestlist");
        assert_eq!(repo.lead_count().await, 1);
    }

    #[tokio::test]
    async fn test_zero_party_size_is_400_and_nothing_stored() {
        let (app, repo) = app();

        let mut payload: serde_json::Value = serde_json::from_str(&lead_body()).unwrap();
        payload["party_size"] = json!(0);

        let response = app
            .oneshot(post_json("/leads", payload.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(repo.lead_count().await, 0);
    }

    #[tokio::test]
    async fn test_fractional_party_size_is_rejected() {
        let (app, repo) = app();

        let mut payload: serde_json::Value = serde_json::from_str(&lead_body()).unwrap();
        payload["party_size"] = json!(2.5);

        let response = app
            .oneshot(post_json("/leads", payload.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(repo.lead_count().await, 0);
    }

    #[tokio::test]
    async fn test_newsletter_double_signup_is_201_both_times() {
        let (app, repo) = app();
        let body = json!({ "email": "vip@example.com" }).to_string();

        for _ in 0..2 {
            let response = app
                .clone()
                .oneshot(post_json("/newsletter", body.clone()))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        assert_eq!(repo.newsletter_emails().await.len(), 1);
    }

    #[tokio::test]
    async fn test_contact_inquiry_defaults_optional_fields() {
        let (app, _repo) = app();

        let response = app
            .oneshot(post_json(
                "/contact",
                json!({
                    "name": "Alex",
                    "email": "alex@example.com",
                    "message": "Partnership idea"
                })
                .to_string(),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_invalid_email_rejected() {
        let (app, _repo) = app();

        let response = app
            .oneshot(post_json(
                "/newsletter",
                json!({ "email": "not-an-email" }).to_string(),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
