use actix_web::{HttpRequest, HttpResponse, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::NewContactSubmission;
use crate::startup::ListingProtection;
use crate::storage::MemStorage;

use super::{ApiError, check_listing_access};

#[derive(Deserialize)]
pub struct ContactFormData {
    name: String,
    email: String,
    subject: String,
    message: String,
}

impl TryFrom<ContactFormData> for NewContactSubmission {
    type Error = String;

    fn try_from(form: ContactFormData) -> Result<Self, Self::Error> {
        NewContactSubmission::parse(form.name, form.email, form.subject, form.message)
    }
}

#[derive(Serialize)]
struct ContactCreated {
    message: &'static str,
    submission: SubmissionSummary,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmissionSummary {
    id: u64,
    name: String,
    created_at: DateTime<Utc>,
}

#[tracing::instrument(
    name = "Submit a contact form",
    skip(body, store),
    fields(
        sender_email = %body.email,
        sender_name = %body.name
    )
)]
pub async fn post_contact(
    body: web::Json<ContactFormData>,
    store: web::Data<MemStorage>,
) -> Result<HttpResponse, ApiError> {
    let new_submission: NewContactSubmission =
        body.into_inner().try_into().map_err(ApiError::ValidationError)?;

    let submission = store.create_contact_submission(&new_submission);

    Ok(HttpResponse::Created().json(ContactCreated {
        message: "Contact form submitted successfully",
        submission: SubmissionSummary {
            id: submission.id,
            name: submission.name,
            created_at: submission.created_at,
        },
    }))
}

#[tracing::instrument(name = "List contact submissions", skip_all)]
pub async fn get_contact(
    request: HttpRequest,
    store: web::Data<MemStorage>,
    protection: web::Data<ListingProtection>,
) -> Result<HttpResponse, ApiError> {
    check_listing_access(&request, &store, &protection).await?;

    Ok(HttpResponse::Ok().json(store.list_contact_submissions()))
}
