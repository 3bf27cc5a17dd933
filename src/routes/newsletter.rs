use actix_web::{HttpRequest, HttpResponse, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::NewSubscriber;
use crate::startup::ListingProtection;
use crate::storage::{MemStorage, Subscription};

use super::{ApiError, check_listing_access};

#[derive(Deserialize)]
pub struct NewsletterFormData {
    email: String,
}

impl TryFrom<NewsletterFormData> for NewSubscriber {
    type Error = String;

    fn try_from(form: NewsletterFormData) -> Result<Self, Self::Error> {
        NewSubscriber::parse(form.email)
    }
}

#[derive(Serialize)]
struct Subscribed {
    message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    subscriber: Option<SubscriberSummary>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SubscriberSummary {
    id: u64,
    email: String,
    created_at: DateTime<Utc>,
}

#[tracing::instrument(
    name = "Subscribe to the newsletter",
    skip(body, store),
    fields(subscriber_email = %body.email)
)]
pub async fn post_newsletter(
    body: web::Json<NewsletterFormData>,
    store: web::Data<MemStorage>,
) -> Result<HttpResponse, ApiError> {
    let new_subscriber: NewSubscriber =
        body.into_inner().try_into().map_err(ApiError::ValidationError)?;

    let response = match store.subscribe(&new_subscriber) {
        Subscription::Created(subscriber) => HttpResponse::Created().json(Subscribed {
            message: "Subscribed to newsletter successfully",
            subscriber: Some(SubscriberSummary {
                id: subscriber.id,
                email: subscriber.email,
                created_at: subscriber.created_at,
            }),
        }),
        Subscription::AlreadySubscribed(subscriber) => {
            tracing::info!(subscriber_id = subscriber.id, "Email is already subscribed");
            HttpResponse::Ok().json(Subscribed {
                message: "Email is already subscribed to the newsletter",
                subscriber: None,
            })
        }
    };
    Ok(response)
}

#[tracing::instrument(name = "List newsletter subscribers", skip_all)]
pub async fn get_newsletter(
    request: HttpRequest,
    store: web::Data<MemStorage>,
    protection: web::Data<ListingProtection>,
) -> Result<HttpResponse, ApiError> {
    check_listing_access(&request, &store, &protection).await?;

    Ok(HttpResponse::Ok().json(store.list_newsletter_subscribers()))
}
