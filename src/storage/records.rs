use chrono::{DateTime, Utc};
use secrecy::Secret;
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct Account {
    pub id: u64,
    pub username: String,
    /// Whatever the caller handed to `create_account`; the authentication
    /// layer only ever passes PHC hashes.
    pub password: Secret<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterSubscriber {
    pub id: u64,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Result of a newsletter signup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subscription {
    Created(NewsletterSubscriber),
    AlreadySubscribed(NewsletterSubscriber),
}

impl Subscription {
    pub fn is_new(&self) -> bool {
        matches!(self, Self::Created(_))
    }

    pub fn subscriber(&self) -> &NewsletterSubscriber {
        match self {
            Self::Created(s) | Self::AlreadySubscribed(s) => s,
        }
    }

    pub fn into_subscriber(self) -> NewsletterSubscriber {
        match self {
            Self::Created(s) | Self::AlreadySubscribed(s) => s,
        }
    }
}
