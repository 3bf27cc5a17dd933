//! In-memory storage for the three record kinds the site collects:
//! - accounts ([`Account`])
//! - contact form submissions ([`ContactSubmission`])
//! - newsletter subscriptions ([`NewsletterSubscriber`])
//!
//! Nothing is persisted. Records are never updated or removed, and every
//! collection hands out ids from its own counter starting at 1.

mod records;

use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use secrecy::Secret;

use crate::domain::{NewContactSubmission, NewSubscriber};

pub use records::{Account, ContactSubmission, NewsletterSubscriber, Subscription};

struct Collection<T> {
    // Ids only grow, so key order is insertion order.
    records: BTreeMap<u64, T>,
    next_id: u64,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            records: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T: Clone> Collection<T> {
    fn insert_with(&mut self, build: impl FnOnce(u64) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let record = build(id);
        self.records.insert(id, record.clone());
        record
    }

    fn get(&self, id: u64) -> Option<&T> {
        self.records.get(&id)
    }

    fn values(&self) -> impl Iterator<Item = &T> {
        self.records.values()
    }
}

#[derive(Default)]
struct Collections {
    accounts: Collection<Account>,
    contacts: Collection<ContactSubmission>,
    subscribers: Collection<NewsletterSubscriber>,
    subscriber_ids_by_email: HashMap<String, u64>,
}

/// Process-lifetime store shared by all request handlers.
///
/// Every operation takes the lock for its whole duration, so operations never
/// interleave even though actix-web runs several workers.
#[derive(Default)]
pub struct MemStorage {
    inner: Mutex<Collections>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn collections(&self) -> MutexGuard<'_, Collections> {
        // No operation can leave the collections half-written, so a
        // poisoned lock is still safe to use.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Stores a new account. Usernames are not checked for uniqueness.
    #[tracing::instrument(name = "Store new account", skip(self, password))]
    pub fn create_account(&self, username: &str, password: Secret<String>) -> Account {
        self.collections().accounts.insert_with(|id| Account {
            id,
            username: username.to_string(),
            password,
        })
    }

    pub fn get_account(&self, id: u64) -> Option<Account> {
        self.collections().accounts.get(id).cloned()
    }

    /// First account, in creation order, with this exact username.
    pub fn get_account_by_username(&self, username: &str) -> Option<Account> {
        self.collections()
            .accounts
            .values()
            .find(|account| account.username == username)
            .cloned()
    }

    #[tracing::instrument(
        name = "Store contact submission",
        skip(self, submission),
        fields(sender_email = %submission.email)
    )]
    pub fn create_contact_submission(
        &self,
        submission: &NewContactSubmission,
    ) -> ContactSubmission {
        let created_at = Utc::now();
        self.collections()
            .contacts
            .insert_with(|id| ContactSubmission {
                id,
                name: submission.name.as_ref().to_string(),
                email: submission.email.as_ref().to_string(),
                subject: submission.subject.as_ref().to_string(),
                message: submission.message.as_ref().to_string(),
                created_at,
            })
    }

    pub fn list_contact_submissions(&self) -> Vec<ContactSubmission> {
        self.collections().contacts.values().cloned().collect()
    }

    /// Returns the existing record untouched when the email is already
    /// subscribed, otherwise stores a new one.
    #[tracing::instrument(
        name = "Subscribe to newsletter",
        skip(self, subscriber),
        fields(subscriber_email = %subscriber.email)
    )]
    pub fn subscribe(&self, subscriber: &NewSubscriber) -> Subscription {
        let mut collections = self.collections();
        let email = subscriber.email.as_ref();

        if let Some(existing) = collections
            .subscriber_ids_by_email
            .get(email)
            .and_then(|id| collections.subscribers.get(*id))
        {
            return Subscription::AlreadySubscribed(existing.clone());
        }

        let created_at = Utc::now();
        let created = collections
            .subscribers
            .insert_with(|id| NewsletterSubscriber {
                id,
                email: email.to_string(),
                created_at,
            });
        collections
            .subscriber_ids_by_email
            .insert(created.email.clone(), created.id);
        Subscription::Created(created)
    }

    pub fn subscribe_to_newsletter(&self, subscriber: &NewSubscriber) -> NewsletterSubscriber {
        self.subscribe(subscriber).into_subscriber()
    }

    /// Exact, case-sensitive match.
    pub fn is_email_subscribed(&self, email: &str) -> bool {
        self.collections().subscriber_ids_by_email.contains_key(email)
    }

    pub fn list_newsletter_subscribers(&self) -> Vec<NewsletterSubscriber> {
        self.collections().subscribers.values().cloned().collect()
    }
}
