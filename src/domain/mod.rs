mod contact_message;
mod contact_name;
mod contact_subject;
mod new_contact_submission;
mod new_subscriber;
mod subscriber_email;
mod username;

pub use contact_message::ContactMessage;
pub use contact_name::ContactName;
pub use contact_subject::ContactSubject;
pub use new_contact_submission::NewContactSubmission;
pub use new_subscriber::NewSubscriber;
pub use subscriber_email::SubscriberEmail;
pub use username::Username;
