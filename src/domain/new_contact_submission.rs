use crate::domain::{ContactMessage, ContactName, ContactSubject, SubscriberEmail};

#[derive(Debug)]
pub struct NewContactSubmission {
    pub name: ContactName,
    pub email: SubscriberEmail,
    pub subject: ContactSubject,
    pub message: ContactMessage,
}

impl NewContactSubmission {
    /// Parses every field and reports all failures at once, joined with `"; "`.
    pub fn parse(
        name: String,
        email: String,
        subject: String,
        message: String,
    ) -> Result<Self, String> {
        let name = ContactName::parse(name);
        let email = SubscriberEmail::parse(email);
        let subject = ContactSubject::parse(subject);
        let message = ContactMessage::parse(message);

        match (name, email, subject, message) {
            (Ok(name), Ok(email), Ok(subject), Ok(message)) => Ok(Self {
                name,
                email,
                subject,
                message,
            }),
            (name, email, subject, message) => {
                let errors: Vec<String> = [
                    ("name", name.err()),
                    ("email", email.err()),
                    ("subject", subject.err()),
                    ("message", message.err()),
                ]
                .into_iter()
                .filter_map(|(field, e)| e.map(|e| format!("{e} at \"{field}\"")))
                .collect();
                Err(errors.join("; "))
            }
        }
    }
}
