use crate::domain::SubscriberEmail;

#[derive(Debug)]
pub struct NewSubscriber {
    pub email: SubscriberEmail,
}

impl NewSubscriber {
    pub fn parse(email: String) -> Result<Self, String> {
        let email = SubscriberEmail::parse(email).map_err(|e| format!("{e} at \"email\""))?;
        Ok(Self { email })
    }
}
