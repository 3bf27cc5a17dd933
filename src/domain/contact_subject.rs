#[derive(Debug)]
pub struct ContactSubject(String);

impl AsRef<str> for ContactSubject {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl ContactSubject {
    pub fn parse(subject: impl ToString) -> Result<Self, String> {
        let subject = subject.to_string();
        if subject.trim().is_empty() {
            return Err("Please select a subject.".to_string());
        }
        Ok(Self(subject))
    }
}
