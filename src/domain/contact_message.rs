use unicode_segmentation::UnicodeSegmentation;

const MIN_GRAPHEMES: usize = 10;

#[derive(Debug)]
pub struct ContactMessage(String);

impl AsRef<str> for ContactMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl ContactMessage {
    pub fn parse(message: impl ToString) -> Result<Self, String> {
        let message = message.to_string();
        let blank = message.trim().is_empty();
        let too_short = message.graphemes(true).count() < MIN_GRAPHEMES;

        if blank || too_short {
            return Err(format!(
                "Message must be at least {MIN_GRAPHEMES} characters."
            ));
        }
        Ok(Self(message))
    }
}
