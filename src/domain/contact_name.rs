use unicode_segmentation::UnicodeSegmentation;

const MIN_GRAPHEMES: usize = 2;

#[derive(Debug)]
pub struct ContactName(String);

impl AsRef<str> for ContactName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl ContactName {
    /// Kept exactly as sent. Only a blank or too short name is rejected.
    pub fn parse(name: impl ToString) -> Result<Self, String> {
        let name = name.to_string();
        let blank = name.trim().is_empty();
        let too_short = name.graphemes(true).count() < MIN_GRAPHEMES;

        if blank || too_short {
            Err(format!("Name must be at least {MIN_GRAPHEMES} characters."))
        } else {
            Ok(Self(name))
        }
    }
}
