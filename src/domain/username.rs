use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug)]
pub struct Username(String);

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Username {
    pub fn parse(username: impl ToString) -> Result<Self, String> {
        let username = username.to_string();
        let empty = username.trim().is_empty();
        let too_long = username.graphemes(true).count() > 256;
        // Basic auth splits on the first colon.
        let has_colon = username.contains(':');

        if empty || too_long || has_colon {
            Err(format!("`{username}` is not a valid username"))
        } else {
            Ok(Self(username))
        }
    }
}
