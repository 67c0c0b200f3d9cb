use super::form_text;

const MIN_LENGTH: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingMessage(String);

impl AsRef<str> for BookingMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl BookingMessage {
    pub const ERROR: &'static str = "Message must be at least 10 characters long";

    pub fn parse(s: &str) -> Result<Self, String> {
        let trimmed = form_text::trim(s);
        if form_text::trimmed_len(s) < MIN_LENGTH {
            return Err(Self::ERROR.to_string());
        }
        Ok(Self(trimmed.to_string()))
    }
}
