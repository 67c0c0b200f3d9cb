use super::form_text;

const MIN_LENGTH: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingName(String);

impl AsRef<str> for BookingName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl BookingName {
    pub const ERROR: &'static str = "Name must be at least 2 characters long";

    pub fn parse(s: &str) -> Result<Self, String> {
        let trimmed = form_text::trim(s);
        if form_text::trimmed_len(s) < MIN_LENGTH {
            return Err(Self::ERROR.to_string());
        }
        Ok(Self(trimmed.to_string()))
    }
}
