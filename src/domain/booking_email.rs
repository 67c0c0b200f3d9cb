use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use super::form_text;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingEmail(String);

impl AsRef<str> for BookingEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookingEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl BookingEmail {
    pub const ERROR: &'static str = "Please enter a valid email address";

    /// The pattern is matched against the raw input, so surrounding whitespace is an error.
    pub fn parse(s: &str) -> Result<Self, String> {
        if form_text::trim(s).is_empty() || !EMAIL_PATTERN.is_match(s) {
            return Err(Self::ERROR.to_string());
        }
        Ok(Self(s.to_string()))
    }
}
