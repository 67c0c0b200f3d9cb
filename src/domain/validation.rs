use std::collections::BTreeMap;

use super::{BookingEmail, BookingMessage, BookingName, BookingRequest, ErrorField};

/// Field-level errors. A field without an entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult(BTreeMap<ErrorField, String>);

impl ValidationResult {
    pub fn is_clean(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: ErrorField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: ErrorField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn insert(&mut self, field: ErrorField, error: impl Into<String>) {
        self.0.insert(field, error.into());
    }

    pub fn remove(&mut self, field: ErrorField) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.is_clean()
    }

    pub fn fields(&self) -> impl Iterator<Item = ErrorField> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ErrorField, &str)> {
        self.0.iter().map(|(field, error)| (*field, error.as_str()))
    }
}

/// Checks name, email and message. `business` and the selected options never fail.
pub fn validate(request: &BookingRequest) -> ValidationResult {
    let mut result = ValidationResult::default();
    if let Err(e) = BookingName::parse(&request.name) {
        result.insert(ErrorField::Name, e);
    }
    if let Err(e) = BookingEmail::parse(&request.email) {
        result.insert(ErrorField::Email, e);
    }
    if let Err(e) = BookingMessage::parse(&request.message) {
        result.insert(ErrorField::Message, e);
    }
    result
}
