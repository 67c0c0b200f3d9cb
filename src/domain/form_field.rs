use std::fmt;

/// An editable text field of the booking form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Business,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Business,
        FormField::Message,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Business => "business",
            FormField::Message => "message",
        }
    }

    /// The error slot an edit of this field clears. `business` never carries an error.
    pub fn error_field(&self) -> Option<ErrorField> {
        match self {
            FormField::Name => Some(ErrorField::Name),
            FormField::Email => Some(ErrorField::Email),
            FormField::Business => None,
            FormField::Message => Some(ErrorField::Message),
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A key of a `ValidationResult`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorField {
    Name,
    Email,
    Message,
    General,
}

impl ErrorField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorField::Name => "name",
            ErrorField::Email => "email",
            ErrorField::Message => "message",
            ErrorField::General => "general",
        }
    }
}

impl fmt::Display for ErrorField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
