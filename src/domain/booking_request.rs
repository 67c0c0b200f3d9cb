use serde::{Deserialize, Serialize};

use super::FormField;

/// The consultation request as it is edited in the form and sent to the booking API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub business: String,
    pub message: String,
    #[serde(rename = "selected_models", default)]
    pub selected_options: Vec<String>,
}

impl BookingRequest {
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Business => &self.business,
            FormField::Message => &self.message,
        }
    }

    pub fn set_field(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Business => &mut self.business,
            FormField::Message => &mut self.message,
        };
        *slot = value;
    }

    /// Empties every text field. The selected options are kept.
    pub fn reset_fields(&mut self) {
        for field in FormField::ALL {
            self.set_field(field, String::new());
        }
    }
}
