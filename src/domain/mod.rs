mod api_base_url;
mod booking_email;
mod booking_message;
mod booking_name;
mod booking_request;
mod form_field;
mod form_text;
mod option_label;
mod validation;

pub use api_base_url::{ApiBaseUrl, BOOKING_PATH};
pub use booking_email::BookingEmail;
pub use booking_message::BookingMessage;
pub use booking_name::BookingName;
pub use booking_request::BookingRequest;
pub use form_field::{ErrorField, FormField};
pub use option_label::option_label;
pub use validation::{validate, ValidationResult};
