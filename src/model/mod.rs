mod contact;
mod errors;
mod field;
mod validation;

pub use contact::{ContactForm, MESSAGE_MAX, text_len};
pub use errors::FieldErrors;
pub use field::{ErrorKey, FormField};
pub use validation::{
    ValidationError, validate, validate_email, validate_field, validate_message, validate_name,
    validate_phone,
};
