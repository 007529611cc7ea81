use serde::{Deserialize, Serialize};

use super::field::FormField;

/// Maximum message length, in UTF-16 code units (what a browser `maxLength` counts).
pub const MESSAGE_MAX: usize = 500;

/// The contact form payload, submitted as `{name, email, phone, message}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactForm {
    /// Returns the current value of `field`.
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Message => &self.message,
        }
    }

    /// Replaces the value of `field`.
    ///
    /// The message is cut to [`MESSAGE_MAX`] units so the stored value
    /// can never exceed the limit through editing.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Phone => self.phone = value,
            FormField::Message => self.message = truncate_units(value, MESSAGE_MAX),
        }
    }

    /// Returns the message length in UTF-16 code units.
    pub fn message_len(&self) -> usize {
        text_len(&self.message)
    }

    /// Returns `true` if every field is an empty string.
    pub fn is_empty(&self) -> bool {
        FormField::all().iter().all(|f| self.get(*f).is_empty())
    }
}

/// Length of `text` in UTF-16 code units. Astral-plane characters count twice.
pub fn text_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Cuts `value` to at most `max` UTF-16 units, never splitting a character.
fn truncate_units(mut value: String, max: usize) -> String {
    let mut units = 0;
    for (idx, ch) in value.char_indices() {
        units += ch.len_utf16();
        if units > max {
            value.truncate(idx);
            break;
        }
    }
    value
}
