use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four editable inputs of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Name,
    Email,
    Phone,
    Message,
}

static ALL_FIELDS: &[FormField] = &[
    FormField::Name,
    FormField::Email,
    FormField::Phone,
    FormField::Message,
];

impl FormField {
    /// Returns the JSON key this field is submitted under.
    pub fn key(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::Message => "message",
        }
    }

    /// Returns all fields in display order.
    pub fn all() -> &'static [FormField] {
        ALL_FIELDS
    }
}

#[mutants::skip]
impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Key into the error map: a field, or the form-wide submission slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ErrorKey {
    Field(FormField),
    Submit,
}

impl From<FormField> for ErrorKey {
    fn from(field: FormField) -> Self {
        ErrorKey::Field(field)
    }
}
