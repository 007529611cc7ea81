use std::collections::BTreeMap;

use super::field::{ErrorKey, FormField};

/// Error messages keyed by field, plus an optional form-wide submit error.
///
/// Only failing entries are present; an empty map means the form is clean.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors {
    entries: BTreeMap<ErrorKey, String>,
}

impl FieldErrors {
    /// Creates an empty error map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the message for `key`, replacing any previous one.
    pub fn insert(&mut self, key: impl Into<ErrorKey>, message: impl Into<String>) {
        self.entries.insert(key.into(), message.into());
    }

    /// Returns the message for `key`, if set.
    pub fn get(&self, key: impl Into<ErrorKey>) -> Option<&str> {
        self.entries.get(&key.into()).map(String::as_str)
    }

    /// Returns the message for a field, if set.
    pub fn field(&self, field: FormField) -> Option<&str> {
        self.get(field)
    }

    /// Returns the form-wide submission error, if set.
    pub fn submit(&self) -> Option<&str> {
        self.get(ErrorKey::Submit)
    }

    /// Returns `true` if a message is set for `key`.
    pub fn contains(&self, key: impl Into<ErrorKey>) -> bool {
        self.entries.contains_key(&key.into())
    }

    /// Returns `true` if no messages are set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of messages set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Removes every message.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates over the fields that currently have an error.
    pub fn fields(&self) -> impl Iterator<Item = FormField> + '_ {
        self.entries.keys().filter_map(|k| match k {
            ErrorKey::Field(f) => Some(*f),
            ErrorKey::Submit => None,
        })
    }
}
