//! Contact form controller: field state, validation, and the submission lifecycle.
//!
//! The controller owns all transient form state. Submission is split into a
//! synchronous [`ContactController::begin_submit`] and
//! [`ContactController::finish_submit`] so an event loop can run the network
//! call elsewhere and stay responsive; [`ContactController::submit`] chains
//! the two for callers that can await in place.

use serde_json::Value;
use tracing::{debug, error, info};

use crate::client::{SubmitError, Submitter};
use crate::model::{ContactForm, ErrorKey, FieldErrors, FormField, MESSAGE_MAX, validate};

/// Banner shown after the endpoint accepts a submission.
pub const SUCCESS_MESSAGE: &str =
    "Thanks \u{2014} your message was sent. We\u{2019}ll reply within 1 business day.";

/// Banner shown after any submission failure.
pub const SUBMIT_FAILED_MESSAGE: &str =
    "Failed to submit. Please check your connection and try again.";

/// Whether a submission is outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
}

/// Owns the contact form state and drives validation and submission.
#[derive(Debug, Clone, Default)]
pub struct ContactController {
    form: ContactForm,
    errors: FieldErrors,
    in_progress: bool,
    success: Option<String>,
}

impl ContactController {
    /// Creates a controller with an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the value of `field`. The message is cut to [`MESSAGE_MAX`] UTF-16 units.
    ///
    /// No validation runs on edit.
    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Recomputes the error map from the current form. Returns `true` if valid.
    ///
    /// The whole map is replaced, including any previous submit error.
    pub fn validate(&mut self) -> bool {
        self.errors = validate(&self.form);
        if !self.errors.is_empty() {
            let failing: Vec<&str> = self.errors.fields().map(|f| f.key()).collect();
            info!(fields = ?failing, "contact form failed validation");
        }
        self.errors.is_empty()
    }

    /// Starts a submission, returning the payload to deliver.
    ///
    /// Returns `None` if a submission is already in flight, or if validation
    /// fails (field errors are then set and nothing should be sent).
    pub fn begin_submit(&mut self) -> Option<ContactForm> {
        if self.in_progress {
            debug!("submit ignored: request already in flight");
            return None;
        }
        self.success = None;
        if !self.validate() {
            return None;
        }
        self.in_progress = true;
        Some(self.form.clone())
    }

    /// Applies the outcome of a submission started with [`Self::begin_submit`].
    pub fn finish_submit(&mut self, result: Result<Value, SubmitError>) {
        self.in_progress = false;
        match result {
            Ok(body) => {
                debug!(response = %body, "contact endpoint accepted submission");
                self.form = ContactForm::default();
                self.errors.clear();
                self.success = Some(SUCCESS_MESSAGE.to_string());
            }
            Err(e) => {
                error!(error = %e, "contact form submission failed");
                self.success = None;
                self.errors.insert(ErrorKey::Submit, SUBMIT_FAILED_MESSAGE);
            }
        }
    }

    /// Validates and delivers the form through `submitter`, awaiting the result.
    ///
    /// Returns `true` if the submission succeeded.
    pub async fn submit<S: Submitter>(&mut self, submitter: &S) -> bool {
        let Some(payload) = self.begin_submit() else {
            return false;
        };
        let result = submitter.submit(&payload).await;
        let ok = result.is_ok();
        self.finish_submit(result);
        ok
    }

    /// Clears all fields, errors, and the success banner. No network activity.
    pub fn reset(&mut self) {
        self.form = ContactForm::default();
        self.errors.clear();
        self.success = None;
    }

    /// Returns the current form values.
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    /// Returns the current error map.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Returns `true` while a submission is outstanding.
    pub fn in_progress(&self) -> bool {
        self.in_progress
    }

    /// Returns the success banner, if the last submission succeeded.
    pub fn success(&self) -> Option<&str> {
        self.success.as_deref()
    }

    /// Returns the current lifecycle state.
    pub fn state(&self) -> SubmissionState {
        if self.in_progress {
            SubmissionState::Submitting
        } else {
            SubmissionState::Idle
        }
    }

    /// Message length in UTF-16 units, for the `n/500` counter.
    pub fn message_len(&self) -> usize {
        self.form.message_len()
    }

    /// Units still available in the message.
    pub fn message_remaining(&self) -> usize {
        MESSAGE_MAX.saturating_sub(self.message_len())
    }
}
