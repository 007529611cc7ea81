use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::contact::{ContactForm, MESSAGE_MAX, text_len};
use super::errors::FieldErrors;
use super::field::FormField;

/// Validation errors for contact form fields.
///
/// The `Display` text is the message shown next to the offending input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please tell us your name")]
    EmptyName,
    #[error("We need your email to get back to you")]
    EmptyEmail,
    #[error("That email doesn\u{2019}t look right")]
    InvalidEmail,
    #[error("A phone number helps us reach you quickly")]
    EmptyPhone,
    #[error("Enter a valid phone number")]
    InvalidPhone,
    #[error("Tell us a bit about your request")]
    EmptyMessage,
    #[error("Keep it under {} characters", MESSAGE_MAX)]
    MessageTooLong,
}

// Whitespace classes include U+FEFF, matching browser `\s` and `trim()`.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s\x{FEFF}]+@[^\s\x{FEFF}]+\.[^\s\x{FEFF}]+$").expect("valid hardcoded regex")
});

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9+\-\s\x{FEFF}()]{7,20}$").expect("valid hardcoded regex")
});

fn is_blank(value: &str) -> bool {
    value
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .is_empty()
}

/// Validates a name: must contain something other than whitespace.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if is_blank(name) {
        Err(ValidationError::EmptyName)
    } else {
        Ok(())
    }
}

/// Validates an email: non-blank, shaped like `x@y.z` with no whitespace.
///
/// Deliberately permissive; this is a presence-of-at-and-dot check.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if is_blank(email) {
        Err(ValidationError::EmptyEmail)
    } else if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

/// Validates a phone number: 7 to 20 of digits, `+`, `-`, whitespace and parentheses.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if is_blank(phone) {
        Err(ValidationError::EmptyPhone)
    } else if PHONE_RE.is_match(phone) {
        Ok(())
    } else {
        Err(ValidationError::InvalidPhone)
    }
}

/// Validates a message: non-blank and at most [`MESSAGE_MAX`] UTF-16 units.
pub fn validate_message(message: &str) -> Result<(), ValidationError> {
    if is_blank(message) {
        Err(ValidationError::EmptyMessage)
    } else if text_len(message) > MESSAGE_MAX {
        Err(ValidationError::MessageTooLong)
    } else {
        Ok(())
    }
}

/// Validates a single field of `form`.
pub fn validate_field(form: &ContactForm, field: FormField) -> Result<(), ValidationError> {
    let value = form.get(field);
    match field {
        FormField::Name => validate_name(value),
        FormField::Email => validate_email(value),
        FormField::Phone => validate_phone(value),
        FormField::Message => validate_message(value),
    }
}

/// Validates every field and collects all failures.
///
/// No short-circuiting: each field is checked and reported independently.
pub fn validate(form: &ContactForm) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for field in FormField::all() {
        if let Err(e) = validate_field(form, *field) {
            errors.insert(*field, e.to_string());
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Jane".into(),
            email: "jane@x.com".into(),
            phone: "1234567".into(),
            message: "Hello".into(),
        }
    }

    // --- validate_name ---

    #[test]
    fn name_simple() {
        assert_eq!(validate_name("Jane"), Ok(()));
    }

    #[test]
    fn name_blank() {
        assert_eq!(validate_name("   "), Err(ValidationError::EmptyName));
        assert_eq!(validate_name(""), Err(ValidationError::EmptyName));
    }

    // --- validate_email ---

    #[test]
    fn email_minimal() {
        assert_eq!(validate_email("a@b.co"), Ok(()));
    }

    #[test]
    fn email_blank() {
        assert_eq!(validate_email(" \t"), Err(ValidationError::EmptyEmail));
    }

    #[test]
    fn email_missing_at() {
        assert_eq!(validate_email("jane.x.com"), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn email_missing_dot() {
        assert_eq!(validate_email("jane@xcom"), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn email_inner_space() {
        assert_eq!(
            validate_email("jane doe@x.com"),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn email_surrounding_space_is_not_trimmed() {
        assert_eq!(validate_email(" a@b.co"), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn email_messages() {
        assert_eq!(
            ValidationError::EmptyEmail.to_string(),
            "We need your email to get back to you"
        );
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "That email doesn\u{2019}t look right"
        );
    }

    // --- validate_phone ---

    #[test]
    fn phone_formatted() {
        assert_eq!(validate_phone("+1 (555) 123-4567"), Ok(()));
    }

    #[test]
    fn phone_letters() {
        assert_eq!(validate_phone("abc"), Err(ValidationError::InvalidPhone));
    }

    #[test]
    fn phone_blank() {
        assert_eq!(validate_phone("  "), Err(ValidationError::EmptyPhone));
    }

    #[test]
    fn phone_length_bounds() {
        assert_eq!(validate_phone("123456"), Err(ValidationError::InvalidPhone));
        assert_eq!(validate_phone("1234567"), Ok(()));
        assert_eq!(validate_phone(&"1".repeat(20)), Ok(()));
        assert_eq!(
            validate_phone(&"1".repeat(21)),
            Err(ValidationError::InvalidPhone)
        );
    }

    #[test]
    fn phone_non_ascii_digits_rejected() {
        assert_eq!(
            validate_phone("١٢٣٤٥٦٧"),
            Err(ValidationError::InvalidPhone)
        );
    }

    // --- validate_message ---

    #[test]
    fn message_exactly_max() {
        assert_eq!(validate_message(&"a".repeat(MESSAGE_MAX)), Ok(()));
    }

    #[test]
    fn message_over_max() {
        assert_eq!(
            validate_message(&"a".repeat(MESSAGE_MAX + 1)),
            Err(ValidationError::MessageTooLong)
        );
        assert_eq!(
            ValidationError::MessageTooLong.to_string(),
            "Keep it under 500 characters"
        );
    }

    #[test]
    fn message_astral_chars_count_twice() {
        assert_eq!(
            validate_message(&"\u{1F600}".repeat(300)),
            Err(ValidationError::MessageTooLong)
        );
        assert_eq!(validate_message(&"\u{1F600}".repeat(250)), Ok(()));
    }

    #[test]
    fn byte_order_mark_is_blank() {
        assert_eq!(validate_name("\u{FEFF}"), Err(ValidationError::EmptyName));
        assert_eq!(validate_email(" \u{FEFF} "), Err(ValidationError::EmptyEmail));
        assert_eq!(
            validate_email("jane\u{FEFF}@x.com"),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(validate_phone("\u{FEFF}1234567"), Ok(()));
    }

    #[test]
    fn message_blank() {
        assert_eq!(validate_message("\n\n"), Err(ValidationError::EmptyMessage));
    }

    // --- validate ---

    #[test]
    fn valid_form_has_no_errors() {
        assert!(validate(&valid_form()).is_empty());
    }

    #[test]
    fn empty_name_reports_only_name() {
        let form = ContactForm {
            name: String::new(),
            ..valid_form()
        };
        let errors = validate(&form);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.field(FormField::Name), Some("Please tell us your name"));
    }

    #[test]
    fn empty_form_reports_every_field() {
        let errors = validate(&ContactForm::default());
        let fields: Vec<FormField> = errors.fields().collect();
        assert_eq!(fields, FormField::all().to_vec());
        assert_eq!(errors.submit(), None);
    }

    #[test]
    fn failures_are_reported_together() {
        let form = ContactForm {
            name: "Jane".into(),
            email: "nope".into(),
            phone: "abc".into(),
            message: String::new(),
        };
        let errors = validate(&form);
        assert_eq!(errors.field(FormField::Email), Some("That email doesn\u{2019}t look right"));
        assert_eq!(errors.field(FormField::Phone), Some("Enter a valid phone number"));
        assert_eq!(
            errors.field(FormField::Message),
            Some("Tell us a bit about your request")
        );
        assert_eq!(errors.field(FormField::Name), None);
    }

    #[quickcheck]
    fn blank_fields_are_exactly_the_reported_empties(blank: Vec<bool>, pad: u8) -> bool {
        let ws = " ".repeat(usize::from(pad % 4));
        let mut form = valid_form();
        let mut expected = Vec::new();
        for (field, is_blank) in FormField::all().iter().zip(blank.iter()) {
            if *is_blank {
                form.set(*field, ws.clone());
                expected.push(*field);
            }
        }
        let reported: Vec<FormField> = validate(&form).fields().collect();
        reported == expected
    }

    #[quickcheck]
    fn email_without_at_is_rejected(s: String) -> TestResult {
        let s = s.replace('@', "");
        if is_blank(&s) {
            return TestResult::discard();
        }
        TestResult::from_bool(validate_email(&s) == Err(ValidationError::InvalidEmail))
    }

    #[quickcheck]
    fn email_shape_is_accepted(local: String, domain: String, tld: String) -> TestResult {
        let clean = |s: String| -> String {
            s.chars()
                .filter(|c| !c.is_whitespace() && *c != '\u{FEFF}')
                .collect()
        };
        let (local, domain, tld) = (clean(local), clean(domain), clean(tld));
        if local.is_empty() || domain.is_empty() || tld.is_empty() {
            return TestResult::discard();
        }
        let email = format!("{local}@{domain}.{tld}");
        TestResult::from_bool(validate_email(&email).is_ok())
    }

    #[quickcheck]
    fn phone_with_foreign_char_is_rejected(digits: u32, ch: char) -> TestResult {
        if ch.is_ascii_digit() || "+-()\u{FEFF}".contains(ch) || ch.is_whitespace() {
            return TestResult::discard();
        }
        let phone = format!("{:07}{ch}", digits % 10_000_000);
        TestResult::from_bool(validate_phone(&phone) == Err(ValidationError::InvalidPhone))
    }

    #[quickcheck]
    fn phone_length_outside_bounds_is_rejected(len: u8) -> TestResult {
        let len = usize::from(len % 40) + 1;
        if (7..=20).contains(&len) {
            return TestResult::discard();
        }
        TestResult::from_bool(validate_phone(&"5".repeat(len)).is_err())
    }

    #[quickcheck]
    fn message_over_max_is_rejected(extra: u8) -> bool {
        let len = MESSAGE_MAX + 1 + usize::from(extra);
        validate_message(&"m".repeat(len)) == Err(ValidationError::MessageTooLong)
    }
}
