//! Contact form validation rules
//!
//! Validation is a pure function over the form field values. Each field is
//! checked independently and the first matching rule wins, so at most one
//! message is reported per field. Nothing here touches the UI; displaying
//! the messages is the submit handler's job.

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum trimmed message length accepted at submit time
pub const MESSAGE_LIMIT: usize = 500;

/// Limit shown by the live character counter
///
/// Intentionally distinct from [`MESSAGE_LIMIT`]; the counter warns early
/// while the validator enforces the larger bound.
pub const COUNTER_LIMIT: usize = 300;

static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email shape pattern is valid")
});

static SPECIAL_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9@._-]").expect("special chars pattern is valid"));

/// Raw values collected from the contact form at submit time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub contact_email: String,
    pub contact_message: String,
}

/// Per-field error messages from one validation pass
///
/// Empty strings mean the field passed. Recomputed on every submit attempt;
/// never accumulated across attempts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub email_error: String,
    pub message_error: String,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.email_error.is_empty() && self.message_error.is_empty()
    }
}

/// String length after removing leading and trailing whitespace
pub fn trimmed_len(value: &str) -> usize {
    value.trim().chars().count()
}

/// Validate the contact form fields
///
/// Email rules, in order: must not trim to empty, must match a basic
/// `local@domain.tld` shape, must not contain characters outside
/// `[A-Za-z0-9@._-]`. Message rules, in order: must not trim to empty, must
/// not contain special characters, trimmed length must not exceed
/// [`MESSAGE_LIMIT`].
pub fn validate(fields: &FormFields) -> ValidationReport {
    let mut report = ValidationReport::default();

    let email = fields.contact_email.as_str();
    if email.trim().is_empty() {
        report.email_error = "Please provide an email!".to_string();
    } else if !EMAIL_SHAPE.is_match(email) {
        report.email_error = "Please provide a valid email!".to_string();
    } else if SPECIAL_CHARS.is_match(email) {
        report.email_error = "No special characters are allowed in the email!".to_string();
    }

    let message = fields.contact_message.as_str();
    if message.trim().is_empty() {
        report.message_error = "Description box is empty!!".to_string();
    } else if SPECIAL_CHARS.is_match(message) {
        report.message_error = "No special characters are allowed!".to_string();
    } else if trimmed_len(message) > MESSAGE_LIMIT {
        report.message_error =
            format!("You have exceeded the maximum characters: {MESSAGE_LIMIT}");
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(email: &str, message: &str) -> FormFields {
        FormFields {
            contact_email: email.to_string(),
            contact_message: message.to_string(),
        }
    }

    #[test]
    fn empty_email_wins_regardless_of_message() {
        let report = validate(&fields("   ", "perfectly_fine_message"));
        assert_eq!(report.email_error, "Please provide an email!");

        let report = validate(&fields("", ""));
        assert_eq!(report.email_error, "Please provide an email!");
        assert_eq!(report.message_error, "Description box is empty!!");
        assert!(!report.is_valid());
    }

    #[test]
    fn email_shape_is_checked_before_special_chars() {
        let report = validate(&fields("foo", "msg"));
        assert_eq!(report.email_error, "Please provide a valid email!");

        let report = validate(&fields("foo@bar", "msg"));
        assert_eq!(report.email_error, "Please provide a valid email!");

        let report = validate(&fields("a@b.c", "msg"));
        assert_eq!(report.email_error, "");
    }

    #[test]
    fn email_special_chars_rejected_after_shape_passes() {
        // Passes the shape check but carries a '!' in the local part
        let report = validate(&fields("a!b@c.com", "msg"));
        assert_eq!(
            report.email_error,
            "No special characters are allowed in the email!"
        );
    }

    #[test]
    fn message_special_chars_take_precedence_over_length() {
        let mut long_and_special = "a".repeat(MESSAGE_LIMIT + 10);
        long_and_special.push('!');
        let report = validate(&fields("a@b.c", &long_and_special));
        assert_eq!(report.message_error, "No special characters are allowed!");
    }

    #[test]
    fn message_length_boundary() {
        let at_limit = "a".repeat(MESSAGE_LIMIT);
        let report = validate(&fields("a@b.c", &at_limit));
        assert_eq!(report.message_error, "");
        assert!(report.is_valid());

        let over_limit = "a".repeat(MESSAGE_LIMIT + 1);
        let report = validate(&fields("a@b.c", &over_limit));
        assert_eq!(
            report.message_error,
            "You have exceeded the maximum characters: 500"
        );
        assert!(!report.is_valid());
    }

    #[test]
    fn whitespace_in_message_counts_as_special_chars() {
        // The special-chars rule sees the untrimmed message, so padding
        // whitespace trips it before the length rule ever runs.
        let padded = format!("  {}  ", "a".repeat(MESSAGE_LIMIT));
        let report = validate(&fields("a@b.c", &padded));
        assert_eq!(report.message_error, "No special characters are allowed!");
    }

    #[test]
    fn trimmed_len_ignores_surrounding_whitespace() {
        assert_eq!(trimmed_len("  hello  "), 5);
        assert_eq!(trimmed_len(""), 0);
        assert_eq!(trimmed_len("   "), 0);
    }

    #[test]
    fn valid_submission_passes_both_fields() {
        let report = validate(&fields("someone@example.com", "Nice_portfolio."));
        assert_eq!(report.email_error, "");
        assert_eq!(report.message_error, "");
        assert!(report.is_valid());
    }
}
