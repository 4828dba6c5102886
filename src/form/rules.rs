//! Contact form validation rules.
//!
//! Rules are declared once, in display order, and every rule is evaluated on
//! every call. A snapshot with several bad fields reports all of them.

use crate::form::field::Field;
use crate::form::snapshot::FormSnapshot;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Whitespace as web forms define it (ECMAScript WhiteSpace and
/// LineTerminator). Unlike Unicode `White_Space` it includes U+FEFF and
/// leaves out U+0085.
const BLANK_CLASS: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

/// `local@domain.tld`, where no segment contains whitespace or `@`.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let seg = format!("[^{}@]+", BLANK_CLASS);
    Regex::new(&format!(r"^{seg}@{seg}\.{seg}$")).unwrap()
});

/// True for every character in [`BLANK_CLASS`].
pub fn is_blank(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' ' | '\u{A0}' | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}'
    )
}

/// Length as a browser counts it, in UTF-16 code units.
pub fn text_length(value: &str) -> usize {
    value.encode_utf16().count()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("First name must be at least 2 characters")]
    FirstNameTooShort,
    #[error("Last name must be at least 2 characters")]
    LastNameTooShort,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Message must be at least 10 characters")]
    MessageTooShort,
}

/// A validation failure attached to the field it was raised for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub error: ValidationError,
}

impl FieldError {
    pub fn message(&self) -> String {
        self.error.to_string()
    }
}

#[derive(Debug, Clone, Copy)]
enum Check {
    MinLength(usize),
    Email,
}

impl Check {
    fn passes(self, value: &str) -> bool {
        match self {
            Check::MinLength(min) => text_length(value) >= min,
            Check::Email => is_valid_email(value),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub field: Field,
    check: Check,
    pub error: ValidationError,
}

impl Rule {
    pub fn check(&self, snapshot: &FormSnapshot) -> Option<FieldError> {
        if self.check.passes(snapshot.value(self.field)) {
            None
        } else {
            Some(FieldError {
                field: self.field,
                error: self.error,
            })
        }
    }
}

/// Phone has no rule.
pub const RULES: [Rule; 4] = [
    Rule {
        field: Field::FirstName,
        check: Check::MinLength(2),
        error: ValidationError::FirstNameTooShort,
    },
    Rule {
        field: Field::LastName,
        check: Check::MinLength(2),
        error: ValidationError::LastNameTooShort,
    },
    Rule {
        field: Field::Email,
        check: Check::Email,
        error: ValidationError::InvalidEmail,
    },
    Rule {
        field: Field::Message,
        check: Check::MinLength(10),
        error: ValidationError::MessageTooShort,
    },
];

/// Run every rule against the snapshot, returning failures in rule order.
pub fn validate(snapshot: &FormSnapshot) -> Vec<FieldError> {
    RULES.iter().filter_map(|rule| rule.check(snapshot)).collect()
}

pub fn is_valid_email(value: &str) -> bool {
    !value.is_empty() && EMAIL_PATTERN.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> FormSnapshot {
        FormSnapshot::new(
            "Jane",
            "Doe",
            "jane@example.com",
            "",
            "Hello, this is long enough.",
        )
    }

    fn fields(errors: &[FieldError]) -> Vec<Field> {
        errors.iter().map(|e| e.field).collect()
    }

    #[test]
    fn test_valid_snapshot_has_no_errors() {
        assert!(validate(&valid()).is_empty());
    }

    #[test]
    fn test_short_names() {
        let mut snap = valid();
        snap.first_name = "J".into();
        snap.last_name = String::new();
        let errors = validate(&snap);
        assert_eq!(fields(&errors), [Field::FirstName, Field::LastName]);
        assert_eq!(errors[0].message(), "First name must be at least 2 characters");
        assert_eq!(errors[1].message(), "Last name must be at least 2 characters");
    }

    #[test]
    fn test_name_length_counts_after_trim() {
        let snap = FormSnapshot::new(" J ", "Doe", "jane@example.com", "", "Hello, this is long enough.");
        assert_eq!(fields(&validate(&snap)), [Field::FirstName]);
    }

    #[test]
    fn test_length_counts_utf16_units() {
        let mut snap = valid();
        snap.first_name = "É".into();
        assert_eq!(fields(&validate(&snap)), [Field::FirstName]);
        // One astral character is two code units
        snap.first_name = "😀".into();
        assert!(validate(&snap).is_empty());
        snap.message = "😀😀😀😀😀".into();
        assert!(validate(&snap).is_empty());
        snap.message = "😀😀😀😀".into();
        assert_eq!(fields(&validate(&snap)), [Field::Message]);
    }

    #[test]
    fn test_byte_order_mark_is_whitespace() {
        assert!(!is_valid_email("a\u{FEFF}b@c.com"));
        assert!(!is_valid_email("a@b.c\u{FEFF}om"));
        let snap = FormSnapshot::new("\u{FEFF}J\u{FEFF}", "Doe", "jane@example.com", "", "Hello, this is long enough.");
        assert_eq!(snap.first_name, "J");
        assert_eq!(fields(&validate(&snap)), [Field::FirstName]);
    }

    #[test]
    fn test_next_line_is_not_whitespace() {
        assert!(!is_blank('\u{85}'));
        assert!(is_valid_email("a\u{85}b@c.com"));
        assert_eq!(FormSnapshot::new("\u{85}", "", "", "", "").first_name, "\u{85}");
    }

    #[test]
    fn test_blank_class_matches_predicate() {
        let blank = Regex::new(&format!("^[{}]$", BLANK_CLASS)).unwrap();
        for c in ('\0'..='\u{3100}').chain(['\u{FEFF}', '\u{FFFF}']) {
            assert_eq!(is_blank(c), blank.is_match(c.encode_utf8(&mut [0; 4])), "{:?}", c);
        }
    }

    #[test]
    fn test_email_pattern() {
        for good in ["a@b.c", "jane@example.com", "x.y@sub.domain.org", "a@b.c.d"] {
            assert!(is_valid_email(good), "{good} should be accepted");
        }
        for bad in ["", "abc", "a@b", "@b.com", "a@.com", "a@b.", "a b@c.com", "a@b@c.com"] {
            assert!(!is_valid_email(bad), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_email_error_message() {
        let mut snap = valid();
        snap.email = "a@b".into();
        let errors = validate(&snap);
        assert_eq!(fields(&errors), [Field::Email]);
        assert_eq!(errors[0].message(), "Please enter a valid email address");
    }

    #[test]
    fn test_message_minimum() {
        let mut snap = valid();
        snap.message = "too short".into();
        let errors = validate(&snap);
        assert_eq!(errors[0].error, ValidationError::MessageTooShort);
        snap.message = "just right".into();
        assert!(validate(&snap).is_empty());
    }

    #[test]
    fn test_phone_is_never_validated() {
        let mut snap = valid();
        snap.phone = "not a number at all @@".into();
        assert!(validate(&snap).is_empty());
    }

    #[test]
    fn test_all_invalid_reports_four_errors_in_order() {
        let errors = validate(&FormSnapshot::default());
        assert_eq!(
            fields(&errors),
            [Field::FirstName, Field::LastName, Field::Email, Field::Message]
        );
    }
}
