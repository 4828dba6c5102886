use crate::form::field::Field;
use crate::form::rules::is_blank;
use crate::page::tree::UiTree;

/// Trimmed field values captured at the moment of a submit attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl FormSnapshot {
    pub fn new(first_name: &str, last_name: &str, email: &str, phone: &str, message: &str) -> Self {
        Self {
            first_name: trim(first_name).to_string(),
            last_name: trim(last_name).to_string(),
            email: trim(email).to_string(),
            phone: trim(phone).to_string(),
            message: trim(message).to_string(),
        }
    }

    /// Read every field from the tree.
    pub fn capture<T: UiTree + ?Sized>(ui: &T) -> Self {
        Self::new(
            ui.field_value(Field::FirstName),
            ui.field_value(Field::LastName),
            ui.field_value(Field::Email),
            ui.field_value(Field::Phone),
            ui.field_value(Field::Message),
        )
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }
}

/// Strip leading and trailing whitespace the way a browser `trim` does.
fn trim(value: &str) -> &str {
    value.trim_matches(is_blank)
}
