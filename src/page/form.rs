//! Contact form elements: one slot per field plus the submit control.

use crate::form::field::{Emphasis, Field};
use crate::page::input::TextInput;

pub const SUBMIT_LABEL: &str = "Send Message";

/// An input together with its error display slot.
#[derive(Debug, Clone, Default)]
pub struct FieldSlot {
    pub input: TextInput,
    pub error: String,
    pub emphasis: Emphasis,
}

#[derive(Debug, Clone)]
pub struct SubmitControl {
    pub label: String,
    pub enabled: bool,
}

/// Which element of the form has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Field(Field),
    Submit,
}

impl FormFocus {
    pub fn next(self) -> FormFocus {
        match self {
            FormFocus::Field(f) => f.next().map(FormFocus::Field).unwrap_or(FormFocus::Submit),
            FormFocus::Submit => FormFocus::Field(Field::ALL[0]),
        }
    }

    pub fn prev(self) -> FormFocus {
        match self {
            FormFocus::Field(f) => f.prev().map(FormFocus::Field).unwrap_or(FormFocus::Submit),
            FormFocus::Submit => FormFocus::Field(Field::ALL[Field::ALL.len() - 1]),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    slots: [FieldSlot; 5],
    pub submit: SubmitControl,
    pub focus: FormFocus,
}

impl ContactForm {
    pub fn new(submit_label: &str) -> Self {
        Self {
            slots: Default::default(),
            submit: SubmitControl {
                label: submit_label.to_string(),
                enabled: true,
            },
            focus: FormFocus::Field(Field::FirstName),
        }
    }

    fn index(field: Field) -> usize {
        match field {
            Field::FirstName => 0,
            Field::LastName => 1,
            Field::Email => 2,
            Field::Phone => 3,
            Field::Message => 4,
        }
    }

    pub fn slot(&self, field: Field) -> &FieldSlot {
        &self.slots[Self::index(field)]
    }

    pub fn slot_mut(&mut self, field: Field) -> &mut FieldSlot {
        &mut self.slots[Self::index(field)]
    }

    /// The input under focus, if focus is on a field rather than the button.
    pub fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            FormFocus::Field(field) => Some(&mut self.slot_mut(field).input),
            FormFocus::Submit => None,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn has_errors(&self) -> bool {
        self.slots.iter().any(|s| !s.error.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycles_through_submit() {
        let mut form = ContactForm::new(SUBMIT_LABEL);
        let mut seen = Vec::new();
        for _ in 0..6 {
            seen.push(form.focus);
            form.focus_next();
        }
        assert_eq!(seen[4], FormFocus::Field(Field::Message));
        assert_eq!(seen[5], FormFocus::Submit);
        assert_eq!(form.focus, FormFocus::Field(Field::FirstName));

        form.focus_prev();
        assert_eq!(form.focus, FormFocus::Submit);
    }

    #[test]
    fn test_no_input_when_button_focused() {
        let mut form = ContactForm::new(SUBMIT_LABEL);
        form.focus = FormFocus::Submit;
        assert!(form.focused_input_mut().is_none());
    }
}
