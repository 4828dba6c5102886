//! The UI tree contract the contact form workflow drives.
//!
//! The workflow never owns page elements. It receives a `UiTree` on every
//! call and only touches the slots named here: field values, per-field
//! error text and emphasis, the submit control, and overlays.

use crate::form::field::{Emphasis, Field};

/// An interactive control whose label and enabled state can be changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Submit,
}

/// A modal-like overlay drawn above the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    SuccessModal,
}

pub trait UiTree {
    fn field_value(&self, field: Field) -> &str;
    fn set_field_value(&mut self, field: Field, value: &str);

    fn clear_field(&mut self, field: Field) {
        self.set_field_value(field, "");
    }

    fn error_text(&self, field: Field) -> &str;
    fn set_error_text(&mut self, field: Field, text: &str);

    fn emphasis(&self, field: Field) -> Emphasis;
    fn set_emphasis(&mut self, field: Field, emphasis: Emphasis);

    fn control_enabled(&self, control: Control) -> bool;
    fn set_control_enabled(&mut self, control: Control, enabled: bool);
    fn control_label(&self, control: Control) -> &str;
    fn set_control_label(&mut self, control: Control, label: &str);

    fn show_overlay(&mut self, overlay: Overlay);
    fn hide_overlay(&mut self, overlay: Overlay);
    fn overlay_visible(&self, overlay: Overlay) -> bool;
}
