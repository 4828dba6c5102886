//! The page: every element the user sees and the behaviors attached to
//! them. `Page` is the concrete UI tree the contact form workflow drives.

pub mod form;
pub mod input;
pub mod modal;
pub mod nav;
pub mod notify;
pub mod outline;
pub mod reveal;
pub mod scroll;
pub mod tree;

use crate::config::{AppConfig, LayoutConfig};
use crate::form::field::{Emphasis, Field};
use crate::page::form::{ContactForm, SUBMIT_LABEL};
use crate::page::modal::Modal;
use crate::page::nav::Navbar;
use crate::page::notify::Notifications;
use crate::page::outline::{Outline, Section};
use crate::page::reveal::RevealState;
use crate::page::scroll::Viewport;
use crate::page::tree::{Control, Overlay, UiTree};

pub struct Page {
    pub outline: Outline,
    pub form: ContactForm,
    pub modal: Modal,
    pub navbar: Navbar,
    pub viewport: Viewport,
    pub toasts: Notifications,
    pub reveal: RevealState,
    /// Project card picked with the arrow keys.
    pub selected_project: usize,
    pub width: u16,
    layout: LayoutConfig,
    tick: u64,
}

impl Page {
    pub fn new(config: &AppConfig) -> Self {
        let outline = Outline::build(config);
        let viewport = Viewport::new(outline.height);
        let mut navbar = Navbar::new();
        navbar.active = Some(Section::Home);
        Self {
            outline,
            form: ContactForm::new(SUBMIT_LABEL),
            modal: Modal::success(),
            navbar,
            viewport,
            toasts: Notifications::new(),
            reveal: RevealState::new(),
            selected_project: 0,
            width: 0,
            layout: config.layout.clone(),
            tick: 0,
        }
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Smooth-scroll so the section starts just below the navbar. Unknown
    /// anchors are ignored.
    pub fn scroll_to_anchor(&mut self, anchor: &str) -> bool {
        match Section::from_anchor(anchor) {
            Some(section) => {
                self.scroll_to_section(section);
                true
            }
            None => {
                tracing::debug!(anchor, "no section for anchor");
                false
            }
        }
    }

    pub fn scroll_to_section(&mut self, section: Section) {
        if let Some(span) = self.outline.section(section) {
            self.viewport
                .smooth_to(span.top.saturating_sub(self.layout.header_offset));
        }
    }

    /// A nav link was activated: close the menu and scroll to its section.
    pub fn follow_nav_link(&mut self, section: Section) {
        self.navbar.close_menu();
        self.scroll_to_section(section);
    }

    /// Re-derive everything that depends on the scroll position.
    pub fn after_scroll(&mut self) {
        let y = self.viewport.y;
        self.navbar.on_scroll(y, self.layout.scrolled_threshold);
        self.navbar
            .highlight(&self.outline, y, self.layout.highlight_offset);
        self.reveal.observe(
            &self.outline,
            y,
            self.viewport.height,
            self.layout.reveal_margin,
            self.tick,
        );
    }

    pub fn scroll_by(&mut self, delta: isize) {
        self.viewport.scroll_by(delta);
        self.after_scroll();
    }

    pub fn resize(&mut self, width: u16, content_height: usize) {
        self.width = width;
        self.viewport.set_height(content_height);
        self.navbar.on_resize(width, self.layout.wide_breakpoint);
        self.after_scroll();
    }

    /// Advance animations by one tick. Returns true if anything visible
    /// changed.
    pub fn tick(&mut self) -> bool {
        self.tick = self.tick.wrapping_add(1);
        let moved = self.viewport.step();
        if moved {
            self.after_scroll();
        }
        moved || self.reveal.animating(self.tick)
    }

    pub fn select_next_project(&mut self) {
        let count = self.project_count();
        if count > 0 {
            self.selected_project = (self.selected_project + 1) % count;
        }
    }

    pub fn select_prev_project(&mut self) {
        let count = self.project_count();
        if count > 0 {
            self.selected_project = (self.selected_project + count - 1) % count;
        }
    }

    fn project_count(&self) -> usize {
        self.outline
            .blocks
            .iter()
            .filter(|(b, _)| matches!(b, outline::Block::Project(_)))
            .count()
    }
}

impl UiTree for Page {
    fn field_value(&self, field: Field) -> &str {
        &self.form.slot(field).input.text
    }

    fn set_field_value(&mut self, field: Field, value: &str) {
        self.form.slot_mut(field).input.set(value);
    }

    fn clear_field(&mut self, field: Field) {
        self.form.slot_mut(field).input.clear();
    }

    fn error_text(&self, field: Field) -> &str {
        &self.form.slot(field).error
    }

    fn set_error_text(&mut self, field: Field, text: &str) {
        self.form.slot_mut(field).error = text.to_string();
    }

    fn emphasis(&self, field: Field) -> Emphasis {
        self.form.slot(field).emphasis
    }

    fn set_emphasis(&mut self, field: Field, emphasis: Emphasis) {
        self.form.slot_mut(field).emphasis = emphasis;
    }

    fn control_enabled(&self, control: Control) -> bool {
        match control {
            Control::Submit => self.form.submit.enabled,
        }
    }

    fn set_control_enabled(&mut self, control: Control, enabled: bool) {
        match control {
            Control::Submit => self.form.submit.enabled = enabled,
        }
    }

    fn control_label(&self, control: Control) -> &str {
        match control {
            Control::Submit => &self.form.submit.label,
        }
    }

    fn set_control_label(&mut self, control: Control, label: &str) {
        match control {
            Control::Submit => self.form.submit.label = label.to_string(),
        }
    }

    fn show_overlay(&mut self, overlay: Overlay) {
        match overlay {
            Overlay::SuccessModal => self.modal.show(),
        }
    }

    fn hide_overlay(&mut self, overlay: Overlay) {
        match overlay {
            Overlay::SuccessModal => self.modal.hide(),
        }
    }

    fn overlay_visible(&self, overlay: Overlay) -> bool {
        match overlay {
            Overlay::SuccessModal => self.modal.is_visible(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::outline::Block;

    fn page() -> Page {
        let mut page = Page::new(&AppConfig::default());
        page.resize(80, 20);
        page
    }

    fn settle(page: &mut Page) {
        for _ in 0..200 {
            if !page.tick() && page.viewport.target().is_none() {
                break;
            }
        }
    }

    #[test]
    fn test_scroll_to_anchor_lands_below_navbar() {
        let mut page = page();
        assert!(page.scroll_to_anchor("#projects"));
        settle(&mut page);
        let projects = page.outline.section(Section::Projects).unwrap();
        assert_eq!(page.viewport.y, projects.top - 3);
        assert_eq!(page.navbar.active, Some(Section::Projects));
        assert!(page.navbar.scrolled);
    }

    #[test]
    fn test_scroll_to_home_clamps_at_zero() {
        let mut page = page();
        page.scroll_by(30);
        page.scroll_to_anchor("#home");
        settle(&mut page);
        assert_eq!(page.viewport.y, 0);
        assert!(!page.navbar.scrolled);
        assert_eq!(page.navbar.active, Some(Section::Home));
    }

    #[test]
    fn test_unknown_anchor_does_nothing() {
        let mut page = page();
        assert!(!page.scroll_to_anchor("#nowhere"));
        assert!(page.viewport.target().is_none());
    }

    #[test]
    fn test_nav_link_closes_menu() {
        let mut page = page();
        page.navbar.toggle_menu();
        page.follow_nav_link(Section::About);
        assert!(!page.navbar.menu_open);
        assert!(page.viewport.target().is_some());
    }

    #[test]
    fn test_scrolling_reveals_blocks() {
        let mut page = page();
        assert!(!page.reveal.is_revealed(Block::ContactForm));
        page.scroll_to_anchor("#contact");
        settle(&mut page);
        assert!(page.reveal.is_revealed(Block::ContactInfo));
        // Scrolling away keeps it revealed.
        page.scroll_by(-1000);
        assert!(page.reveal.is_revealed(Block::ContactInfo));
    }

    #[test]
    fn test_project_selection_wraps() {
        let mut page = page();
        page.select_prev_project();
        assert_eq!(page.selected_project, 2);
        page.select_next_project();
        assert_eq!(page.selected_project, 0);
    }
}
