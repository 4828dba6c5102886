//! Navbar state: collapsible menu, compact style, active link.

use crate::page::outline::{Outline, Section};

#[derive(Debug, Clone, Default)]
pub struct Navbar {
    pub menu_open: bool,
    /// Compact style once the page is scrolled past the threshold.
    pub scrolled: bool,
    /// Section whose link is highlighted.
    pub active: Option<Section>,
    /// Link under the cursor while the menu is open.
    pub selected: usize,
}

impl Navbar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        if self.menu_open {
            self.selected = self
                .active
                .and_then(|a| Section::ALL.iter().position(|s| *s == a))
                .unwrap_or(0);
        }
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % Section::ALL.len();
    }

    pub fn select_prev(&mut self) {
        self.selected = (self.selected + Section::ALL.len() - 1) % Section::ALL.len();
    }

    pub fn selected_section(&self) -> Section {
        Section::ALL[self.selected.min(Section::ALL.len() - 1)]
    }

    pub fn on_scroll(&mut self, y: usize, threshold: usize) {
        self.scrolled = y > threshold;
    }

    /// A wide terminal shows every link inline, so the menu is closed.
    pub fn on_resize(&mut self, width: u16, breakpoint: u16) {
        if width > breakpoint {
            self.close_menu();
        }
    }

    /// Highlight the link of the section containing `y + offset`. Keeps the
    /// previous highlight when that row lies outside every section.
    pub fn highlight(&mut self, outline: &Outline, y: usize, offset: usize) {
        if let Some(section) = outline.section_at(y + offset) {
            self.active = Some(section);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn test_toggle_and_resize() {
        let mut nav = Navbar::new();
        nav.toggle_menu();
        assert!(nav.menu_open);
        nav.on_resize(80, 100);
        assert!(nav.menu_open);
        nav.on_resize(101, 100);
        assert!(!nav.menu_open);
        nav.toggle_menu();
        nav.toggle_menu();
        assert!(!nav.menu_open);
    }

    #[test]
    fn test_scrolled_threshold_is_exclusive() {
        let mut nav = Navbar::new();
        nav.on_scroll(5, 5);
        assert!(!nav.scrolled);
        nav.on_scroll(6, 5);
        assert!(nav.scrolled);
        nav.on_scroll(0, 5);
        assert!(!nav.scrolled);
    }

    #[test]
    fn test_highlight_follows_scroll() {
        let outline = Outline::build(&AppConfig::default());
        let mut nav = Navbar::new();
        nav.highlight(&outline, 0, 5);
        assert_eq!(nav.active, Some(Section::Home));

        let about = outline.section(Section::About).unwrap();
        nav.highlight(&outline, about.top - 5, 5);
        assert_eq!(nav.active, Some(Section::About));
        nav.highlight(&outline, about.top - 6, 5);
        assert_eq!(nav.active, Some(Section::Home));

        // Past the end of the document: keep what we had.
        nav.highlight(&outline, outline.height + 10, 5);
        assert_eq!(nav.active, Some(Section::Home));
    }

    #[test]
    fn test_menu_selection_wraps() {
        let mut nav = Navbar::new();
        nav.select_prev();
        assert_eq!(nav.selected_section(), Section::Contact);
        nav.select_next();
        assert_eq!(nav.selected_section(), Section::Home);
    }
}
