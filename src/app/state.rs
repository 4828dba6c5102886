use crate::config::AppConfig;
use crate::form::workflow::{FormWorkflow, SubmitState};
use crate::page::Page;

/// Where keyboard input goes when no overlay is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Scrolling, navigation and buttons.
    Page,
    /// Editing the contact form.
    Form,
}

pub struct AppState {
    pub config: AppConfig,
    pub page: Page,
    pub workflow: FormWorkflow,
    pub focus: Focus,
    pub should_quit: bool,
    pub dirty: bool,
    /// Last known terminal size (columns, rows).
    pub screen: (u16, u16),
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let page = Page::new(&config);
        let workflow = FormWorkflow::new(config.timing.submit_delay());
        Self {
            config,
            page,
            workflow,
            focus: Focus::Page,
            should_quit: false,
            dirty: true,
            screen: (0, 0),
        }
    }

    /// Record a new terminal size. The bottom row is the status bar.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.screen = (width, height);
        let content_rows = height.saturating_sub(1) as usize;
        self.page.resize(width, content_rows);
        self.dirty = true;
    }

    pub fn status_line(&self) -> String {
        let mode = match self.focus {
            Focus::Page => "↑↓ scroll  1-4 sections  m menu  r resume  w work  ←→/o projects  c contact  q quit",
            Focus::Form => "Tab next field  Enter/Ctrl+S send  Esc leave form",
        };
        match self.workflow.state() {
            SubmitState::Submitting => format!("Sending message...  │  {}", mode),
            _ if self.focus == Focus::Form && self.page.form.has_errors() => {
                format!("Fix the highlighted fields  │  {}", mode)
            }
            _ => mode.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::field::Field;
    use crate::page::tree::UiTree;

    #[test]
    fn test_resize_reserves_status_row() {
        let mut state = AppState::new(AppConfig::default());
        state.resize(80, 24);
        assert_eq!(state.screen, (80, 24));
        assert_eq!(state.page.viewport.height, 23);
        assert!(state.dirty);
    }

    #[test]
    fn test_status_line_follows_focus_and_errors() {
        let mut state = AppState::new(AppConfig::default());
        assert!(state.status_line().contains("q quit"));

        state.focus = Focus::Form;
        assert!(state.status_line().starts_with("Tab next field"));

        state.page.set_error_text(Field::Email, "Please enter a valid email address");
        assert!(state.status_line().starts_with("Fix the highlighted fields"));
    }
}
