pub mod layout;
mod navbar;
mod overlay;
pub mod sections;
mod status_bar;
mod theme;

use crate::app::state::{AppState, Focus};
use crate::page::outline::Block;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area, state.config.layout.content_width);

    render_document(frame, &app_layout, state);
    navbar::render(frame, &app_layout, state);
    overlay::render_toasts(frame, app_layout.document, state);
    if state.page.modal.is_visible() {
        overlay::render_modal(frame, app_layout.document, state);
    }
    status_bar::render(frame, app_layout.status_bar, state);
}

fn render_document(frame: &mut Frame, app_layout: &layout::AppLayout, state: &AppState) {
    let lines = sections::build_document(state);
    let scroll = state.page.viewport.y.min(u16::MAX as usize) as u16;
    let paragraph = Paragraph::new(lines).scroll((scroll, 0));
    frame.render_widget(paragraph, app_layout.column);

    if state.focus != Focus::Form || state.page.modal.is_visible() {
        return;
    }
    let Some(form_span) = state.page.outline.block(Block::ContactForm) else {
        return;
    };
    let Some((row, col)) = sections::form_cursor(state, form_span) else {
        return;
    };

    // Only place the cursor where the input is actually on screen
    let top = state.page.viewport.y + layout::NAVBAR_ROWS as usize;
    let bottom = state.page.viewport.y + app_layout.document.height as usize;
    if row < top || row >= bottom || col >= app_layout.column.width as usize {
        return;
    }
    let y = app_layout.document.y + (row - state.page.viewport.y) as u16;
    let x = app_layout.column.x + col as u16;
    frame.set_cursor_position((x, y));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::page::tree::{Overlay, UiTree};
    use ratatui::backend::TestBackend;

    fn draw(state: &AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let mut out = String::new();
        for y in 0..height {
            for x in 0..width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_renders_navbar_and_status() {
        let mut state = AppState::new(AppConfig::default());
        state.resize(120, 30);
        let screen = draw(&state, 120, 30);
        assert!(screen.contains("Alex Morgan"));
        assert!(screen.contains(" Projects "));
        assert!(screen.contains("[PAGE]"));
    }

    #[test]
    fn test_narrow_terminal_shows_menu_toggle() {
        let mut state = AppState::new(AppConfig::default());
        state.resize(60, 30);
        state.page.navbar.toggle_menu();
        let screen = draw(&state, 60, 30);
        assert!(screen.contains("☰ Menu"));
        assert!(screen.contains("3. Projects"));
    }

    #[test]
    fn test_modal_is_drawn_when_visible() {
        let mut state = AppState::new(AppConfig::default());
        state.resize(100, 30);
        state.page.show_overlay(Overlay::SuccessModal);
        let screen = draw(&state, 100, 30);
        assert!(screen.contains("Message Sent!"));
        assert!(screen.contains("[ Close ]"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut state = AppState::new(AppConfig::default());
        state.resize(10, 3);
        state.page.show_overlay(Overlay::SuccessModal);
        draw(&state, 10, 3);
    }
}
