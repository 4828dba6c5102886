use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    // Active section
    if let Some(section) = state.page.navbar.active {
        parts.push(Span::styled(
            format!(" [{}] ", section.title()),
            Style::default().fg(Color::Green).bg(Color::DarkGray),
        ));
    }

    // Key hints
    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    ));

    // Focus indicator
    let focus_name = if state.page.modal.is_visible() {
        "MODAL"
    } else {
        match state.focus {
            Focus::Page => "PAGE",
            Focus::Form => "FORM",
        }
    };
    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + focus_name.len() + 3);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" [{}] ", focus_name),
        Style::default().fg(Color::Cyan).bg(Color::DarkGray),
    ));

    let line = Line::from(parts);
    let paragraph = Paragraph::new(line);
    frame.render_widget(paragraph, area);
}
