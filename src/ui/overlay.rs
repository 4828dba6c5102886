//! Toasts and the success modal, drawn above the page.

use crate::app::state::AppState;
use crate::page::notify::ToastPhase;
use crate::ui::layout::{self, CLOSE_LABEL};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

pub fn render_toasts(frame: &mut Frame, document: Rect, state: &AppState) {
    let toasts = state.page.toasts.toasts();
    for (toast, area) in toasts.iter().zip(layout::toast_rects(document, toasts.len())) {
        let (style, title_style) = match toast.phase {
            ToastPhase::Visible => (Theme::toast(), Theme::toast_title()),
            ToastPhase::Leaving => (Theme::toast_leaving(), Theme::toast_leaving()),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(title_style)
            .title(Span::styled(format!(" ⓘ {} ", toast.title), title_style))
            .style(style);
        let body = Paragraph::new(toast.message.clone())
            .style(style)
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(Clear, area);
        frame.render_widget(body, area);
    }
}

pub fn render_modal(frame: &mut Frame, document: Rect, state: &AppState) {
    let modal = &state.page.modal;
    let m = layout::modal(document);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border_focused())
        .title(Span::styled(format!(" ✔ {} ", modal.title), Theme::title()))
        .title_alignment(Alignment::Center);
    let inner = block.inner(m.content);

    frame.render_widget(Clear, m.content);
    frame.render_widget(block, m.content);

    let body_area = Rect {
        height: inner.height.saturating_sub(2),
        ..inner
    };
    let body = Paragraph::new(modal.message.clone())
        .style(Theme::text())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(body, body_area);
    frame.render_widget(
        Paragraph::new(Span::styled(CLOSE_LABEL, Theme::button())),
        m.close_button,
    );
}
