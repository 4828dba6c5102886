//! Builds the page document: one `Line` per row of the outline.

use crate::app::state::{AppState, Focus};
use crate::config::AppConfig;
use crate::form::field::{Emphasis, Field};
use crate::form::workflow::SubmitState;
use crate::page::form::{FieldSlot, FormFocus};
use crate::page::outline::{self, wrap_text, Block, RowSpan, Section, MESSAGE_ROWS, TECH_PER_ROW};
use crate::page::reveal::Fade;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use unicode_width::UnicodeWidthStr;

/// Left margin of every document line, in cells.
pub const MARGIN: usize = 2;
/// Prefix drawn before input text (the input's left border).
pub const INPUT_PREFIX: &str = "▌ ";
pub const RESUME_BUTTON: &str = "[ Download Resume ]";
pub const WORK_BUTTON: &str = "[ View My Work ]";
const BUTTON_GAP: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroButton {
    Resume,
    ViewWork,
}

/// Which hero button, if any, sits at `col` of the buttons row.
pub fn hero_button_at(col: u16) -> Option<HeroButton> {
    let col = col as usize;
    let resume_end = MARGIN + RESUME_BUTTON.width();
    let work_start = resume_end + BUTTON_GAP;
    let work_end = work_start + WORK_BUTTON.width();
    if (MARGIN..resume_end).contains(&col) {
        Some(HeroButton::Resume)
    } else if (work_start..work_end).contains(&col) {
        Some(HeroButton::ViewWork)
    } else {
        None
    }
}

/// Width available to message text on one row.
pub fn message_wrap_width(config: &AppConfig) -> usize {
    config
        .layout
        .content_width
        .saturating_sub(INPUT_PREFIX.width())
        .max(1)
}

/// First visible message row so that the cursor row stays on screen.
pub fn message_window(cursor_chars: usize, wrap: usize) -> usize {
    let cursor_line = cursor_chars / wrap.max(1);
    (cursor_line + 1).saturating_sub(MESSAGE_ROWS)
}

fn indent() -> Span<'static> {
    Span::raw(" ".repeat(MARGIN))
}

fn text_line(text: String, style: Style) -> Line<'static> {
    Line::from(vec![indent(), Span::styled(text, style)])
}

pub fn build_document(state: &AppState) -> Vec<Line<'static>> {
    let page = &state.page;
    let mut rows = vec![Line::default(); page.outline.height];

    for (section, span) in &page.outline.sections {
        if *section != Section::Home {
            let heading = vec![
                text_line(section.heading().to_string(), Theme::heading()),
                text_line("─".repeat(section.heading().width()), Theme::heading()),
            ];
            place(&mut rows, span.top, heading, outline::HEADING_ROWS);
        }
    }

    for (block, span) in &page.outline.blocks {
        let lines = block_lines(state, *block);
        let fade = page.reveal.fade(*block, page.tick_count());
        let lines = apply_fade(fit(lines, span.height), fade);
        place(&mut rows, span.top, lines, span.height);
    }

    rows
}

fn place(rows: &mut [Line<'static>], top: usize, lines: Vec<Line<'static>>, height: usize) {
    for (offset, line) in lines.into_iter().take(height).enumerate() {
        if let Some(row) = rows.get_mut(top + offset) {
            *row = line;
        }
    }
}

/// Pad or truncate to exactly `height` lines.
fn fit(mut lines: Vec<Line<'static>>, height: usize) -> Vec<Line<'static>> {
    lines.truncate(height);
    lines.resize(height, Line::default());
    lines
}

fn apply_fade(lines: Vec<Line<'static>>, fade: Fade) -> Vec<Line<'static>> {
    match fade {
        Fade::Shown => lines,
        Fade::Hidden => vec![Line::default(); lines.len()],
        Fade::Fading(progress) => {
            let height = lines.len();
            let mut faded: Vec<Line<'static>> = lines
                .into_iter()
                .map(|line| {
                    let spans: Vec<Span<'static>> = line
                        .spans
                        .into_iter()
                        .map(|s| Span::styled(s.content, Theme::fading(progress)))
                        .collect();
                    Line::from(spans)
                })
                .collect();
            // Early in the fade the block sits one row lower.
            if progress < 0.5 && height > 0 {
                faded.insert(0, Line::default());
                faded.truncate(height);
            }
            faded
        }
    }
}

fn block_lines(state: &AppState, block: Block) -> Vec<Line<'static>> {
    let cfg = &state.config;
    match block {
        Block::HeroText => hero_text(cfg),
        Block::HeroImage => hero_image(),
        Block::AboutText => about_text(cfg),
        Block::TechStack => tech_stack(cfg),
        Block::Project(i) => project_card(cfg, i, state.page.selected_project == i),
        Block::ContactInfo => contact_info(cfg),
        Block::ContactForm => contact_form(state),
    }
}

fn hero_text(cfg: &AppConfig) -> Vec<Line<'static>> {
    let p = &cfg.profile;
    let mut lines = vec![
        text_line(format!("Hi, I'm {}", p.name), Theme::title()),
        text_line(p.title.clone(), Theme::heading()),
        Line::default(),
    ];
    for l in wrap_text(&p.tagline, cfg.layout.content_width) {
        lines.push(text_line(l, Theme::muted()));
    }
    lines.push(Line::default());
    lines.push(Line::from(vec![
        indent(),
        Span::styled(RESUME_BUTTON, Theme::button()),
        Span::raw(" ".repeat(BUTTON_GAP)),
        Span::styled(WORK_BUTTON, Theme::link()),
    ]));
    lines
}

fn hero_image() -> Vec<Line<'static>> {
    [
        "    ╭──────────╮",
        "    │  ◕    ◕  │",
        "    │    ▽     │",
        "    │  ╰────╯  │",
        "    ╰──────────╯",
    ]
    .iter()
    .map(|s| Line::styled(*s, Theme::heading()))
    .collect()
}

fn about_text(cfg: &AppConfig) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for paragraph in &cfg.profile.about {
        for l in wrap_text(paragraph, cfg.layout.content_width) {
            lines.push(text_line(l, Theme::text()));
        }
        lines.push(Line::default());
    }
    lines
}

fn tech_stack(cfg: &AppConfig) -> Vec<Line<'static>> {
    let mut lines = vec![text_line("Tech Stack".to_string(), Theme::title())];
    for chunk in cfg.profile.tech_stack.chunks(TECH_PER_ROW) {
        let mut spans = vec![indent()];
        for item in chunk {
            spans.push(Span::styled("◆ ", Theme::heading()));
            spans.push(Span::styled(format!("{:<14}", item), Theme::tag()));
        }
        lines.push(Line::from(spans));
    }
    lines
}

fn project_card(cfg: &AppConfig, index: usize, selected: bool) -> Vec<Line<'static>> {
    let Some(project) = cfg.projects.get(index) else {
        return Vec::new();
    };
    let (marker, title_style) = if selected {
        ("▸ ", Theme::card_selected())
    } else {
        ("  ", Theme::title())
    };
    let mut lines = vec![Line::from(vec![
        indent(),
        Span::styled(marker, Theme::card_selected()),
        Span::styled(project.title.clone(), title_style),
    ])];
    for l in wrap_text(&project.description, cfg.layout.content_width.saturating_sub(4)) {
        lines.push(text_line(format!("    {}", l), Theme::muted()));
    }
    let tags = project
        .tags
        .iter()
        .map(|t| format!("#{}", t))
        .collect::<Vec<_>>()
        .join(" ");
    lines.push(text_line(format!("    {}", tags), Theme::tag()));
    if project.is_placeholder() {
        lines.push(text_line("    ↗ View Project (link coming soon)".to_string(), Theme::muted()));
    } else {
        lines.push(text_line(format!("    ↗ {}", project.url), Theme::link()));
    }
    lines.push(Line::default());
    lines
}

fn contact_info(cfg: &AppConfig) -> Vec<Line<'static>> {
    let p = &cfg.profile;
    let mut lines = vec![text_line(format!("✉  {}", p.email), Theme::text())];
    if let Some(phone) = &p.phone {
        lines.push(text_line(format!("☎  {}", phone), Theme::text()));
    }
    lines.push(text_line(format!("⌖  {}", p.location), Theme::text()));
    lines.push(Line::default());
    lines
}

fn contact_form(state: &AppState) -> Vec<Line<'static>> {
    let form = &state.page.form;
    let editing = state.focus == Focus::Form && !state.page.modal.is_visible();
    let wrap = message_wrap_width(&state.config);
    let mut lines = Vec::new();

    for field in Field::ALL {
        let focused = editing && form.focus == FormFocus::Field(field);
        let slot = form.slot(field);
        let label_style = if focused { Theme::border_focused() } else { Theme::muted() };
        lines.push(text_line(field.label().to_string(), label_style));
        lines.extend(input_lines(slot, field, focused, wrap));
        lines.push(text_line(slot.error.clone(), Theme::error_message()));
    }

    let submit = &form.submit;
    let style = if !submit.enabled {
        Theme::button_disabled()
    } else if editing && form.focus == FormFocus::Submit {
        Theme::button_focused()
    } else {
        Theme::button()
    };
    let mut submit_row = vec![indent(), Span::styled(format!("[ {} ]", submit.label), style)];
    if state.workflow.state() == SubmitState::Submitting {
        submit_row.push(Span::styled("  please wait", Theme::muted()));
    }
    lines.push(Line::from(submit_row));
    lines.push(Line::default());
    lines.push(Line::default());
    lines
}

fn input_lines(slot: &FieldSlot, field: Field, focused: bool, wrap: usize) -> Vec<Line<'static>> {
    let bar = match slot.emphasis {
        Emphasis::Error => Theme::input_error(),
        Emphasis::Neutral if focused => Theme::border_focused(),
        Emphasis::Neutral => Theme::input_neutral(),
    };
    let row = |text: String| {
        Line::from(vec![
            indent(),
            Span::styled(INPUT_PREFIX, bar),
            Span::styled(text, Theme::input_text()),
        ])
    };

    if field != Field::Message {
        return vec![row(slot.input.text.clone())];
    }

    let chars: Vec<char> = slot.input.text.chars().collect();
    let chunks: Vec<String> = chars.chunks(wrap).map(|c| c.iter().collect()).collect();
    let start = message_window(slot.input.cursor_chars(), wrap);
    (start..start + MESSAGE_ROWS)
        .map(|i| row(chunks.get(i).cloned().unwrap_or_default()))
        .collect()
}

/// Document row and column of the text cursor for the focused form input.
pub fn form_cursor(state: &AppState, form_span: RowSpan) -> Option<(usize, usize)> {
    let FormFocus::Field(field) = state.page.form.focus else {
        return None;
    };
    let input = &state.page.form.slot(field).input;
    let cursor = input.cursor_chars();
    let input_row = form_span.top + outline::field_offset(field) + 1;
    let prefix = MARGIN + INPUT_PREFIX.width();
    if field == Field::Message {
        let wrap = message_wrap_width(&state.config);
        let line = cursor / wrap;
        let start = message_window(cursor, wrap);
        Some((input_row + line - start, prefix + cursor % wrap))
    } else {
        let width = input.text.chars().take(cursor).collect::<String>().width();
        Some((input_row, prefix + width))
    }
}
