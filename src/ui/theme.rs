use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub const ACCENT: Color = Color::Rgb(59, 130, 246);
    pub const ERROR: Color = Color::Rgb(220, 38, 38);
    pub const NEUTRAL: Color = Color::Rgb(226, 232, 240);

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn heading() -> Style {
        Style::default().fg(Self::ACCENT).add_modifier(Modifier::BOLD)
    }

    pub fn brand() -> Style {
        Style::default().fg(Self::ACCENT).add_modifier(Modifier::BOLD)
    }

    pub fn text() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn muted() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn tag() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn link() -> Style {
        Style::default().fg(Self::ACCENT).add_modifier(Modifier::UNDERLINED)
    }

    pub fn button() -> Style {
        Style::default().fg(Color::White).bg(Self::ACCENT).add_modifier(Modifier::BOLD)
    }

    pub fn button_focused() -> Style {
        Self::button().add_modifier(Modifier::REVERSED)
    }

    pub fn button_disabled() -> Style {
        Style::default().fg(Color::Gray).bg(Color::DarkGray)
    }

    pub fn input_neutral() -> Style {
        Style::default().fg(Self::NEUTRAL)
    }

    pub fn input_error() -> Style {
        Style::default().fg(Self::ERROR)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn error_message() -> Style {
        Style::default().fg(Self::ERROR)
    }

    pub fn card_selected() -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    pub fn nav_link() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn nav_link_active() -> Style {
        Style::default().fg(Self::ACCENT).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    pub fn navbar() -> Style {
        Style::default().bg(Color::Reset)
    }

    pub fn navbar_scrolled() -> Style {
        Style::default().bg(Color::Rgb(30, 41, 59))
    }

    pub fn toast() -> Style {
        Style::default().fg(Color::Rgb(30, 41, 59)).bg(Color::White)
    }

    pub fn toast_title() -> Style {
        Style::default().fg(Self::ACCENT).bg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn toast_leaving() -> Style {
        Style::default().fg(Color::Gray).bg(Color::DarkGray)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    /// Style applied to content that is still fading in.
    pub fn fading(progress: f32) -> Style {
        if progress < 0.5 {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Gray)
        }
    }
}
