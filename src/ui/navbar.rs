use crate::app::state::AppState;
use crate::page::outline::Section;
use crate::ui::layout::{self, AppLayout, MENU_TOGGLE_LABEL};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph};

pub fn render(frame: &mut Frame, app_layout: &AppLayout, state: &AppState) {
    let navbar = &state.page.navbar;
    let area = app_layout.navbar;
    let wide = layout::is_wide(state.screen.0, state.config.layout.wide_breakpoint);

    let (bg, border) = if navbar.scrolled {
        (Theme::navbar_scrolled(), Theme::border_focused())
    } else {
        (Theme::navbar(), Theme::border())
    };

    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(border)
        .style(bg);
    frame.render_widget(block, area);

    if area.height < 2 {
        return;
    }
    let row = Rect::new(area.x + 2, area.y + 1, area.width.saturating_sub(4), 1);
    let brand = Paragraph::new(Span::styled(state.config.profile.name.clone(), Theme::brand()));
    frame.render_widget(brand, row);

    if wide {
        for (section, rect) in layout::nav_links(area) {
            let style = link_style(navbar.active == Some(section));
            frame.render_widget(Paragraph::new(Span::styled(layout::nav_label(section), style)), rect);
        }
    } else {
        let toggle = layout::menu_toggle(area);
        let style = if navbar.menu_open {
            Theme::nav_link_active()
        } else {
            Theme::nav_link()
        };
        frame.render_widget(
            Paragraph::new(Span::styled(format!(" {} ", MENU_TOGGLE_LABEL), style)),
            toggle,
        );
        if navbar.menu_open {
            render_menu(frame, app_layout, state);
        }
    }
}

fn link_style(active: bool) -> Style {
    if active {
        Theme::nav_link_active()
    } else {
        Theme::nav_link()
    }
}

fn render_menu(frame: &mut Frame, app_layout: &AppLayout, state: &AppState) {
    let items = layout::menu_items(app_layout.navbar);
    let Some(first) = items.first().map(|(_, r)| *r) else {
        return;
    };
    let area = Rect {
        height: items.len() as u16,
        ..first
    }
    .intersection(app_layout.document);

    let navbar = &state.page.navbar;
    let list: Vec<ListItem> = Section::ALL
        .iter()
        .enumerate()
        .map(|(i, section)| {
            let mut style = link_style(navbar.active == Some(*section));
            if i == navbar.selected {
                style = style.add_modifier(Modifier::REVERSED);
            }
            ListItem::new(Span::styled(format!(" {}. {}", i + 1, section.title()), style))
        })
        .collect();

    frame.render_widget(Clear, area);
    frame.render_widget(List::new(list).style(Theme::navbar_scrolled()), area);
}
