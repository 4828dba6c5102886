use crate::app::state::AppState;
use crate::page::outline::Section;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use unicode_width::UnicodeWidthStr;

/// Rows of the fixed navbar drawn over the top of the document.
pub const NAVBAR_ROWS: u16 = 3;
pub const MODAL_WIDTH: u16 = 52;
pub const MODAL_HEIGHT: u16 = 9;
pub const TOAST_WIDTH: u16 = 40;
pub const TOAST_HEIGHT: u16 = 4;
pub const MENU_WIDTH: u16 = 16;
pub const CLOSE_LABEL: &str = "[ Close ]";
pub const MENU_TOGGLE_LABEL: &str = "☰ Menu";

pub struct AppLayout {
    /// Scrolling page area, including the rows under the navbar.
    pub document: Rect,
    /// Centered text column inside the document.
    pub column: Rect,
    pub navbar: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect, content_width: usize) -> AppLayout {
    // Main vertical split: document | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Document
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let document = main_chunks[0];
    let status_bar = main_chunks[1];

    let navbar = Rect {
        height: NAVBAR_ROWS.min(document.height),
        ..document
    };

    // Content column: configured width plus a two-cell margin each side
    let wanted = (content_width as u16).saturating_add(4);
    let column_width = wanted.min(document.width);
    let column = Rect {
        x: document.x + (document.width - column_width) / 2,
        y: document.y,
        width: column_width,
        height: document.height,
    };

    AppLayout {
        document,
        column,
        navbar,
        status_bar,
    }
}

pub fn is_wide(width: u16, breakpoint: u16) -> bool {
    width > breakpoint
}

fn label_width(s: &str) -> u16 {
    s.width() as u16
}

pub fn nav_label(section: Section) -> String {
    format!(" {} ", section.title())
}

/// Inline nav links, right-aligned on the navbar's middle row.
pub fn nav_links(navbar: Rect) -> Vec<(Section, Rect)> {
    let row = navbar.y + 1;
    let mut right = navbar.right().saturating_sub(2);
    let mut links = Vec::new();
    for section in Section::ALL.iter().rev() {
        let w = label_width(&nav_label(*section));
        let x = right.saturating_sub(w);
        links.push((*section, Rect::new(x, row, w, 1)));
        right = x.saturating_sub(1);
    }
    links.reverse();
    links
}

pub fn menu_toggle(navbar: Rect) -> Rect {
    let w = label_width(MENU_TOGGLE_LABEL) + 2;
    Rect::new(navbar.right().saturating_sub(w + 1), navbar.y + 1, w, 1)
}

/// Dropdown rows under the navbar when the collapsible menu is open.
pub fn menu_items(navbar: Rect) -> Vec<(Section, Rect)> {
    let x = navbar.right().saturating_sub(MENU_WIDTH + 1);
    Section::ALL
        .iter()
        .enumerate()
        .map(|(i, s)| (*s, Rect::new(x, navbar.bottom() + i as u16, MENU_WIDTH, 1)))
        .collect()
}

pub struct ModalLayout {
    pub content: Rect,
    pub close_button: Rect,
}

pub fn modal(area: Rect) -> ModalLayout {
    let width = MODAL_WIDTH.min(area.width);
    let height = MODAL_HEIGHT.min(area.height);
    let content = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );
    let bw = label_width(CLOSE_LABEL).min(content.width);
    let close_button = Rect::new(
        content.x + (content.width - bw) / 2,
        content.bottom().saturating_sub(2),
        bw,
        1,
    );
    ModalLayout {
        content,
        close_button,
    }
}

/// Toast stack in the top-right corner below the navbar.
pub fn toast_rects(document: Rect, count: usize) -> Vec<Rect> {
    let width = TOAST_WIDTH.min(document.width);
    let x = document.right().saturating_sub(width + 1);
    (0..count)
        .map(|i| Rect::new(x, document.y + NAVBAR_ROWS + 1 + i as u16 * TOAST_HEIGHT, width, TOAST_HEIGHT))
        .filter(|r| r.bottom() <= document.bottom())
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    ModalClose,
    ModalContent,
    ModalBackdrop,
    MenuToggle,
    NavLink(Section),
    /// A cell of the scrolled document: absolute row, column inside the
    /// content column.
    Document { row: usize, col: u16 },
    Nothing,
}

fn inside(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.right() && y >= rect.y && y < rect.bottom()
}

/// Resolve a mouse click to the element under it, topmost first.
pub fn hit_test(state: &AppState, x: u16, y: u16) -> Hit {
    let (w, h) = state.screen;
    let area = Rect::new(0, 0, w, h);
    let layout = compute_layout(area, state.config.layout.content_width);

    if state.page.modal.is_visible() {
        let m = modal(layout.document);
        if inside(m.close_button, x, y) {
            return Hit::ModalClose;
        }
        if inside(m.content, x, y) {
            return Hit::ModalContent;
        }
        return Hit::ModalBackdrop;
    }

    let wide = is_wide(w, state.config.layout.wide_breakpoint);
    if !wide && state.page.navbar.menu_open {
        for (section, rect) in menu_items(layout.navbar) {
            if inside(rect, x, y) {
                return Hit::NavLink(section);
            }
        }
    }

    if inside(layout.navbar, x, y) {
        if wide {
            for (section, rect) in nav_links(layout.navbar) {
                if inside(rect, x, y) {
                    return Hit::NavLink(section);
                }
            }
        } else if inside(menu_toggle(layout.navbar), x, y) {
            return Hit::MenuToggle;
        }
        return Hit::Nothing;
    }

    if inside(layout.column, x, y) {
        let row = state.page.viewport.y + (y - layout.document.y) as usize;
        return Hit::Document {
            row,
            col: x - layout.column.x,
        };
    }

    Hit::Nothing
}
