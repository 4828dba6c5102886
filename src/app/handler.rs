use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::form::field::Field;
use crate::form::snapshot::FormSnapshot;
use crate::form::workflow::SubmitResult;
use crate::page::form::FormFocus;
use crate::page::outline::{self, Block, Section};
use crate::page::tree::{Control, Overlay, UiTree};
use crate::timer::{Scheduler, Timer};
use crate::ui::layout::{self, Hit};
use crate::ui::sections::{hero_button_at, HeroButton};
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

/// Rows moved per mouse wheel notch.
const WHEEL_ROWS: isize = 3;

/// Kick off startup animations. Call once before the first event.
pub fn start<S: Scheduler + ?Sized>(state: &mut AppState, timers: &mut S) {
    timers.schedule(state.config.timing.hero_intro_delay(), Timer::HeroIntro);
}

pub fn handle_event<S: Scheduler + ?Sized>(
    state: &mut AppState,
    timers: &mut S,
    event: AppEvent,
) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, timers, cevent),
        AppEvent::Timer { id, timer } => {
            timers.fired(id);
            handle_timer(state, timers, timer);
            state.dirty = true;
            vec![]
        }
        AppEvent::UrlOpenFailed { url, error } => {
            tracing::warn!(%url, %error, "could not open link");
            let visible = state.config.timing.toast_visible();
            state.page.toasts.notify(
                "Could Not Open Link",
                &format!("Open {} in your browser.", url),
                visible,
                timers,
            );
            state.dirty = true;
            vec![]
        }
        AppEvent::Tick => {
            if state.page.tick() {
                state.dirty = true;
            }
            vec![]
        }
    }
}

fn handle_timer<S: Scheduler + ?Sized>(state: &mut AppState, timers: &mut S, timer: Timer) {
    match timer {
        Timer::SubmitComplete => {
            state.workflow.complete(&mut state.page);
        }
        Timer::ToastExit(id) => {
            let exit = state.config.timing.toast_exit();
            state.page.toasts.begin_exit(id, exit, timers);
        }
        Timer::ToastRemove(id) => {
            state.page.toasts.remove(id);
        }
        Timer::HeroIntro => {
            let stagger = state.config.timing.hero_stagger();
            for index in 0..Block::HERO.len() {
                timers.schedule(stagger * index as u32, Timer::HeroReveal(index));
            }
        }
        Timer::HeroReveal(index) => {
            if let Some(block) = Block::HERO.get(index) {
                let tick = state.page.tick_count();
                state.page.reveal.reveal(*block, tick);
            }
        }
    }
}

fn handle_terminal<S: Scheduler + ?Sized>(
    state: &mut AppState,
    timers: &mut S,
    event: CEvent,
) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => {
            state.dirty = true;
            handle_key(state, timers, key)
        }
        CEvent::Mouse(mouse) => handle_mouse(state, timers, mouse),
        CEvent::Resize(w, h) => {
            state.resize(w, h);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key<S: Scheduler + ?Sized>(state: &mut AppState, timers: &mut S, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // The success modal captures all input while visible
    if state.page.modal.is_visible() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ')) {
            state.page.hide_overlay(Overlay::SuccessModal);
        }
        return vec![];
    }

    match state.focus {
        Focus::Page => handle_page_key(state, timers, key),
        Focus::Form => handle_form_key(state, timers, key),
    }
}

fn handle_page_key<S: Scheduler + ?Sized>(state: &mut AppState, timers: &mut S, key: KeyEvent) -> Vec<Action> {
    let page_rows = state
        .page
        .viewport
        .height
        .saturating_sub(state.config.layout.header_offset)
        .max(1) as isize;

    if state.page.navbar.menu_open {
        match key.code {
            KeyCode::Esc | KeyCode::Char('m') => state.page.navbar.close_menu(),
            KeyCode::Up | KeyCode::Char('k') => state.page.navbar.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => state.page.navbar.select_next(),
            KeyCode::Enter => {
                let section = state.page.navbar.selected_section();
                follow_link(state, section);
            }
            KeyCode::Char(c @ '1'..='4') => follow_link(state, section_for_digit(c)),
            KeyCode::Char('q') => return vec![Action::Quit],
            _ => {}
        }
        return vec![];
    }

    match key.code {
        KeyCode::Char('q') => return vec![Action::Quit],
        KeyCode::Char('m') => state.page.navbar.toggle_menu(),
        KeyCode::Char(c @ '1'..='4') => follow_link(state, section_for_digit(c)),
        KeyCode::Up | KeyCode::Char('k') => state.page.scroll_by(-1),
        KeyCode::Down | KeyCode::Char('j') => state.page.scroll_by(1),
        KeyCode::PageUp => state.page.scroll_by(-page_rows),
        KeyCode::PageDown | KeyCode::Char(' ') => state.page.scroll_by(page_rows),
        KeyCode::Home | KeyCode::Char('g') => {
            state.page.scroll_to_anchor(Section::Home.anchor());
        }
        KeyCode::End | KeyCode::Char('G') => {
            let bottom = state.page.viewport.max_y();
            state.page.viewport.jump_to(bottom);
            state.page.after_scroll();
        }
        KeyCode::Char('r') => return download_resume(state, timers),
        KeyCode::Char('w') => {
            state.page.scroll_to_anchor(Section::Projects.anchor());
        }
        KeyCode::Left | KeyCode::Char('[') => state.page.select_prev_project(),
        KeyCode::Right | KeyCode::Char(']') => state.page.select_next_project(),
        KeyCode::Char('o') | KeyCode::Enter => {
            let index = state.page.selected_project;
            return open_project(state, timers, index);
        }
        KeyCode::Char('c') | KeyCode::Tab => enter_form(state, None),
        _ => {}
    }
    vec![]
}

fn handle_form_key<S: Scheduler + ?Sized>(state: &mut AppState, timers: &mut S, key: KeyEvent) -> Vec<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => state.focus = Focus::Page,
        KeyCode::Tab | KeyCode::Down => state.page.form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => state.page.form.focus_prev(),
        // Message is multi-row; Enter there finishes editing instead
        KeyCode::Enter if state.page.form.focus == FormFocus::Field(Field::Message) => {
            state.page.form.focus = FormFocus::Submit;
        }
        KeyCode::Enter => try_submit(state, timers),
        KeyCode::Char('s') if ctrl => try_submit(state, timers),
        KeyCode::Char('w') if ctrl => {
            if let Some(input) = state.page.form.focused_input_mut() {
                input.delete_word_back();
            }
        }
        KeyCode::Char('u') if ctrl => {
            if let Some(input) = state.page.form.focused_input_mut() {
                input.clear();
            }
        }
        KeyCode::Char(c) if !ctrl => {
            if let Some(input) = state.page.form.focused_input_mut() {
                input.insert_char(c);
            }
        }
        KeyCode::Backspace => {
            if let Some(input) = state.page.form.focused_input_mut() {
                input.delete_back();
            }
        }
        KeyCode::Delete => {
            if let Some(input) = state.page.form.focused_input_mut() {
                input.delete_forward();
            }
        }
        KeyCode::Left => {
            if let Some(input) = state.page.form.focused_input_mut() {
                input.move_left();
            }
        }
        KeyCode::Right => {
            if let Some(input) = state.page.form.focused_input_mut() {
                input.move_right();
            }
        }
        KeyCode::Home => {
            if let Some(input) = state.page.form.focused_input_mut() {
                input.move_home();
            }
        }
        KeyCode::End => {
            if let Some(input) = state.page.form.focused_input_mut() {
                input.move_end();
            }
        }
        _ => {}
    }
    vec![]
}

fn handle_mouse<S: Scheduler + ?Sized>(state: &mut AppState, timers: &mut S, mouse: MouseEvent) -> Vec<Action> {
    match mouse.kind {
        MouseEventKind::ScrollUp if !state.page.modal.is_visible() => {
            state.page.scroll_by(-WHEEL_ROWS);
            state.dirty = true;
            vec![]
        }
        MouseEventKind::ScrollDown if !state.page.modal.is_visible() => {
            state.page.scroll_by(WHEEL_ROWS);
            state.dirty = true;
            vec![]
        }
        MouseEventKind::Down(MouseButton::Left) => {
            state.dirty = true;
            handle_click(state, timers, mouse.column, mouse.row)
        }
        _ => vec![],
    }
}

fn handle_click<S: Scheduler + ?Sized>(state: &mut AppState, timers: &mut S, x: u16, y: u16) -> Vec<Action> {
    match layout::hit_test(state, x, y) {
        Hit::ModalClose | Hit::ModalBackdrop => {
            state.page.hide_overlay(Overlay::SuccessModal);
            vec![]
        }
        Hit::ModalContent | Hit::Nothing => vec![],
        Hit::MenuToggle => {
            state.page.navbar.toggle_menu();
            vec![]
        }
        Hit::NavLink(section) => {
            follow_link(state, section);
            vec![]
        }
        Hit::Document { row, col } => click_document(state, timers, row, col),
    }
}

fn click_document<S: Scheduler + ?Sized>(
    state: &mut AppState,
    timers: &mut S,
    row: usize,
    col: u16,
) -> Vec<Action> {
    let Some((block, span)) = state
        .page
        .outline
        .blocks
        .iter()
        .find(|(_, span)| span.contains(row))
        .copied()
    else {
        return vec![];
    };

    match block {
        Block::HeroText if row + 1 == span.bottom() => match hero_button_at(col) {
            Some(HeroButton::Resume) => download_resume(state, timers),
            Some(HeroButton::ViewWork) => {
                state.page.scroll_to_anchor(Section::Projects.anchor());
                vec![]
            }
            None => vec![],
        },
        Block::Project(index) => {
            state.page.selected_project = index;
            open_project(state, timers, index)
        }
        Block::ContactForm => {
            let offset = row - span.top;
            if offset == outline::submit_offset() {
                enter_form(state, Some(FormFocus::Submit));
                try_submit(state, timers);
            } else if let Some(field) = Field::ALL.into_iter().find(|f| {
                let start = outline::field_offset(*f);
                offset >= start && offset < start + outline::field_rows(*f)
            }) {
                enter_form(state, Some(FormFocus::Field(field)));
            }
            vec![]
        }
        _ => vec![],
    }
}

fn section_for_digit(c: char) -> Section {
    let idx = (c as usize - '1' as usize).min(Section::ALL.len() - 1);
    Section::ALL[idx]
}

fn follow_link(state: &mut AppState, section: Section) {
    state.page.follow_nav_link(section);
    if section == Section::Contact {
        state.focus = Focus::Form;
    }
}

fn enter_form(state: &mut AppState, focus: Option<FormFocus>) {
    state.focus = Focus::Form;
    if let Some(focus) = focus {
        state.page.form.focus = focus;
    }
    state.page.scroll_to_section(Section::Contact);
}

/// Submit the contact form unless the submit control is disabled.
fn try_submit<S: Scheduler + ?Sized>(state: &mut AppState, timers: &mut S) {
    if !state.page.control_enabled(Control::Submit) {
        return;
    }
    let snapshot = FormSnapshot::capture(&state.page);
    if let SubmitResult::Invalid(errors) = state.workflow.submit(snapshot, &mut state.page, timers) {
        if let Some(first) = errors.first() {
            state.page.form.focus = FormFocus::Field(first.field);
        }
    }
}

fn download_resume<S: Scheduler + ?Sized>(state: &mut AppState, timers: &mut S) -> Vec<Action> {
    let url = state.config.profile.resume_url.clone();
    let visible = state.config.timing.toast_visible();
    state.page.toasts.notify(
        "Resume Download",
        "Your Resume download will begin shortly.",
        visible,
        timers,
    );
    vec![Action::OpenUrl { url }]
}

fn open_project<S: Scheduler + ?Sized>(state: &mut AppState, timers: &mut S, index: usize) -> Vec<Action> {
    let Some(project) = state.config.projects.get(index) else {
        return vec![];
    };
    if project.is_placeholder() {
        let visible = state.config.timing.toast_visible();
        state.page.toasts.notify(
            "Project Link",
            "Please update this project with your actual project URL.",
            visible,
            timers,
        );
        vec![]
    } else {
        vec![Action::OpenUrl {
            url: project.url.clone(),
        }]
    }
}
