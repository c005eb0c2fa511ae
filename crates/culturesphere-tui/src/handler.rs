use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use culturesphere_core::{InputBuffer, Page};
use crate::app::{App, Focus, InputMode};
use crate::tui::AppEvent;

pub fn handle_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Mouse(mouse) => handle_mouse(app, mouse),
        AppEvent::Resize(w, h) => app.resize(w, h),
        AppEvent::Tick => app.tick_animation(),
        AppEvent::RotateHints => app.rotate_hints(),
        AppEvent::Wander => app.wander(),
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Global keys that work in any mode
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    match (app.focus, app.input_mode) {
        (Focus::Page, InputMode::Normal) => handle_page_normal(app, key),
        (Focus::Page, InputMode::Editing) => handle_page_editing(app, key),
        (Focus::Assistant, InputMode::Normal) => handle_assistant_normal(app, key),
        (Focus::Assistant, InputMode::Editing) => handle_assistant_editing(app, key),
    }
}

/// Number keys jump straight to a domain page; 0 goes home.
fn page_for_digit(c: char) -> Option<Page> {
    let index = c.to_digit(10)? as usize;
    Page::all().get(index).copied()
}

fn handle_page_normal(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,

        KeyCode::Char(c) if c.is_ascii_digit() => {
            if let Some(page) = page_for_digit(c) {
                app.navigate(page);
            }
        }
        KeyCode::Esc | KeyCode::Char('h') | KeyCode::Backspace => app.navigate(Page::Home),

        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Char('a') => app.toggle_assistant(),
        KeyCode::Char('c') => app.toggle_companion(),
        KeyCode::Tab if app.show_assistant => app.focus = Focus::Assistant,

        KeyCode::Char('i') | KeyCode::Char('/') => {
            if !app.page_controller.is_loading() {
                app.input_mode = InputMode::Editing;
            }
        }

        KeyCode::Char('j') | KeyCode::Down => {
            if app.page == Page::Home {
                app.card_down();
            } else {
                app.example_down();
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            if app.page == Page::Home {
                app.card_up();
            } else {
                app.example_up();
            }
        }
        KeyCode::Enter => {
            if app.page == Page::Home {
                app.open_selected_card();
            } else {
                app.use_selected_example();
            }
        }

        KeyCode::Char('J') | KeyCode::PageDown => app.scroll_result_down(),
        KeyCode::Char('K') | KeyCode::PageUp => app.scroll_result_up(),
        _ => {}
    }
}

fn handle_page_editing(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.input_mode = InputMode::Normal,
        KeyCode::Enter => app.submit_page(),
        _ => {
            // The form is read-only while a request is out.
            if !app.page_controller.is_loading() {
                edit_input(app.page_controller.input_mut(), key);
            }
        }
    }
}

fn handle_assistant_normal(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Esc | KeyCode::Char('a') => app.toggle_assistant(),
        KeyCode::Tab => app.focus = Focus::Page,
        KeyCode::Char('i') | KeyCode::Enter => app.input_mode = InputMode::Editing,
        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Char('j') | KeyCode::Down => app.scroll_chat_down(),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_chat_up(),
        KeyCode::Char('G') | KeyCode::End => app.chat_follow = true,
        _ => {}
    }
}

fn handle_assistant_editing(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.input_mode = InputMode::Normal,
        KeyCode::Tab => {
            app.input_mode = InputMode::Normal;
            app.focus = Focus::Page;
        }
        KeyCode::Enter => app.send_to_assistant(),
        _ => {
            if !app.assistant.is_composing() {
                edit_input(app.assistant.input_mut(), key);
            }
        }
    }
}

fn edit_input(input: &mut InputBuffer, key: KeyEvent) {
    match key.code {
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => input.clear(),
        KeyCode::Char(c) => input.insert(c),
        _ => {}
    }
}

/// Check if a point is within a rectangle
fn point_in_rect(x: u16, y: u16, rect: Rect) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    let x = mouse.column;
    let y = mouse.row;

    // Chat panel wins when it overlaps the page body
    let in_chat = app.chat_area.map(|r| point_in_rect(x, y, r)).unwrap_or(false);
    let in_body = app.body_area.map(|r| point_in_rect(x, y, r)).unwrap_or(false);

    match mouse.kind {
        MouseEventKind::ScrollDown => {
            if in_chat {
                app.scroll_chat_down();
            } else if in_body {
                app.scroll_result_down();
            }
        }
        MouseEventKind::ScrollUp => {
            if in_chat {
                app.scroll_chat_up();
            } else if in_body {
                app.scroll_result_up();
            }
        }
        _ => {}
    }
}
