//! Input handling.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{App, Mode};
use super::app::COARSE_STEP;

/// Handle a crossterm event.
/// Returns true if the event was handled.
pub fn handle_input(app: &mut App, event: Event) -> bool {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(app, key),
        _ => false,
    }
}

/// Handle a key event.
fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return true;
    }

    match app.ui.mode {
        Mode::Normal => handle_normal_key(app, key),
        Mode::Filter => handle_filter_key(app, key),
        Mode::Picker => handle_picker_key(app, key),
        Mode::Prompt => handle_prompt_key(app, key),
        Mode::ConfirmReset => handle_confirm_reset_key(app, key),
        Mode::Help => handle_help_key(app, key),
    }
}

/// Handle keys in normal mode.
fn handle_normal_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
        }
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_prev(),
        KeyCode::Char('g') | KeyCode::Home => app.select_first(),
        KeyCode::Char('G') | KeyCode::End => app.select_last(),
        KeyCode::Enter => app.open_picker(),
        KeyCode::Char('n') => app.start_rename(),
        KeyCode::Char('e') => app.start_export(),
        KeyCode::Char('i') => app.start_import(),
        KeyCode::Char('R') => app.request_reset(),
        KeyCode::Char('/') => app.start_filter(),
        KeyCode::Char('y') => app.copy_selected_hex(),
        KeyCode::Char('?') => {
            app.ui.mode = Mode::Help;
            app.mark_dirty();
        }
        KeyCode::Esc => {
            app.clear_filter();
            app.clear_messages();
        }
        _ => return false,
    }
    true
}

/// Handle keys while typing a filter.
fn handle_filter_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => app.cancel_filter(),
        KeyCode::Enter => app.apply_filter(),
        KeyCode::Backspace => {
            app.list.filter.pop();
            app.update_filter_live();
        }
        KeyCode::Down => app.select_next(),
        KeyCode::Up => app.select_prev(),
        KeyCode::Char(c) => {
            app.list.filter.push(c);
            app.update_filter_live();
        }
        _ => return false,
    }
    true
}

/// Handle keys in the color picker.
fn handle_picker_key(app: &mut App, key: KeyEvent) -> bool {
    if app.picker.hex_input.is_some() {
        return handle_hex_key(app, key);
    }

    match key.code {
        KeyCode::Esc => app.cancel_picker(),
        KeyCode::Enter => app.apply_picker(),
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => app.picker_next_channel(),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => app.picker_prev_channel(),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('+') => app.picker_adjust(1),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('-') => app.picker_adjust(-1),
        KeyCode::PageUp => app.picker_adjust(COARSE_STEP),
        KeyCode::PageDown => app.picker_adjust(-COARSE_STEP),
        KeyCode::Backspace => app.picker_backspace(),
        KeyCode::Char('#') => app.picker_start_hex(),
        KeyCode::Char(c) if c.is_ascii_digit() => app.picker_push_digit(c as u8 - b'0'),
        _ => return false,
    }
    true
}

/// Handle keys while typing a hex value in the picker.
fn handle_hex_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => app.picker_cancel_hex(),
        KeyCode::Enter => app.picker_finish_hex(),
        KeyCode::Backspace => app.picker_hex_pop(),
        KeyCode::Char(c) => app.picker_hex_push(c),
        _ => return false,
    }
    true
}

/// Handle keys in a text prompt.
fn handle_prompt_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => app.cancel_prompt(),
        KeyCode::Enter => app.submit_prompt(),
        KeyCode::Backspace => app.prompt_pop(),
        KeyCode::Char(c) => app.prompt_push(c),
        _ => return false,
    }
    true
}

/// Handle keys in the reset confirmation.
fn handle_confirm_reset_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm_reset(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_reset(),
        _ => return false,
    }
    true
}

/// Handle keys in the help overlay.
fn handle_help_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Esc => {
            app.ui.mode = Mode::Normal;
            app.mark_dirty();
            true
        }
        _ => false,
    }
}
