use crate::application::{App, AppMode};
use crate::infrastructure::{ClipboardError, SystemClipboard};
use crate::presentation::layout::{HitTarget, ScreenLayout};
use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use tracing::{debug, warn};

pub struct InputHandler;

impl InputHandler {
    /// Whether this key should end the event loop.
    ///
    /// `Ctrl+C` always quits; `q` only from the list with no dialog showing.
    pub fn should_quit(app: &App, key: KeyCode, modifiers: KeyModifiers) -> bool {
        if modifiers.contains(KeyModifiers::CONTROL) && key == KeyCode::Char('c') {
            return true;
        }
        key == KeyCode::Char('q')
            && matches!(app.mode, AppMode::Normal)
            && !app.manager.is_clear_confirmation_open()
    }

    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        Self::handle_key_event_with(app, key, modifiers, SystemClipboard::read_text);
    }

    /// Like [`handle_key_event`](Self::handle_key_event), reading pastes from `read_clipboard`.
    pub fn handle_key_event_with<F>(
        app: &mut App,
        key: KeyCode,
        modifiers: KeyModifiers,
        read_clipboard: F,
    ) where
        F: FnOnce() -> Result<String, ClipboardError>,
    {
        if app.manager.is_clear_confirmation_open() {
            Self::handle_dialog_keys(app, key);
            return;
        }

        match app.mode {
            AppMode::Normal => Self::handle_normal_mode(app, key),
            AppMode::Editing => Self::handle_editing_mode(app, key, modifiers, read_clipboard),
            AppMode::Help => Self::handle_help_mode(app, key),
        }
    }

    fn handle_dialog_keys(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm_clear(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_clear(),
            _ => {}
        }
    }

    fn handle_normal_mode(app: &mut App, key: KeyCode) {
        app.status_message = None;

        match key {
            KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Tab => {
                app.start_editing();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                app.select_previous();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.select_next();
            }
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right | KeyCode::Char('l') => {
                app.increase_selected();
            }
            KeyCode::Char('-') | KeyCode::Left | KeyCode::Char('h') => {
                app.decrease_selected();
            }
            KeyCode::Char('r') => {
                app.reset_counts();
            }
            KeyCode::Char('c') => {
                app.request_clear();
            }
            KeyCode::F(1) | KeyCode::Char('?') => {
                app.open_help();
            }
            KeyCode::Char('q') => {
                // Will be handled by main loop
            }
            _ => {}
        }
    }

    fn handle_editing_mode<F>(app: &mut App, key: KeyCode, modifiers: KeyModifiers, read_clipboard: F)
    where
        F: FnOnce() -> Result<String, ClipboardError>,
    {
        app.status_message = None;

        if modifiers.contains(KeyModifiers::CONTROL) {
            if key == KeyCode::Char('v') {
                match read_clipboard() {
                    Ok(text) => app.paste_text(&text),
                    Err(e) => {
                        warn!(error = %e, "paste failed");
                        app.status_message = Some(e.to_string());
                    }
                }
            }
            return;
        }

        match key {
            KeyCode::Enter => {
                app.submit_input();
            }
            KeyCode::Esc | KeyCode::Tab => {
                app.stop_editing();
            }
            KeyCode::Backspace => {
                app.delete_char_before_cursor();
            }
            KeyCode::Delete => {
                app.delete_char_at_cursor();
            }
            KeyCode::Left => {
                app.move_cursor_left();
            }
            KeyCode::Right => {
                app.move_cursor_right();
            }
            KeyCode::Home => {
                app.move_cursor_home();
            }
            KeyCode::End => {
                app.move_cursor_end();
            }
            KeyCode::Char(c) => {
                app.insert_char(c);
            }
            _ => {}
        }
    }

    fn handle_help_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                app.close_help();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if app.help_scroll > 0 {
                    app.help_scroll -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.help_scroll += 1;
            }
            KeyCode::PageUp => {
                app.help_scroll = app.help_scroll.saturating_sub(5);
            }
            KeyCode::PageDown => {
                app.help_scroll += 5;
            }
            KeyCode::Home => {
                app.help_scroll = 0;
            }
            _ => {}
        }
    }

    /// Bracketed paste from the terminal. Only the add box accepts text.
    pub fn handle_paste(app: &mut App, text: &str) {
        if matches!(app.mode, AppMode::Editing) && !app.manager.is_clear_confirmation_open() {
            app.paste_text(text);
        }
    }

    /// Routes a left click through the layout that is currently on screen.
    pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent, layout: &ScreenLayout) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left)
            || matches!(app.mode, AppMode::Help)
        {
            return;
        }

        let Some(target) = layout.hit_test(mouse.column, mouse.row) else {
            return;
        };
        debug!(?target, "click");

        match target {
            HitTarget::DialogConfirm => app.confirm_clear(),
            HitTarget::DialogCancel | HitTarget::Backdrop => app.cancel_clear(),
            HitTarget::DialogContent => {}
            HitTarget::AddBox => {
                if !matches!(app.mode, AppMode::Editing) {
                    app.start_editing();
                }
            }
            HitTarget::AddButton => {
                app.status_message = None;
                app.submit_input();
            }
            HitTarget::Row(index) => {
                Self::leave_editing(app);
                app.select_index(index);
            }
            HitTarget::Increase(index) => {
                Self::leave_editing(app);
                app.increase_at(index);
            }
            HitTarget::Decrease(index) => {
                Self::leave_editing(app);
                app.decrease_at(index);
            }
            HitTarget::ResetButton => {
                Self::leave_editing(app);
                app.reset_counts();
            }
            HitTarget::ClearButton => {
                Self::leave_editing(app);
                app.request_clear();
            }
        }
    }

    fn leave_editing(app: &mut App) {
        if matches!(app.mode, AppMode::Editing) {
            app.stop_editing();
        }
    }
}
