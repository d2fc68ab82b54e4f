//! Application state management for the terminal list counter.
//!
//! This module contains the main application state and mode management
//! for the terminal user interface.

use crate::domain::{DomainError, Item, ItemId, ListManager};
use tracing::{debug, warn};

pub const DEFAULT_TITLE: &str = "Manage List with Counts";
pub const DEFAULT_PLACEHOLDER: &str = "Add new item";
pub const DEFAULT_EMPTY_MESSAGE: &str = "No items in the list";

/// Represents the current mode of the application.
///
/// The mode decides where keystrokes go. The clear confirmation dialog is
/// tracked by the list manager and takes precedence over every mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// List navigation - arrows move the selection, shortcuts available
    Normal,
    /// The add box has focus and keystrokes edit the pending input
    Editing,
    /// Help screen is displayed
    Help,
}

/// Main application state containing the list and UI state.
///
/// # Examples
///
/// ```
/// use tally::application::{App, AppMode};
///
/// let app = App::default();
/// assert!(matches!(app.mode, AppMode::Normal));
/// assert!(app.manager.items().is_empty());
/// assert_eq!(app.selected, None);
/// ```
#[derive(Debug)]
pub struct App {
    /// Items, pending input and dialog state
    pub manager: ListManager,
    /// Current application mode
    pub mode: AppMode,
    /// Selected item, tracked by id so it survives appends
    pub selected: Option<ItemId>,
    /// First list row visible in the viewport
    pub list_scroll: usize,
    /// Cursor position within the pending input, in characters
    pub cursor_position: usize,
    /// Temporary status message to display
    pub status_message: Option<String>,
    /// Scroll position in help text
    pub help_scroll: usize,
    /// Heading shown above the add box
    pub title: String,
    /// Hint shown in the add box while it is empty
    pub placeholder: String,
    /// Shown instead of the list when there are no items
    pub empty_message: String,
    /// Number of list rows that fit on screen
    pub viewport_rows: usize,
}

impl Default for App {
    fn default() -> Self {
        Self {
            manager: ListManager::new(),
            mode: AppMode::Normal,
            selected: None,
            list_scroll: 0,
            cursor_position: 0,
            status_message: None,
            help_scroll: 0,
            title: DEFAULT_TITLE.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
            viewport_rows: 10,
        }
    }
}

/// Byte offset of the `char_index`-th character, or the string length.
fn byte_index(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len())
}

impl App {
    pub fn with_labels(title: String, placeholder: String, empty_message: String) -> Self {
        Self {
            title,
            placeholder,
            empty_message,
            ..Self::default()
        }
    }

    pub fn pending_input(&self) -> &str {
        self.manager.pending_input()
    }

    fn input_len(&self) -> usize {
        self.manager.pending_input().chars().count()
    }

    /// Gives the add box focus with the cursor at the end of the buffer.
    pub fn start_editing(&mut self) {
        self.mode = AppMode::Editing;
        self.cursor_position = self.input_len();
        debug!("add box focused");
    }

    /// Returns focus to the list. The pending text is kept.
    pub fn stop_editing(&mut self) {
        self.mode = AppMode::Normal;
        debug!("add box unfocused");
    }

    pub fn insert_char(&mut self, c: char) {
        let at = byte_index(self.manager.pending_input(), self.cursor_position);
        self.manager.pending_input_mut().insert(at, c);
        self.cursor_position += 1;
    }

    /// Removes the character before the cursor (backspace).
    pub fn delete_char_before_cursor(&mut self) {
        if self.cursor_position == 0 {
            return;
        }
        let at = byte_index(self.manager.pending_input(), self.cursor_position - 1);
        self.manager.pending_input_mut().remove(at);
        self.cursor_position -= 1;
    }

    /// Removes the character under the cursor (delete).
    pub fn delete_char_at_cursor(&mut self) {
        if self.cursor_position < self.input_len() {
            let at = byte_index(self.manager.pending_input(), self.cursor_position);
            self.manager.pending_input_mut().remove(at);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.input_len() {
            self.cursor_position += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.input_len();
    }

    /// Inserts the first line of `text` at the cursor, dropping control characters.
    pub fn paste_text(&mut self, text: &str) {
        let line = text.lines().next().unwrap_or("");
        for c in line.chars().filter(|c| !c.is_control()) {
            self.insert_char(c);
        }
    }

    /// Adds the pending input as a new item.
    ///
    /// Blank input is ignored and leaves the buffer as it was.
    pub fn submit_input(&mut self) -> Option<ItemId> {
        let id = self.manager.submit_pending()?;
        self.cursor_position = 0;
        if let Some(item) = self.manager.items().find(id) {
            self.status_message = Some(format!("Added '{}'", item.name));
        }
        if self.selected.is_none() {
            self.selected = Some(id);
        }
        self.ensure_selection_visible();
        Some(id)
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected.and_then(|id| self.manager.items().position(id))
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.selected.and_then(|id| self.manager.items().find(id))
    }

    pub fn select_index(&mut self, index: usize) {
        if let Some(item) = self.manager.items().get(index) {
            self.selected = Some(item.id);
            self.ensure_selection_visible();
        }
    }

    pub fn select_next(&mut self) {
        let len = self.manager.items().len();
        if len == 0 {
            return;
        }
        let next = match self.selected_index() {
            Some(index) if index + 1 < len => index + 1,
            Some(index) => index,
            None => 0,
        };
        self.select_index(next);
    }

    pub fn select_previous(&mut self) {
        if self.manager.items().is_empty() {
            return;
        }
        let previous = match self.selected_index() {
            Some(index) => index.saturating_sub(1),
            None => 0,
        };
        self.select_index(previous);
    }

    pub fn increase_at(&mut self, index: usize) {
        match self.manager.increase(index) {
            Ok(_) => self.select_index(index),
            Err(e) => warn!(error = %e, "increase ignored"),
        }
    }

    pub fn decrease_at(&mut self, index: usize) {
        match self.manager.decrease(index) {
            Ok(_) => self.select_index(index),
            Err(e) => warn!(error = %e, "decrease ignored"),
        }
    }

    pub fn increase_selected(&mut self) {
        if let Some(index) = self.selected_index() {
            self.increase_at(index);
        }
    }

    pub fn decrease_selected(&mut self) {
        if let Some(index) = self.selected_index() {
            self.decrease_at(index);
        }
    }

    pub fn reset_counts(&mut self) {
        let items = self.manager.reset_counts();
        self.status_message = Some(format!("Reset {} counter{}", items, plural(items)));
    }

    pub fn request_clear(&mut self) {
        self.manager.request_clear();
    }

    pub fn confirm_clear(&mut self) {
        match self.manager.confirm_clear() {
            Ok(removed) => {
                self.selected = None;
                self.list_scroll = 0;
                self.status_message = Some(format!("Cleared {} item{}", removed, plural(removed)));
            }
            Err(DomainError::ClearNotRequested) => {}
            Err(e) => warn!(error = %e, "clear failed"),
        }
    }

    pub fn cancel_clear(&mut self) {
        self.manager.cancel_clear();
    }

    pub fn open_help(&mut self) {
        self.mode = AppMode::Help;
        self.help_scroll = 0;
    }

    pub fn close_help(&mut self) {
        self.mode = AppMode::Normal;
    }

    pub fn update_viewport_size(&mut self, rows: usize) {
        self.viewport_rows = rows.max(1);
        self.ensure_selection_visible();
    }

    /// Scrolls the list so the selected row is on screen.
    pub fn ensure_selection_visible(&mut self) {
        let Some(index) = self.selected_index() else {
            return;
        };
        if index < self.list_scroll {
            self.list_scroll = index;
        } else if index >= self.list_scroll + self.viewport_rows {
            self.list_scroll = index + 1 - self.viewport_rows;
        }
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DialogState;

    fn app_with(names: &[&str]) -> App {
        let mut app = App::default();
        for name in names {
            app.manager.set_pending_input(name.to_string());
            app.submit_input().unwrap();
        }
        app.status_message = None;
        app
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.insert_char(c);
        }
    }

    #[test]
    fn test_app_default() {
        let app = App::default();
        assert!(matches!(app.mode, AppMode::Normal));
        assert!(app.manager.items().is_empty());
        assert!(app.pending_input().is_empty());
        assert_eq!(app.cursor_position, 0);
        assert!(app.status_message.is_none());
        assert_eq!(app.title, DEFAULT_TITLE);
        assert_eq!(app.placeholder, DEFAULT_PLACEHOLDER);
        assert_eq!(app.empty_message, DEFAULT_EMPTY_MESSAGE);
    }

    #[test]
    fn test_with_labels() {
        let app = App::with_labels("Groceries".into(), "Item".into(), "Nothing yet".into());
        assert_eq!(app.title, "Groceries");
        assert_eq!(app.placeholder, "Item");
        assert_eq!(app.empty_message, "Nothing yet");
        assert!(matches!(app.mode, AppMode::Normal));
    }

    #[test]
    fn test_typing_and_submit() {
        let mut app = App::default();
        app.start_editing();
        type_text(&mut app, "Milk");
        assert_eq!(app.pending_input(), "Milk");
        assert_eq!(app.cursor_position, 4);

        let id = app.submit_input().unwrap();

        assert_eq!(app.manager.items().len(), 1);
        let item = app.manager.items().get(0).unwrap();
        assert_eq!(item.name, "Milk");
        assert_eq!(item.count, 0);
        assert!(app.pending_input().is_empty());
        assert_eq!(app.cursor_position, 0);
        assert_eq!(app.selected, Some(id));
        assert_eq!(app.status_message.as_deref(), Some("Added 'Milk'"));
        assert!(matches!(app.mode, AppMode::Editing));
    }

    #[test]
    fn test_submit_blank_keeps_buffer() {
        let mut app = App::default();
        app.start_editing();
        type_text(&mut app, "   ");

        assert_eq!(app.submit_input(), None);
        assert_eq!(app.pending_input(), "   ");
        assert_eq!(app.cursor_position, 3);
        assert!(app.manager.items().is_empty());
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_stop_editing_retains_buffer() {
        let mut app = App::default();
        app.start_editing();
        type_text(&mut app, "Bre");
        app.stop_editing();

        assert!(matches!(app.mode, AppMode::Normal));
        assert_eq!(app.pending_input(), "Bre");

        app.start_editing();
        assert_eq!(app.cursor_position, 3);
    }

    #[test]
    fn test_cursor_editing_with_multibyte_chars() {
        let mut app = App::default();
        app.start_editing();
        type_text(&mut app, "café");
        app.move_cursor_left();
        app.insert_char('x');
        assert_eq!(app.pending_input(), "cafxé");

        app.move_cursor_end();
        app.delete_char_before_cursor();
        assert_eq!(app.pending_input(), "cafx");

        app.move_cursor_home();
        app.delete_char_at_cursor();
        assert_eq!(app.pending_input(), "afx");
        assert_eq!(app.cursor_position, 0);

        app.delete_char_before_cursor();
        assert_eq!(app.pending_input(), "afx");

        app.move_cursor_right();
        app.move_cursor_right();
        app.move_cursor_right();
        app.move_cursor_right();
        assert_eq!(app.cursor_position, 3);
        app.delete_char_at_cursor();
        assert_eq!(app.pending_input(), "afx");
    }

    #[test]
    fn test_paste_text_uses_first_line() {
        let mut app = App::default();
        app.start_editing();
        type_text(&mut app, "[]");
        app.move_cursor_left();
        app.paste_text("Oat\tmilk\nsecond line");

        assert_eq!(app.pending_input(), "[Oatmilk]");
        assert_eq!(app.cursor_position, 8);
    }

    #[test]
    fn test_selection_navigation() {
        let mut app = app_with(&["a", "b", "c"]);
        assert_eq!(app.selected_index(), Some(0));

        app.select_next();
        app.select_next();
        assert_eq!(app.selected_index(), Some(2));
        app.select_next();
        assert_eq!(app.selected_index(), Some(2));

        app.select_previous();
        assert_eq!(app.selected_item().unwrap().name, "b");
        app.select_previous();
        app.select_previous();
        assert_eq!(app.selected_index(), Some(0));
    }

    #[test]
    fn test_selection_on_empty_list() {
        let mut app = App::default();
        app.select_next();
        app.select_previous();
        app.increase_selected();
        app.decrease_selected();
        assert_eq!(app.selected, None);
    }

    #[test]
    fn test_selection_survives_appends() {
        let mut app = app_with(&["a"]);
        let first = app.selected;
        app.manager.set_pending_input("b".to_string());
        app.submit_input();
        assert_eq!(app.selected, first);
    }

    #[test]
    fn test_increase_decrease_selected() {
        let mut app = app_with(&["a", "b"]);
        app.select_next();
        app.increase_selected();
        app.increase_selected();
        app.decrease_selected();

        let counts: Vec<u64> = app.manager.items().iter().map(|i| i.count).collect();
        assert_eq!(counts, vec![0, 1]);

        app.decrease_selected();
        app.decrease_selected();
        assert_eq!(app.selected_item().unwrap().count, 0);
    }

    #[test]
    fn test_increase_at_selects_row() {
        let mut app = app_with(&["a", "b", "c"]);
        app.increase_at(2);
        assert_eq!(app.selected_index(), Some(2));
        assert_eq!(app.manager.items().get(2).unwrap().count, 1);

        app.increase_at(9);
        assert_eq!(app.selected_index(), Some(2));
    }

    #[test]
    fn test_reset_counts_sets_status() {
        let mut app = app_with(&["a", "b"]);
        app.increase_at(0);
        app.increase_at(1);
        app.reset_counts();

        assert_eq!(app.manager.items().total_count(), 0);
        assert_eq!(app.status_message.as_deref(), Some("Reset 2 counters"));
    }

    #[test]
    fn test_clear_flow() {
        let mut app = app_with(&["a", "b", "c"]);
        app.request_clear();
        assert_eq!(app.manager.dialog(), DialogState::Open);

        app.cancel_clear();
        assert_eq!(app.manager.dialog(), DialogState::Closed);
        assert_eq!(app.manager.items().len(), 3);

        app.request_clear();
        app.confirm_clear();
        assert!(app.manager.items().is_empty());
        assert_eq!(app.manager.dialog(), DialogState::Closed);
        assert_eq!(app.selected, None);
        assert_eq!(app.list_scroll, 0);
        assert_eq!(app.status_message.as_deref(), Some("Cleared 3 items"));
    }

    #[test]
    fn test_confirm_without_request_does_nothing() {
        let mut app = app_with(&["a"]);
        app.confirm_clear();
        assert_eq!(app.manager.items().len(), 1);
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_help_mode_transitions() {
        let mut app = App::default();
        app.help_scroll = 4;
        app.open_help();
        assert!(matches!(app.mode, AppMode::Help));
        assert_eq!(app.help_scroll, 0);
        app.close_help();
        assert!(matches!(app.mode, AppMode::Normal));
    }

    #[test]
    fn test_scroll_follows_selection() {
        let names: Vec<String> = (0..10).map(|i| format!("item {i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let mut app = app_with(&refs);
        app.update_viewport_size(3);

        for _ in 0..5 {
            app.select_next();
        }
        assert_eq!(app.selected_index(), Some(5));
        assert_eq!(app.list_scroll, 3);

        for _ in 0..5 {
            app.select_previous();
        }
        assert_eq!(app.list_scroll, 0);
    }

    #[test]
    fn test_viewport_never_zero() {
        let mut app = App::default();
        app.update_viewport_size(0);
        assert_eq!(app.viewport_rows, 1);
    }
}
