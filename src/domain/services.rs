//! List management services.
//!
//! This module provides the state machine behind the list view: the
//! ordered items with their counters, the pending text of the add box,
//! and the confirmation gate in front of the destructive clear action.

use super::errors::{DomainError, DomainResult};
use super::models::{ItemId, ItemList};
use tracing::{debug, info};

/// Whether the clear-list confirmation dialog is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Closed,
    Open,
}

/// Owns the items, the pending input buffer and the clear dialog.
///
/// Every transition is synchronous. Text that is empty after trimming is
/// silently rejected, and decrementing a zero counter does nothing.
///
/// # Examples
///
/// ```
/// use tally::domain::{DialogState, ListManager};
///
/// let mut manager = ListManager::new();
/// manager.set_pending_input("Milk".to_string());
/// let id = manager.submit_pending().unwrap();
///
/// assert_eq!(manager.items().len(), 1);
/// assert_eq!(manager.items().find(id).unwrap().count, 0);
/// assert!(manager.pending_input().is_empty());
///
/// manager.request_clear();
/// assert_eq!(manager.dialog(), DialogState::Open);
/// assert_eq!(manager.confirm_clear(), Ok(1));
/// assert!(manager.items().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ListManager {
    items: ItemList,
    pending_input: String,
    dialog: DialogState,
}

impl ListManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &ItemList {
        &self.items
    }

    #[cfg(test)]
    pub(crate) fn items_mut(&mut self) -> &mut ItemList {
        &mut self.items
    }

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    pub fn set_pending_input(&mut self, text: String) {
        self.pending_input = text;
    }

    pub fn pending_input_mut(&mut self) -> &mut String {
        &mut self.pending_input
    }

    pub fn dialog(&self) -> DialogState {
        self.dialog
    }

    pub fn is_clear_confirmation_open(&self) -> bool {
        self.dialog == DialogState::Open
    }

    /// Appends a new item named `text` with a zero count.
    ///
    /// The name is stored as typed. Returns `None` without touching any
    /// state when `text` is blank; otherwise the pending buffer is cleared.
    pub fn add_item(&mut self, text: &str) -> Option<ItemId> {
        if text.trim().is_empty() {
            debug!("ignoring blank item name");
            return None;
        }

        let id = self.items.push(text.to_string());
        self.pending_input.clear();
        info!(%id, name = text, "item added");
        Some(id)
    }

    /// Adds an item from the pending buffer.
    pub fn submit_pending(&mut self) -> Option<ItemId> {
        let text = self.pending_input.clone();
        self.add_item(&text)
    }

    pub fn increase(&mut self, index: usize) -> DomainResult<u64> {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or(DomainError::ItemIndexOutOfRange { index, len })?;
        let count = item.increase();
        debug!(id = %item.id, count, "count increased");
        Ok(count)
    }

    pub fn decrease(&mut self, index: usize) -> DomainResult<u64> {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or(DomainError::ItemIndexOutOfRange { index, len })?;
        let count = item.decrease();
        debug!(id = %item.id, count, "count decreased");
        Ok(count)
    }

    pub fn increase_item(&mut self, id: ItemId) -> DomainResult<u64> {
        let index = self.items.position(id).ok_or(DomainError::UnknownItem(id))?;
        self.increase(index)
    }

    pub fn decrease_item(&mut self, id: ItemId) -> DomainResult<u64> {
        let index = self.items.position(id).ok_or(DomainError::UnknownItem(id))?;
        self.decrease(index)
    }

    /// Zeroes every counter, keeping names and order. Returns the item count.
    pub fn reset_counts(&mut self) -> usize {
        self.items.reset_counts();
        info!(items = self.items.len(), "counts reset");
        self.items.len()
    }

    pub fn request_clear(&mut self) {
        self.dialog = DialogState::Open;
        debug!("clear confirmation opened");
    }

    /// Empties the list and closes the dialog.
    ///
    /// Only valid while the dialog is open; returns the number of removed items.
    pub fn confirm_clear(&mut self) -> DomainResult<usize> {
        if self.dialog != DialogState::Open {
            return Err(DomainError::ClearNotRequested);
        }

        let removed = self.items.clear();
        self.dialog = DialogState::Closed;
        info!(removed, "list cleared");
        Ok(removed)
    }

    /// Closes the dialog without touching the items. Returns whether it was open.
    pub fn cancel_clear(&mut self) -> bool {
        let was_open = self.dialog == DialogState::Open;
        self.dialog = DialogState::Closed;
        if was_open {
            debug!("clear cancelled");
        }
        was_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager_with(names: &[&str]) -> ListManager {
        let mut manager = ListManager::new();
        for name in names {
            manager.add_item(name).unwrap();
        }
        manager
    }

    fn counts(manager: &ListManager) -> Vec<u64> {
        manager.items().iter().map(|item| item.count).collect()
    }

    fn names(manager: &ListManager) -> Vec<String> {
        manager.items().iter().map(|item| item.name.clone()).collect()
    }

    #[test]
    fn test_new_manager_is_empty() {
        let manager = ListManager::new();
        assert!(manager.items().is_empty());
        assert!(manager.pending_input().is_empty());
        assert_eq!(manager.dialog(), DialogState::Closed);
        assert!(!manager.is_clear_confirmation_open());
    }

    #[test]
    fn test_add_item_appends_with_zero_count() {
        let mut manager = manager_with(&["Eggs"]);
        manager.set_pending_input("Milk".to_string());

        let id = manager.submit_pending();

        assert!(id.is_some());
        assert_eq!(manager.items().len(), 2);
        let last = manager.items().get(1).unwrap();
        assert_eq!(last.name, "Milk");
        assert_eq!(last.count, 0);
        assert_eq!(Some(last.id), id);
        assert!(manager.pending_input().is_empty());
    }

    #[test]
    fn test_add_blank_item_is_ignored() {
        let mut manager = manager_with(&["Eggs"]);

        manager.set_pending_input(String::new());
        assert_eq!(manager.submit_pending(), None);
        assert_eq!(manager.pending_input(), "");

        manager.set_pending_input("   ".to_string());
        assert_eq!(manager.submit_pending(), None);
        assert_eq!(manager.pending_input(), "   ");

        assert_eq!(names(&manager), vec!["Eggs"]);
    }

    #[test]
    fn test_add_item_keeps_name_verbatim() {
        let mut manager = ListManager::new();
        manager.add_item("  Milk ").unwrap();
        assert_eq!(manager.items().get(0).unwrap().name, "  Milk ");
    }

    #[test]
    fn test_duplicate_names_allowed() {
        let manager = manager_with(&["Milk", "Milk"]);
        assert_eq!(names(&manager), vec!["Milk", "Milk"]);
        let ids: Vec<ItemId> = manager.items().iter().map(|item| item.id).collect();
        assert_ne!(ids[0], ids[1]);
    }

    #[test]
    fn test_increase_and_decrease() {
        let mut manager = manager_with(&["a", "b"]);

        assert_eq!(manager.increase(1), Ok(1));
        assert_eq!(manager.increase(1), Ok(2));
        assert_eq!(manager.decrease(1), Ok(1));
        assert_eq!(counts(&manager), vec![0, 1]);
    }

    #[test]
    fn test_decrease_at_zero_stays_zero() {
        let mut manager = manager_with(&["a"]);
        assert_eq!(manager.decrease(0), Ok(0));
        assert_eq!(counts(&manager), vec![0]);
    }

    #[test]
    fn test_count_never_negative_over_mixed_sequence() {
        let mut manager = manager_with(&["a"]);
        let ops = [true, false, false, false, true, true, false, false, false, true];
        let mut expected: u64 = 0;

        for up in ops {
            if up {
                expected += 1;
                manager.increase(0).unwrap();
            } else {
                expected = expected.saturating_sub(1);
                manager.decrease(0).unwrap();
            }
            assert_eq!(manager.items().get(0).unwrap().count, expected);
        }
    }

    #[test]
    fn test_index_out_of_range() {
        let mut manager = manager_with(&["a"]);
        assert_eq!(
            manager.increase(3),
            Err(DomainError::ItemIndexOutOfRange { index: 3, len: 1 })
        );
        assert_eq!(
            manager.decrease(1),
            Err(DomainError::ItemIndexOutOfRange { index: 1, len: 1 })
        );
    }

    #[test]
    fn test_increase_by_id() {
        let mut manager = manager_with(&["a", "b"]);
        let id = manager.items().get(1).unwrap().id;

        assert_eq!(manager.increase_item(id), Ok(1));
        assert_eq!(manager.decrease_item(id), Ok(0));

        manager.request_clear();
        manager.confirm_clear().unwrap();
        assert_eq!(manager.increase_item(id), Err(DomainError::UnknownItem(id)));
    }

    #[test]
    fn test_reset_counts_preserves_names_and_order() {
        let mut manager = manager_with(&["a", "b", "c"]);
        manager.increase(0).unwrap();
        manager.increase(2).unwrap();
        manager.increase(2).unwrap();

        assert_eq!(manager.reset_counts(), 3);
        assert_eq!(counts(&manager), vec![0, 0, 0]);
        assert_eq!(names(&manager), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_request_then_cancel_clear() {
        let mut manager = manager_with(&["a", "b"]);
        manager.increase(0).unwrap();

        manager.request_clear();
        assert_eq!(manager.dialog(), DialogState::Open);
        assert_eq!(manager.items().len(), 2);

        assert!(manager.cancel_clear());
        assert_eq!(manager.dialog(), DialogState::Closed);
        assert_eq!(names(&manager), vec!["a", "b"]);
        assert_eq!(counts(&manager), vec![1, 0]);
    }

    #[test]
    fn test_request_then_confirm_clear() {
        let mut manager = manager_with(&["a", "b"]);

        manager.request_clear();
        assert_eq!(manager.confirm_clear(), Ok(2));
        assert!(manager.items().is_empty());
        assert_eq!(manager.dialog(), DialogState::Closed);
    }

    #[test]
    fn test_confirm_without_request_is_rejected() {
        let mut manager = manager_with(&["a"]);
        assert_eq!(manager.confirm_clear(), Err(DomainError::ClearNotRequested));
        assert_eq!(manager.items().len(), 1);
    }

    #[test]
    fn test_cancel_when_closed_reports_false() {
        let mut manager = ListManager::new();
        assert!(!manager.cancel_clear());
        assert_eq!(manager.dialog(), DialogState::Closed);
    }

    #[test]
    fn test_dialog_cycle_repeats() {
        let mut manager = manager_with(&["a"]);
        for _ in 0..3 {
            manager.request_clear();
            manager.cancel_clear();
        }
        manager.request_clear();
        assert_eq!(manager.confirm_clear(), Ok(1));
        manager.add_item("b").unwrap();
        manager.request_clear();
        assert!(manager.is_clear_confirmation_open());
    }
}
