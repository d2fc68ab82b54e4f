use std::fmt;

/// Stable identifier assigned to an item when it is created.
///
/// Ids grow monotonically for the lifetime of an [`ItemList`] and are never
/// handed out twice, even after the list has been cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub count: u64,
}

impl Item {
    fn new(id: ItemId, name: String) -> Self {
        Self { id, name, count: 0 }
    }

    pub fn increase(&mut self) -> u64 {
        self.count = self.count.saturating_add(1);
        self.count
    }

    /// Decrements the counter, clamping at zero.
    pub fn decrease(&mut self) -> u64 {
        if self.count > 0 {
            self.count -= 1;
        }
        self.count
    }
}

/// Ordered collection of items. Insertion order is display order.
#[derive(Debug, Clone, Default)]
pub struct ItemList {
    items: Vec<Item>,
    next_id: u64,
}

impl ItemList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: String) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        self.items.push(Item::new(id, name));
        id
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Item> {
        self.items.get_mut(index)
    }

    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn find(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn reset_counts(&mut self) {
        for item in &mut self.items {
            item.count = 0;
        }
    }

    /// Removes every item and returns how many were dropped.
    pub fn clear(&mut self) -> usize {
        let removed = self.items.len();
        self.items.clear();
        removed
    }

    pub fn total_count(&self) -> u64 {
        self.items
            .iter()
            .fold(0u64, |acc, item| acc.saturating_add(item.count))
    }
}

impl<'a> IntoIterator for &'a ItemList {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
