//! Items and character inventories.

use serde::{Deserialize, Serialize};

/// An item a character can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Item {
    /// Restores a fixed amount of health when drunk.
    HealingPotion,
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HealingPotion => write!(f, "healing potion"),
        }
    }
}

/// An ordered bag of items.
///
/// Duplicates are allowed and insertion order is acquisition order, which
/// also fixes the display order of grouped counts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the inventory holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of items, counting duplicates.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// All items in acquisition order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Add an item at the end.
    pub fn add(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Remove the first occurrence of an item. Returns false if absent.
    pub fn remove_first(&mut self, item: Item) -> bool {
        match self.items.iter().position(|i| *i == item) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// How many of the given item are held.
    pub fn count(&self, item: Item) -> usize {
        self.items.iter().filter(|i| **i == item).count()
    }

    /// Items grouped with occurrence counts, in first-acquisition order.
    pub fn counts(&self) -> Vec<(Item, usize)> {
        let mut grouped: Vec<(Item, usize)> = Vec::new();
        for item in &self.items {
            match grouped.iter_mut().find(|entry| entry.0 == *item) {
                Some(entry) => entry.1 += 1,
                None => grouped.push((*item, 1)),
            }
        }
        grouped
    }
}
