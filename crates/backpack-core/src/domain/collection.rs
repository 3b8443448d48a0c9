//! Item Collection
//!
//! Ordered list of items, newest first. Every transformation returns a new
//! `Collection` and leaves `self` untouched; `None` means "nothing changed".

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::item::{Item, ItemId};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection(Vec<Item>);

impl Collection {
    pub fn new(items: Vec<Item>) -> Self {
        Self(items)
    }

    /// The fixed sample set used on first start, on corrupt storage and on reset
    pub fn seed() -> Self {
        Self(vec![
            seed_item(1, "Water Bottle", 1, 0.6, false),
            seed_item(2, "Notebook", 2, 0.4, true),
            seed_item(3, "Jacket", 1, 0.9, false),
        ])
    }

    pub fn items(&self) -> &[Item] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.0.iter().find(|item| item.id == id)
    }

    pub fn max_id(&self) -> Option<ItemId> {
        self.0.iter().map(|item| item.id).max()
    }

    /// First id that appears more than once, if any
    pub fn duplicate_id(&self) -> Option<ItemId> {
        let mut seen = HashSet::with_capacity(self.0.len());
        self.0.iter().map(|item| item.id).find(|id| !seen.insert(*id))
    }

    /// Sum of all quantities
    pub fn total_qty(&self) -> u64 {
        self.0.iter().map(|item| u64::from(item.qty)).sum()
    }

    /// Sum of qty * weight over all items, in kg. Never rounded here.
    pub fn total_weight(&self) -> f64 {
        self.0.iter().map(Item::subtotal).fold(0.0, |total, subtotal| total + subtotal)
    }

    // ========================
    // Transformations
    // ========================

    pub fn with_prepended(&self, item: Item) -> Collection {
        let mut items = Vec::with_capacity(self.0.len() + 1);
        items.push(item);
        items.extend(self.0.iter().cloned());
        Collection(items)
    }

    pub fn with_toggled(&self, id: ItemId) -> Option<Collection> {
        self.get(id)?;
        Some(Collection(
            self.0
                .iter()
                .map(|item| {
                    if item.id == id {
                        Item { packed: !item.packed, ..item.clone() }
                    } else {
                        item.clone()
                    }
                })
                .collect(),
        ))
    }

    pub fn without(&self, id: ItemId) -> Option<Collection> {
        self.get(id)?;
        Some(self.retained(|item| item.id != id))
    }

    pub fn without_packed(&self) -> Option<Collection> {
        if !self.0.iter().any(|item| item.packed) {
            return None;
        }
        Some(self.retained(|item| !item.packed))
    }

    fn retained(&self, keep: impl Fn(&Item) -> bool) -> Collection {
        Collection(self.0.iter().filter(|item| keep(item)).cloned().collect())
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

fn seed_item(id: ItemId, name: &str, qty: u32, weight: f64, packed: bool) -> Item {
    Item {
        id,
        name: name.to_string(),
        qty,
        weight,
        packed,
    }
}

/// Render a weight in kg with two decimals, e.g. `1.70`
pub fn format_kg(weight: f64) -> String {
    // -0.0 + 0.0 is +0.0, so a zero total never renders as "-0.00"
    format!("{:.2}", weight + 0.0)
}
