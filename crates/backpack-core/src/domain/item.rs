//! Item Entity
//!
//! One packable entry, plus the raw form input it is created from.

use serde::{Deserialize, Serialize};

/// Unique identifier of an item. Stored as a plain JSON number.
pub type ItemId = u64;

/// A packable entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier, never changes after creation
    pub id: ItemId,
    /// Trimmed, non-empty label
    pub name: String,
    /// Quantity, at least 1
    pub qty: u32,
    /// Weight of a single unit in kg, at least 0
    pub weight: f64,
    /// Whether the item is already in the backpack
    pub packed: bool,
}

impl Item {
    /// Create an unpacked item from normalized input
    pub fn new(id: ItemId, new_item: NewItem) -> Self {
        Self {
            id,
            name: new_item.name,
            qty: new_item.qty,
            weight: new_item.weight,
            packed: false,
        }
    }

    /// Why this item could not have been produced by the store, if it couldn't
    pub fn defect(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() {
            Some("blank name")
        } else if self.qty < 1 {
            Some("quantity below 1")
        } else if !self.weight.is_finite() || self.weight.is_sign_negative() {
            Some("negative or non-finite weight")
        } else {
            None
        }
    }

    /// Weight of all units of this item in kg
    pub fn subtotal(&self) -> f64 {
        f64::from(self.qty) * self.weight
    }
}

/// Validated input for a new item
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub qty: u32,
    pub weight: f64,
}

/// Uncommitted add-form values, kept as the raw text the user typed
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ItemDraft {
    pub name: String,
    pub qty: String,
    pub weight: String,
}

impl ItemDraft {
    pub fn new(name: impl Into<String>, qty: impl Into<String>, weight: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            qty: qty.into(),
            weight: weight.into(),
        }
    }

    /// Coerce the draft into a `NewItem`.
    ///
    /// Returns `None` when the trimmed name is empty. Numeric fields never fail:
    /// a bad quantity becomes 1 and a bad weight becomes 0.
    pub fn normalize(&self) -> Option<NewItem> {
        let name = self.name.trim();
        if name.is_empty() {
            return None;
        }
        Some(NewItem {
            name: name.to_string(),
            qty: coerce_qty(&self.qty),
            weight: coerce_weight(&self.weight),
        })
    }
}

/// Fractional quantities truncate; anything below 1 or unparseable is 1.
fn coerce_qty(raw: &str) -> u32 {
    match raw.trim().parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 1.0 => n.min(f64::from(u32::MAX)) as u32,
        _ => 1,
    }
}

fn coerce_weight(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(n) if n.is_finite() && n > 0.0 => n,
        _ => 0.0,
    }
}
