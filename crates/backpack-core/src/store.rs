//! Item Store
//!
//! Owns the current `Collection` and applies the five user operations to it.
//! Each operation computes a fresh collection and swaps it in whole; the
//! return value says whether anything changed so callers can skip work.
//! Nothing here fails: bad input is a no-op or gets a default.

use log::debug;

use crate::domain::{Collection, Item, ItemDraft, ItemId};

/// Hands out item ids from a monotonic counter.
///
/// The counter is kept strictly above every id in the collection it was
/// last synced with, so two adds in quick succession never collide. Once the
/// counter reaches `ItemId::MAX` it stops and ids are taken from the lowest
/// gap in the held collection instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdAllocator {
    next: ItemId,
}

impl IdAllocator {
    pub fn for_collection(collection: &Collection) -> Self {
        let mut allocator = Self { next: 1 };
        allocator.sync(collection);
        allocator
    }

    /// Move the counter past the largest id in `collection`
    pub fn sync(&mut self, collection: &Collection) {
        if let Some(max) = collection.max_id() {
            self.next = self.next.max(max.saturating_add(1));
        }
    }

    /// Next id not present in `held`
    pub fn allocate(&mut self, held: &Collection) -> ItemId {
        match self.next.checked_add(1) {
            Some(after) => {
                let id = self.next;
                self.next = after;
                id
            }
            None => lowest_free_id(held),
        }
    }

    #[cfg(test)]
    fn peek(&self) -> ItemId {
        self.next
    }
}

fn lowest_free_id(held: &Collection) -> ItemId {
    let mut taken: Vec<ItemId> = held.iter().map(|item| item.id).collect();
    taken.sort_unstable();
    let mut candidate = 1;
    for id in taken {
        if id == candidate {
            candidate += 1;
        } else if id > candidate {
            break;
        }
    }
    candidate
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemStore {
    collection: Collection,
    ids: IdAllocator,
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new(Collection::seed())
    }
}

impl ItemStore {
    pub fn new(collection: Collection) -> Self {
        let ids = IdAllocator::for_collection(&collection);
        Self { collection, ids }
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    /// Prepend a new unpacked item built from `draft`.
    ///
    /// Returns the new id, or `None` if the draft's name was blank.
    pub fn add(&mut self, draft: &ItemDraft) -> Option<ItemId> {
        let new_item = draft.normalize()?;
        let id = self.ids.allocate(&self.collection);
        debug!("[STORE] add #{} {:?} qty={} weight={}", id, new_item.name, new_item.qty, new_item.weight);
        self.collection = self.collection.with_prepended(Item::new(id, new_item));
        Some(id)
    }

    pub fn toggle_packed(&mut self, id: ItemId) -> bool {
        self.replace_with(self.collection.with_toggled(id), "toggle_packed")
    }

    pub fn remove(&mut self, id: ItemId) -> bool {
        self.replace_with(self.collection.without(id), "remove")
    }

    /// Drop every packed item. Returns how many were removed.
    pub fn clear_packed(&mut self) -> usize {
        let before = self.collection.len();
        self.replace_with(self.collection.without_packed(), "clear_packed");
        before - self.collection.len()
    }

    /// Throw away everything and go back to the sample set
    pub fn reset(&mut self) {
        debug!("[STORE] reset to seed");
        self.collection = Collection::seed();
        self.ids.sync(&self.collection);
    }

    fn replace_with(&mut self, next: Option<Collection>, op: &str) -> bool {
        match next {
            Some(next) => {
                debug!("[STORE] {}: {} -> {} items", op, self.collection.len(), next.len());
                self.collection = next;
                true
            }
            None => false,
        }
    }
}
