//! Backpack Flow Tests
//!
//! Store + persistence wired together the way the UI drives them.

use std::cell::Cell;

use backpack_core::{
    format_kg, BackpackConfig, Collection, ItemDraft, ItemId, ItemStore, KeyValueStorage,
    MemoryStorage, Persistence, StorageResult,
};

/// Memory storage that counts writes
#[derive(Default)]
struct CountingStorage {
    inner: MemoryStorage,
    writes: Cell<usize>,
}

impl KeyValueStorage for CountingStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        self.writes.set(self.writes.get() + 1);
        self.inner.set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        self.inner.remove_item(key)
    }
}

fn ids(collection: &Collection) -> Vec<ItemId> {
    collection.iter().map(|item| item.id).collect()
}

#[test]
fn test_seed_add_toggle_clear() {
    let config = BackpackConfig::default();
    let persistence = Persistence::from_config(MemoryStorage::new(), &config);

    let mut store = ItemStore::new(persistence.load());
    assert_eq!(store.collection().len(), 3);
    assert_eq!(store.collection().total_qty(), 4);
    assert_eq!(format_kg(store.collection().total_weight()), "2.30");

    let map = store.add(&ItemDraft::new("Map", "1", "0.1")).unwrap();
    persistence.save(store.collection());
    assert_eq!(store.collection().len(), 4);
    assert_eq!(store.collection().items()[0].name, "Map");
    assert_eq!(store.collection().total_qty(), 5);
    assert_eq!(format_kg(store.collection().total_weight()), "2.40");

    assert!(store.toggle_packed(map));
    persistence.save(store.collection());

    assert_eq!(store.clear_packed(), 2);
    persistence.save(store.collection());
    assert_eq!(ids(store.collection()), vec![1, 3]);

    // A fresh session sees the same thing
    let reloaded = ItemStore::new(persistence.load());
    assert_eq!(reloaded.collection(), store.collection());
}

#[test]
fn test_state_survives_reload_and_ids_stay_unique() {
    let storage = MemoryStorage::new();
    let persistence = Persistence::new(&storage, "backpack_items_v1");

    let mut store = ItemStore::new(persistence.load());
    let first = store.add(&ItemDraft::new("Tent", "1", "2.1")).unwrap();
    persistence.save(store.collection());

    let mut next_session = ItemStore::new(Persistence::new(&storage, "backpack_items_v1").load());
    let second = next_session.add(&ItemDraft::new("Stove", "1", "0.8")).unwrap();
    assert_ne!(first, second);
    assert_eq!(next_session.collection().duplicate_id(), None);
    assert_eq!(next_session.collection().len(), 5);
}

#[test]
fn test_corrupt_slot_then_reset() {
    let storage = MemoryStorage::with_slot("backpack_items_v1", "[{\"oops\"");
    let persistence = Persistence::new(&storage, "backpack_items_v1");

    let mut store = ItemStore::new(persistence.load());
    assert_eq!(store.collection(), &Collection::seed());

    store.remove(1);
    store.remove(2);
    store.remove(3);
    assert!(store.collection().is_empty());
    persistence.save(store.collection());
    assert_eq!(storage.get_item("backpack_items_v1").unwrap().as_deref(), Some("[]"));

    // Empty is a valid saved state, not a reason to fall back
    assert!(persistence.load().is_empty());

    store.reset();
    persistence.save(store.collection());
    assert_eq!(persistence.load(), Collection::seed());
}

#[test]
fn test_largest_id_in_slot_does_not_collide() {
    let raw = r#"[{"id":18446744073709551615,"name":"Lantern","qty":1,"weight":0.7,"packed":false}]"#;
    let persistence = Persistence::new(MemoryStorage::with_slot("backpack_items_v1", raw), "backpack_items_v1");

    let mut store = ItemStore::new(persistence.load());
    assert_eq!(store.collection().len(), 1);

    let map = store.add(&ItemDraft::new("Map", "1", "0.1")).unwrap();
    let rope = store.add(&ItemDraft::new("Rope", "1", "1.2")).unwrap();
    assert_ne!(map, ItemId::MAX);
    assert_ne!(map, rope);
    assert_eq!(store.collection().duplicate_id(), None);

    persistence.save(store.collection());
    assert_eq!(persistence.load(), *store.collection());
}

#[test]
fn test_only_real_changes_are_written() {
    let storage = CountingStorage::default();
    let persistence = Persistence::new(&storage, "backpack_items_v1");
    let mut store = ItemStore::new(persistence.load());

    // First run writes the loaded state, like the UI effect on mount
    let last = persistence.save_changed(store.collection(), None);
    assert_eq!(storage.writes.get(), 1);

    // Unknown id: the store reports no change and the payload is identical
    assert!(!store.toggle_packed(404));
    let last = persistence.save_changed(store.collection(), last);
    assert_eq!(storage.writes.get(), 1);

    // Blank name: same
    assert_eq!(store.add(&ItemDraft::new("  ", "2", "1")), None);
    let last = persistence.save_changed(store.collection(), last);
    assert_eq!(storage.writes.get(), 1);

    assert!(store.toggle_packed(1));
    let last = persistence.save_changed(store.collection(), last);
    assert_eq!(storage.writes.get(), 2);
    assert!(persistence.load().get(1).unwrap().packed);

    // Toggling back is a real change even though it restores an earlier state
    assert!(store.toggle_packed(1));
    persistence.save_changed(store.collection(), last);
    assert_eq!(storage.writes.get(), 3);
    assert_eq!(persistence.load(), Collection::seed());
}
