//! Backpack Core
//!
//! Layered like the app it serves:
//! - domain: Item, Collection, drafts and derived totals
//! - store: the mutation operations over a Collection
//! - persistence: key-value storage contract and the load/save adapter

pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod store;

pub use config::BackpackConfig;
pub use domain::{format_kg, Collection, Item, ItemDraft, ItemId, NewItem};
pub use error::{StorageError, StorageResult};
pub use persistence::{KeyValueStorage, MemoryStorage, Persistence};
pub use store::{IdAllocator, ItemStore};
