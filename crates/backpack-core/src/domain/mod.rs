//! Domain Layer
//!
//! Items, the ordered collection that holds them, and the totals derived from it.
//! This layer has NO external dependencies (except serde for serialization).

mod collection;
mod item;

pub use collection::{format_kg, Collection};
pub use item::{Item, ItemDraft, ItemId, NewItem};
