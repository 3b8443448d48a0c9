//! Persistence Layer
//!
//! Key-value storage abstraction and the adapter that keeps a `Collection`
//! in a single named slot.

mod adapter;
mod memory;
mod traits;

pub use adapter::Persistence;
pub use memory::MemoryStorage;
pub use traits::KeyValueStorage;
