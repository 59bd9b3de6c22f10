//! Input loaders
//!
//! JSON snapshots of the card database and collection, and plain-text
//! decklists in the client's export format.

pub mod decklist;
pub mod snapshot;

pub use snapshot::{
    read_json, ArchetypeRecord, CardRecord, DatabaseSnapshot, InventoryRecord, SetRecord,
};
