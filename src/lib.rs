//! MTG Arena deck advisor
//!
//! Given a card database, a player's collection and the decklists of a
//! format, works out which decks the player is closest to completing, what
//! to play in place of missing cards, and which cards matter most across the
//! format.

pub mod archetype;
pub mod catalog;
pub mod collection;
pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod loader;

pub use archetype::{Archetype, DeckEntry};
pub use catalog::Catalog;
pub use collection::{CardQuantities, Inventory};
pub use config::AdvisorConfig;
pub use engine::{Advisor, FormatReport, ReloadOutcome, ReloadRequest};
pub use error::{AdvisorError, Result};
