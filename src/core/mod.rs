//! Core catalog types

pub mod card;
pub mod colors;
pub mod rarity;
pub mod types;

pub use card::{Card, CardIdentity, Set};
pub use colors::{Color, Colors};
pub use rarity::Rarity;
pub use types::{name_key, CardId, CardName};
