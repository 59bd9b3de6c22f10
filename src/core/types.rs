//! Strongly-typed wrappers for catalog concepts
//!
//! Card ids and card names travel through every stage of the engine. Wrapping
//! them keeps an id from being mixed up with a quantity and makes the
//! name-normalization rule live in one place.

use deunicode::deunicode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Client-assigned identifier of a single card printing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(u32);

impl CardId {
    pub fn new(id: u32) -> Self {
        CardId(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        CardId(id)
    }
}

/// Card name, shared by every printing of the card
///
/// Decklists reference names, never printings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardName(String);

impl CardName {
    pub fn new(s: impl Into<String>) -> Self {
        CardName(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lookup key: ASCII-folded, lowercased, trimmed
    pub fn key(&self) -> String {
        name_key(&self.0)
    }
}

/// Normalize a card name for case- and accent-insensitive lookups
///
/// "Lim-Dûl's Vault" and "lim-dul's vault" share a key.
pub fn name_key(name: &str) -> String {
    deunicode(name.trim()).to_lowercase()
}

impl fmt::Display for CardName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CardName {
    fn from(s: String) -> Self {
        CardName(s)
    }
}

impl From<&str> for CardName {
    fn from(s: &str) -> Self {
        CardName(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(68_412);
        assert_eq!(id.as_u32(), 68_412);
        assert_eq!(id.to_string(), "68412");
        assert_eq!(CardId::from(5), CardId::new(5));
    }

    #[test]
    fn test_card_name_key() {
        let name = CardName::new("Lim-Dûl's Vault");
        assert_eq!(name.as_str(), "Lim-Dûl's Vault");
        assert_eq!(name.key(), "lim-dul's vault");
        assert_eq!(name_key("  SHOCK "), "shock");
    }
}
