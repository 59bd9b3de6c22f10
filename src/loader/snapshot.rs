//! Records handed over by the data collaborators
//!
//! These are the already-parsed shapes of the card database, set metadata,
//! decklists and player inventory. They deserialize from JSON so the binary
//! can read snapshots written by whatever fetches and caches that data.

use crate::core::{Colors, Rarity};
use crate::{AdvisorError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// One set entry of the database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetRecord {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub client_code: String,
    #[serde(default)]
    pub excluded_from_boosters: Vec<String>,
    pub total_cards: u32,
    #[serde(default)]
    pub rarity_counts: BTreeMap<Rarity, u32>,
}

/// One printing entry of the database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardRecord {
    pub id: u32,
    pub name: String,
    pub set_name: String,
    pub collector_number: String,
    pub rarity: Rarity,
    #[serde(default)]
    pub colors: Colors,
    #[serde(default)]
    pub rank: i32,
    #[serde(default)]
    pub type_line: String,
    #[serde(default)]
    pub mana_cost: String,
    #[serde(default)]
    pub cmc: u8,
    #[serde(default)]
    pub image_ref: Option<String>,
}

/// Full database snapshot: sets first, then printings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatabaseSnapshot {
    pub sets: Vec<SetRecord>,
    pub cards: Vec<CardRecord>,
}

/// A decklist before validation
///
/// Zones are ordered `[name, quantity]` pairs rather than maps so that a name
/// listed twice survives deserialization and can be rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchetypeRecord {
    pub name: String,
    pub main_deck: Vec<(String, u32)>,
    #[serde(default)]
    pub sideboard: Vec<(String, u32)>,
}

/// Player collection as exported by the log parser
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    #[serde(default)]
    pub cards: BTreeMap<u32, u32>,
    #[serde(default)]
    pub wildcards: BTreeMap<Rarity, u32>,
}

/// Read and deserialize a JSON file
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        AdvisorError::IoError(std::io::Error::new(
            e.kind(),
            format!("{}: {e}", path.display()),
        ))
    })?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_record_defaults() {
        let json = r#"{
            "id": 70141,
            "name": "Shock",
            "set_name": "Core Set 2020",
            "collector_number": "160",
            "rarity": "common"
        }"#;
        let record: CardRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.rarity, Rarity::Common);
        assert_eq!(record.colors, Colors::COLORLESS);
        assert_eq!(record.cmc, 0);
        assert!(record.image_ref.is_none());
    }

    #[test]
    fn test_archetype_record_keeps_duplicates() {
        let json = r#"{
            "name": "Mono Red",
            "main_deck": [["Shock", 4], ["Shock", 2]]
        }"#;
        let record: ArchetypeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.main_deck.len(), 2);
        assert!(record.sideboard.is_empty());
    }

    #[test]
    fn test_inventory_record() {
        let json = r#"{
            "cards": {"70141": 3, "70142": 1},
            "wildcards": {"common": 12, "mythic": 1}
        }"#;
        let record: InventoryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.cards.get(&70141), Some(&3));
        assert_eq!(record.wildcards.get(&Rarity::MythicRare), Some(&1));
    }
}
