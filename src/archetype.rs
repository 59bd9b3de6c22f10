//! Validated decklists

use crate::core::{name_key, CardName};
use crate::loader::snapshot::ArchetypeRecord;
use crate::{AdvisorError, Result};
use serde::Serialize;

/// A deck entry (card name and count)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeckEntry {
    pub card_name: CardName,
    pub count: u32,
}

/// A named decklist with main deck and sideboard
///
/// Construction rejects a name listed twice within one zone; entries keep
/// decklist order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Archetype {
    pub name: String,
    pub main_deck: Vec<DeckEntry>,
    pub sideboard: Vec<DeckEntry>,
}

impl Archetype {
    pub fn new(
        name: impl Into<String>,
        main_deck: Vec<(String, u32)>,
        sideboard: Vec<(String, u32)>,
    ) -> Result<Self> {
        let name = name.into();
        let main_deck = Self::zone(&name, main_deck)?;
        let sideboard = Self::zone(&name, sideboard)?;
        Ok(Archetype {
            name,
            main_deck,
            sideboard,
        })
    }

    pub fn from_record(record: &ArchetypeRecord) -> Result<Self> {
        Self::new(
            record.name.clone(),
            record.main_deck.clone(),
            record.sideboard.clone(),
        )
    }

    fn zone(archetype: &str, entries: Vec<(String, u32)>) -> Result<Vec<DeckEntry>> {
        let mut zone: Vec<DeckEntry> = Vec::with_capacity(entries.len());
        for (card_name, count) in entries {
            let key = name_key(&card_name);
            if zone.iter().any(|e| e.card_name.key() == key) {
                return Err(AdvisorError::MalformedArchetype {
                    archetype: archetype.to_string(),
                    card: card_name,
                });
            }
            zone.push(DeckEntry {
                card_name: CardName::new(card_name.trim()),
                count,
            });
        }
        Ok(zone)
    }

    pub fn main_qty(&self, name: &str) -> u32 {
        Self::qty_in(&self.main_deck, name)
    }

    pub fn side_qty(&self, name: &str) -> u32 {
        Self::qty_in(&self.sideboard, name)
    }

    fn qty_in(zone: &[DeckEntry], name: &str) -> u32 {
        let key = name_key(name);
        zone.iter()
            .find(|e| e.card_name.key() == key)
            .map(|e| e.count)
            .unwrap_or(0)
    }

    /// Distinct names across both zones, main deck first, in decklist order
    pub fn names(&self) -> Vec<&CardName> {
        let mut names: Vec<&CardName> = self.main_deck.iter().map(|e| &e.card_name).collect();
        for entry in &self.sideboard {
            if self.main_qty(entry.card_name.as_str()) == 0
                && !names.iter().any(|n| n.key() == entry.card_name.key())
            {
                names.push(&entry.card_name);
            }
        }
        names
    }

    /// Total cards in main deck
    pub fn total_cards(&self) -> u32 {
        zone_size(&self.main_deck)
    }

    /// Total cards in sideboard
    pub fn sideboard_size(&self) -> u32 {
        zone_size(&self.sideboard)
    }
}

fn zone_size(zone: &[DeckEntry]) -> u32 {
    zone.iter().fold(0u32, |total, e| total.saturating_add(e.count))
}
