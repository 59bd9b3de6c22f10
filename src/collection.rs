//! Player collection: owned printings and wildcards

use crate::catalog::Catalog;
use crate::core::{CardId, Rarity};
use crate::loader::snapshot::InventoryRecord;
use crate::Result;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Owned card copies and wildcards
///
/// The engine never mutates the caller's inventory. Each reload pass works on
/// its own [`Inventory::working_copy`], which allocation and substitution
/// drain as they hand out copies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    cards: FxHashMap<CardId, u32>,
    wildcards: BTreeMap<Rarity, u32>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_record(record: &InventoryRecord) -> Self {
        let mut inventory = Inventory::new();
        for (&id, &qty) in &record.cards {
            inventory.add(CardId::new(id), qty);
        }
        inventory.wildcards = record.wildcards.clone();
        inventory
    }

    pub fn add(&mut self, id: CardId, qty: u32) {
        if qty > 0 {
            let owned = self.cards.entry(id).or_insert(0);
            *owned = owned.saturating_add(qty);
        }
    }

    pub fn set_wildcards(&mut self, rarity: Rarity, qty: u32) {
        self.wildcards.insert(rarity, qty);
    }

    /// Copies owned of one printing
    pub fn owned(&self, id: CardId) -> u32 {
        self.cards.get(&id).copied().unwrap_or(0)
    }

    /// Copies owned across every printing of a name
    pub fn owned_name(&self, catalog: &Catalog, name: &str) -> Result<u32> {
        Ok(catalog
            .printings(name)?
            .iter()
            .fold(0u32, |total, id| total.saturating_add(self.owned(*id))))
    }

    pub fn wildcards(&self, rarity: Rarity) -> u32 {
        self.wildcards.get(&rarity).copied().unwrap_or(0)
    }

    /// Remove up to `qty` copies of a printing, returning how many were taken
    pub fn take(&mut self, id: CardId, qty: u32) -> u32 {
        let Some(owned) = self.cards.get_mut(&id) else {
            return 0;
        };
        let taken = qty.min(*owned);
        *owned -= taken;
        if *owned == 0 {
            self.cards.remove(&id);
        }
        taken
    }

    /// Printings with at least one copy left
    pub fn iter(&self) -> impl Iterator<Item = (CardId, u32)> + '_ {
        self.cards.iter().map(|(id, qty)| (*id, *qty))
    }

    /// Copy that one reload pass may drain
    pub fn working_copy(&self) -> Self {
        self.clone()
    }
}

/// Insertion-ordered card id -> quantity list
///
/// Used for every per-archetype output map so that enumeration order follows
/// the decklist and the whole pass stays deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardQuantities(Vec<(CardId, u32)>);

impl CardQuantities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add copies, merging with an existing entry for the same id
    pub fn add(&mut self, id: CardId, qty: u32) {
        if qty == 0 {
            return;
        }
        match self.0.iter_mut().find(|(existing, _)| *existing == id) {
            Some((_, count)) => *count = count.saturating_add(qty),
            None => self.0.push((id, qty)),
        }
    }

    pub fn get(&self, id: CardId) -> u32 {
        self.0
            .iter()
            .find(|(existing, _)| *existing == id)
            .map(|(_, qty)| *qty)
            .unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (CardId, u32)> + '_ {
        self.0.iter().copied()
    }

    /// Total copies across all entries
    pub fn total(&self) -> u32 {
        self.0.iter().fold(0u32, |total, (_, qty)| total.saturating_add(*qty))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(CardId, u32)> for CardQuantities {
    fn from_iter<I: IntoIterator<Item = (CardId, u32)>>(iter: I) -> Self {
        let mut quantities = CardQuantities::new();
        for (id, qty) in iter {
            quantities.add(id, qty);
        }
        quantities
    }
}
