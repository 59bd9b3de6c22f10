//! Format-wide ranking of cards and decks worth pursuing
//!
//! A card's dominance is how much of the format runs it times how many copies
//! the player still lacks for an average list. A deck's dominance is the sum
//! of the dominance of everything it is missing.

use crate::catalog::Catalog;
use crate::collection::{CardQuantities, Inventory};
use crate::core::{CardId, CardName, Rarity};
use crate::engine::stats::FormatStats;
use crate::engine::ArchetypeAnalysis;
use crate::Result;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::cmp::Ordering;

/// One row of the meta report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetaEntry {
    pub name: CardName,
    /// Lowest-rarity printing, the one a player would go after
    pub card: CardId,
    pub rarity: Rarity,
    pub deck_percentage: f64,
    pub average_copies: f64,
    pub max_copies: u32,
    pub owned: u32,
    pub total_copies_needed: u32,
    pub copies_needed_for_average: f64,
    pub dominance: f64,
}

/// A deck ranked by the dominance of its missing cards
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeckDominance {
    pub name: String,
    pub dominance: f64,
}

/// Every name the player still lacks copies of, most dominant first
///
/// Basic lands never qualify. `inventory` is the caller's untouched
/// collection, not a working copy.
pub fn rank_cards(
    stats: &FormatStats,
    catalog: &Catalog,
    inventory: &Inventory,
) -> Result<Vec<MetaEntry>> {
    let mut entries = Vec::new();

    for card_stats in stats.iter() {
        let printings = catalog.printings_by_rarity(card_stats.name.as_str())?;
        let Some(representative) = printings.first() else {
            continue;
        };
        if printings.iter().any(|card| card.is_basic_land()) {
            continue;
        }

        let owned = inventory.owned_name(catalog, card_stats.name.as_str())?;
        let total_copies_needed = card_stats.max_copies - owned.min(card_stats.max_copies);
        if total_copies_needed == 0 {
            continue;
        }

        let deck_percentage = stats.deck_percentage(card_stats);
        let average_copies = card_stats.average_per_deck();
        let copies_needed_for_average = average_copies - f64::from(owned).min(average_copies);

        entries.push(MetaEntry {
            name: card_stats.name.clone(),
            card: representative.id,
            rarity: representative.rarity,
            deck_percentage,
            average_copies,
            max_copies: card_stats.max_copies,
            owned,
            total_copies_needed,
            copies_needed_for_average,
            dominance: deck_percentage * copies_needed_for_average,
        });
    }

    entries.sort_by(|a, b| {
        b.dominance
            .total_cmp(&a.dominance)
            .then_with(|| a.name.as_str().cmp(b.name.as_str()))
    });
    Ok(entries)
}

/// Dominance of everything an archetype is missing
///
/// Names absent from `entries` are fully owned format-wide and add nothing.
pub fn archetype_dominance(
    shortfall: &CardQuantities,
    catalog: &Catalog,
    entries: &[MetaEntry],
) -> Result<f64> {
    let by_name: FxHashMap<String, f64> = entries
        .iter()
        .map(|entry| (entry.name.key(), entry.dominance))
        .collect();

    let mut dominance = 0.0;
    for (id, qty) in shortfall.iter() {
        let card = catalog.card(id)?;
        if let Some(value) = by_name.get(&card.name.key()) {
            dominance += value * f64::from(qty);
        }
    }
    Ok(dominance)
}

/// The `limit` decks with the highest dominance
pub fn rank_decks(analyses: &[ArchetypeAnalysis], limit: usize) -> Vec<DeckDominance> {
    let mut decks: Vec<DeckDominance> = analyses
        .iter()
        .map(|analysis| DeckDominance {
            name: analysis.archetype.name.clone(),
            dominance: analysis.dominance,
        })
        .collect();
    decks.sort_by(|a, b| b.dominance.total_cmp(&a.dominance).then_with(|| a.name.cmp(&b.name)));
    decks.truncate(limit);
    decks
}

/// Cheapest-to-complete first: wildcard-adjusted cost, then raw cost
pub fn cheapest_first(a: &ArchetypeAnalysis, b: &ArchetypeAnalysis) -> Ordering {
    a.cost
        .booster_cost_after_wc
        .total_cmp(&b.cost.booster_cost_after_wc)
        .then_with(|| a.cost.booster_cost.total_cmp(&b.cost.booster_cost))
}
