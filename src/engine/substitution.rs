//! Replacement suggestions for missing cards
//!
//! After allocation the working inventory holds only surplus copies. Each
//! missing card is matched against that surplus through a cascade of
//! progressively looser tiers; within a tier the strongest card goes first.

use crate::catalog::Catalog;
use crate::collection::{CardQuantities, Inventory};
use crate::core::{name_key, Card, CardId, CardName, Colors, Rarity};
use crate::Result;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::sync::Arc;

/// Colour identity of lands, by name, as produced by the land collaborator
#[derive(Debug, Clone, Default)]
pub struct LandColors(FxHashMap<String, Colors>);

impl LandColors {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Colors)>,
        S: AsRef<str>,
    {
        LandColors(
            entries
                .into_iter()
                .map(|(name, colors)| (name_key(name.as_ref()), colors))
                .collect(),
        )
    }

    pub fn get(&self, name: &CardName) -> Option<Colors> {
        self.0.get(&name.key()).copied()
    }
}

/// One suggested swap: play `quantity` copies of `replacement` instead of `missing`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Replacement {
    pub missing: CardId,
    pub replacement: CardId,
    pub quantity: u32,
}

/// Matching rule of one search tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tier {
    /// Same type line, and either the same mana cost or (for a missing land)
    /// the same land colour identity
    TypeAndCost,
    /// Same mana cost
    Cost,
    /// Same converted cost and exactly the same colours
    CmcAndColors,
    /// Exactly the same colours at a lower converted cost
    ColorsAtCmc(u8),
    /// Colours within the missing card's colours at a given converted cost
    SubsetColorsAtCmc(u8),
}

impl Tier {
    /// The full cascade for one missing card, tightest first
    fn cascade(missing: &Card) -> Vec<Tier> {
        let mut tiers = vec![Tier::TypeAndCost, Tier::Cost, Tier::CmcAndColors];
        tiers.extend((1..missing.cmc).rev().map(Tier::ColorsAtCmc));
        tiers.extend((1..=missing.cmc).rev().map(Tier::SubsetColorsAtCmc));
        tiers
    }

    fn matches(self, missing: &Card, candidate: &Card, land_colors: &LandColors) -> bool {
        match self {
            Tier::TypeAndCost => {
                candidate.type_line == missing.type_line
                    && (candidate.mana_cost == missing.mana_cost
                        || (missing.is_land()
                            && land_colors.get(&missing.name).is_some_and(|colors| {
                                land_colors.get(&candidate.name) == Some(colors)
                            })))
            }
            Tier::Cost => candidate.mana_cost == missing.mana_cost,
            Tier::CmcAndColors => {
                candidate.cmc == missing.cmc && candidate.colors == missing.colors
            }
            Tier::ColorsAtCmc(cmc) => candidate.cmc == cmc && candidate.colors == missing.colors,
            Tier::SubsetColorsAtCmc(cmc) => {
                candidate.cmc == cmc && missing.colors.contains(candidate.colors)
            }
        }
    }
}

/// Surplus printings that may stand in for `missing`, strongest first
fn candidates(
    missing: &Card,
    catalog: &Catalog,
    working: &Inventory,
) -> Result<Vec<Arc<Card>>> {
    let missing_key = missing.name.key();
    let mut cards = Vec::new();
    for (id, qty) in working.iter() {
        if qty == 0 {
            continue;
        }
        let card = catalog.card(id)?;
        if card.rarity == Rarity::Token || card.name.key() == missing_key {
            continue;
        }
        cards.push(Arc::clone(card));
    }
    cards.sort_by(|a, b| b.rank.cmp(&a.rank).then(a.ordinal.cmp(&b.ordinal)));
    Ok(cards)
}

/// Find surplus replacements for every missing card, in shortfall order
///
/// Consumes replacements from `working`. A need no tier can cover is left
/// as is; it is what the player still has to open boosters for.
pub fn suggest_replacements(
    shortfall: &CardQuantities,
    catalog: &Catalog,
    working: &mut Inventory,
    land_colors: &LandColors,
) -> Result<Vec<Replacement>> {
    let mut replacements = Vec::new();

    for (missing_id, needed) in shortfall.iter() {
        let missing = Arc::clone(catalog.card(missing_id)?);
        let mut remaining = needed;

        'tiers: for tier in Tier::cascade(&missing) {
            for candidate in candidates(&missing, catalog, working)? {
                if !tier.matches(&missing, &candidate, land_colors) {
                    continue;
                }
                let surplus = working.owned(candidate.id);
                if surplus == 0 {
                    continue;
                }
                let quantity = working.take(candidate.id, surplus.min(remaining));
                replacements.push(Replacement {
                    missing: missing_id,
                    replacement: candidate.id,
                    quantity,
                });
                remaining -= quantity;
                if remaining == 0 {
                    break 'tiers;
                }
            }
        }

        if remaining > 0 {
            log::debug!(
                "No replacement for {remaining} of {} ({})",
                missing.name,
                missing_id
            );
        }
    }

    Ok(replacements)
}
