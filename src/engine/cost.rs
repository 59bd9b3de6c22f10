//! Booster cost of completing an archetype

use crate::catalog::Catalog;
use crate::collection::{CardQuantities, Inventory};
use crate::core::Rarity;
use crate::Result;
use serde::Serialize;

/// What it takes to finish a deck
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DeckCost {
    /// Boosters needed with no wildcards spent
    pub booster_cost: f64,
    /// Boosters needed once owned wildcards cover what they can
    pub booster_cost_after_wc: f64,
    /// Wildcards still missing after spending the owned ones
    pub wildcards_needed: u32,
}

/// Raw booster cost of a shortfall
pub fn booster_cost(shortfall: &CardQuantities, catalog: &Catalog) -> Result<f64> {
    let mut total = 0.0;
    for (id, qty) in shortfall.iter() {
        total += catalog.card(id)?.booster_cost * f64::from(qty);
    }
    Ok(total)
}

/// Per-copy costs of the shortfall for one rarity, cheapest first
fn unit_costs(shortfall: &CardQuantities, catalog: &Catalog, rarity: Rarity) -> Result<Vec<f64>> {
    let mut units = Vec::new();
    for (id, qty) in shortfall.iter() {
        let card = catalog.card(id)?;
        if card.rarity == rarity {
            units.extend(std::iter::repeat(card.booster_cost).take(qty as usize));
        }
    }
    units.sort_by(f64::total_cmp);
    Ok(units)
}

/// Booster cost left after spending owned wildcards
///
/// A wildcard stands in for one copy of its rarity regardless of which
/// card, so each one cancels the cheapest copy still unpaid.
pub fn booster_cost_after_wildcards(
    shortfall: &CardQuantities,
    catalog: &Catalog,
    inventory: &Inventory,
) -> Result<f64> {
    let mut total = 0.0;
    for rarity in Rarity::COLLECTIBLE {
        let units = unit_costs(shortfall, catalog, rarity)?;
        let paid = (inventory.wildcards(rarity) as usize).min(units.len());
        total += units[paid..].iter().sum::<f64>();
    }
    Ok(total)
}

/// Wildcards the player would still have to earn
pub fn wildcards_needed(
    shortfall: &CardQuantities,
    catalog: &Catalog,
    inventory: &Inventory,
) -> Result<u32> {
    let mut needed = 0u32;
    for rarity in Rarity::COLLECTIBLE {
        let mut short = 0u32;
        for (id, qty) in shortfall.iter() {
            if catalog.card(id)?.rarity == rarity {
                short = short.saturating_add(qty);
            }
        }
        needed = needed.saturating_add(short - inventory.wildcards(rarity).min(short));
    }
    Ok(needed)
}

pub fn deck_cost(
    shortfall: &CardQuantities,
    catalog: &Catalog,
    inventory: &Inventory,
) -> Result<DeckCost> {
    Ok(DeckCost {
        booster_cost: booster_cost(shortfall, catalog)?,
        booster_cost_after_wc: booster_cost_after_wildcards(shortfall, catalog, inventory)?,
        wildcards_needed: wildcards_needed(shortfall, catalog, inventory)?,
    })
}
