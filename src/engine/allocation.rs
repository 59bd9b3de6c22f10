//! Assigning owned copies to an archetype
//!
//! Every name the archetype needs is served from the player's printings,
//! lowest rarity first. Whatever can't be served is recorded against the
//! lowest-rarity printing of the name as the copy to collect.

use crate::archetype::Archetype;
use crate::catalog::Catalog;
use crate::collection::{CardQuantities, Inventory};
use crate::core::{name_key, CardName};
use crate::engine::stats::PLAYSET;
use crate::Result;
use rustc_hash::FxHashSet;
use serde::Serialize;

/// Names a deck may legally run more than four copies of
///
/// For collection purposes these are still capped at a playset across main
/// deck and sideboard combined.
#[derive(Debug, Clone, Default)]
pub struct UnlimitedNames(FxHashSet<String>);

impl UnlimitedNames {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        UnlimitedNames(names.into_iter().map(|n| name_key(n.as_ref())).collect())
    }

    pub fn contains(&self, name: &CardName) -> bool {
        self.0.contains(&name.key())
    }
}

/// Copies of a name an archetype needs, as (main deck, sideboard)
///
/// Unlimited names are capped at a playset, main deck served first.
pub fn requirement(
    archetype: &Archetype,
    name: &CardName,
    unlimited: &UnlimitedNames,
) -> (u32, u32) {
    let main = archetype.main_qty(name.as_str());
    let side = archetype.side_qty(name.as_str());
    if unlimited.contains(name) {
        let main = main.min(PLAYSET);
        (main, side.min(PLAYSET - main))
    } else {
        (main, side)
    }
}

/// Owned and missing copies for one archetype, keyed by printing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Allocation {
    pub suggested_main: CardQuantities,
    pub suggested_side: CardQuantities,
    pub main_to_collect: CardQuantities,
    pub side_to_collect: CardQuantities,
}

impl Allocation {
    /// Missing copies of both zones combined, main deck entries first
    pub fn shortfall(&self) -> CardQuantities {
        self.main_to_collect
            .iter()
            .chain(self.side_to_collect.iter())
            .collect()
    }
}

/// Split the working inventory across an archetype's needs
///
/// Drains `working` by every non-basic copy assigned. Fails if the archetype
/// names a card the catalog doesn't know.
pub fn allocate(
    archetype: &Archetype,
    catalog: &Catalog,
    working: &mut Inventory,
    unlimited: &UnlimitedNames,
) -> Result<Allocation> {
    let mut allocation = Allocation::default();

    for name in archetype.names() {
        let (mut main_left, mut side_left) = requirement(archetype, name, unlimited);
        let printings = catalog.printings_by_rarity(name.as_str())?;
        let Some(representative) = printings.first() else {
            continue;
        };
        if main_left == 0 && side_left == 0 {
            continue;
        }

        for card in &printings {
            let owned = working.owned(card.id);
            if owned == 0 {
                continue;
            }

            if card.is_basic_land() {
                // Owning one basic is owning as many as the deck wants
                allocation.suggested_main.add(card.id, main_left);
                allocation.suggested_side.add(card.id, side_left);
                main_left = 0;
                side_left = 0;
                break;
            }

            let assigned = owned.min(main_left.saturating_add(side_left));
            let to_main = assigned.min(main_left);
            let to_side = assigned - to_main;
            allocation.suggested_main.add(card.id, to_main);
            allocation.suggested_side.add(card.id, to_side);
            working.take(card.id, assigned);
            main_left -= to_main;
            side_left -= to_side;

            if main_left == 0 && side_left == 0 {
                break;
            }
        }

        allocation.main_to_collect.add(representative.id, main_left);
        allocation.side_to_collect.add(representative.id, side_left);
    }

    log::debug!(
        "{}: {} owned, {} missing",
        archetype.name,
        allocation
            .suggested_main
            .total()
            .saturating_add(allocation.suggested_side.total()),
        allocation
            .main_to_collect
            .total()
            .saturating_add(allocation.side_to_collect.total())
    );
    Ok(allocation)
}
