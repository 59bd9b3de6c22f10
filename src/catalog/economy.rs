//! Booster economics
//!
//! The booster cost of a card is the expected number of boosters a player has
//! to open to end up with one copy, either as the printed card itself or as a
//! wildcard of the same rarity.

use crate::core::{CardName, Rarity, Set};

/// Expected wildcards of a rarity per booster opened
pub fn wildcard_frequency(rarity: Rarity) -> f64 {
    match rarity {
        Rarity::Token | Rarity::BasicLand => 0.0,
        Rarity::Common => 1.0 / 3.0,
        Rarity::Uncommon => 1.0 / 5.0,
        Rarity::Rare => 1.0 / 12.0,
        Rarity::MythicRare => 1.0 / 30.0,
    }
}

/// Expected printed cards of a rarity per booster opened
pub fn rarity_booster_frequency(rarity: Rarity) -> f64 {
    match rarity {
        Rarity::Token | Rarity::BasicLand => 0.0,
        Rarity::Common => 5.0,
        Rarity::Uncommon => 2.0,
        Rarity::Rare => 7.0 / 8.0,
        Rarity::MythicRare => 1.0 / 8.0,
    }
}

/// How often a given printing turns up in a booster of its set
///
/// Promo-only names and sets without a card count never print.
pub fn print_frequency(name: &CardName, rarity: Rarity, set: &Set) -> f64 {
    if set.total_cards == 0 || set.is_excluded(name) {
        return 0.0;
    }
    rarity_booster_frequency(rarity) * f64::from(set.rarity_count(rarity))
        / f64::from(set.total_cards)
}

/// Boosters needed for one copy; 0 for basic lands, infinite if unobtainable
pub fn booster_cost(name: &CardName, rarity: Rarity, set: &Set) -> f64 {
    if rarity == Rarity::BasicLand {
        return 0.0;
    }
    let per_booster = wildcard_frequency(rarity) + print_frequency(name, rarity, set);
    if per_booster > 0.0 {
        1.0 / per_booster
    } else {
        f64::INFINITY
    }
}
