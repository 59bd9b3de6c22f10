//! Card printings and sets

use crate::core::{CardId, CardName, Colors, Rarity};
use rustc_hash::FxHashSet;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

/// A card set (expansion) as far as booster economics are concerned
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Set {
    pub name: String,
    pub code: String,
    /// Code the game client uses for this set
    pub client_code: String,
    pub total_cards: u32,
    pub rarity_counts: BTreeMap<Rarity, u32>,
    /// Normalized names of promo-only cards that never appear in boosters
    #[serde(skip)]
    pub excluded_from_boosters: FxHashSet<String>,
}

impl Set {
    pub fn rarity_count(&self, rarity: Rarity) -> u32 {
        self.rarity_counts.get(&rarity).copied().unwrap_or(0)
    }

    pub fn is_excluded(&self, name: &CardName) -> bool {
        self.excluded_from_boosters.contains(&name.key())
    }
}

/// Identity of a printing: name + set code + collector number
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CardIdentity {
    pub name_key: String,
    pub set_code: String,
    pub collector_number: String,
}

/// One printing of a card
///
/// Immutable once the catalog hands it out.
#[derive(Debug, Clone, Serialize)]
pub struct Card {
    pub id: CardId,
    pub name: CardName,
    #[serde(serialize_with = "serialize_set_code")]
    pub set: Arc<Set>,
    pub collector_number: String,
    pub rarity: Rarity,
    pub colors: Colors,
    pub type_line: String,
    /// Mana cost text as printed, e.g. "{1}{R}"
    pub mana_cost: String,
    pub cmc: u8,
    /// Power ranking, higher is stronger
    pub rank: i32,
    /// Expected boosters to open one copy (infinite if unobtainable)
    pub booster_cost: f64,
    pub image_ref: Option<String>,
    /// Position in catalog insertion order, the stable tie-break everywhere
    #[serde(skip)]
    pub ordinal: usize,
}

fn serialize_set_code<S: serde::Serializer>(set: &Arc<Set>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&set.code)
}

impl Card {
    pub fn identity(&self) -> CardIdentity {
        CardIdentity {
            name_key: self.name.key(),
            set_code: self.set.code.clone(),
            collector_number: self.collector_number.clone(),
        }
    }

    pub fn is_basic_land(&self) -> bool {
        self.rarity == Rarity::BasicLand
    }

    pub fn is_land(&self) -> bool {
        self.type_line.contains("Land")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_set() -> Arc<Set> {
        let mut excluded = FxHashSet::default();
        excluded.insert("promo bear".to_string());
        Arc::new(Set {
            name: "Core Set".to_string(),
            code: "M20".to_string(),
            client_code: "M20".to_string(),
            total_cards: 280,
            rarity_counts: BTreeMap::from([(Rarity::Common, 111)]),
            excluded_from_boosters: excluded,
        })
    }

    #[test]
    fn test_set_lookups() {
        let set = sample_set();
        assert_eq!(set.rarity_count(Rarity::Common), 111);
        assert_eq!(set.rarity_count(Rarity::Rare), 0);
        assert!(set.is_excluded(&CardName::new("Promo Bear")));
        assert!(!set.is_excluded(&CardName::new("Grizzly Bears")));
    }

    #[test]
    fn test_card_predicates() {
        let card = Card {
            id: CardId::new(1),
            name: CardName::new("Temple of Epiphany"),
            set: sample_set(),
            collector_number: "253".to_string(),
            rarity: Rarity::Rare,
            colors: Colors::COLORLESS,
            type_line: "Land".to_string(),
            mana_cost: String::new(),
            cmc: 0,
            rank: 3,
            booster_cost: 10.0,
            image_ref: None,
            ordinal: 0,
        };
        assert!(card.is_land());
        assert!(!card.is_basic_land());
        assert_eq!(card.identity().name_key, "temple of epiphany");
        assert_eq!(card.identity().set_code, "M20");
    }
}
