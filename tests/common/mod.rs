//! Shared fixtures for integration tests

#![allow(dead_code)]

use mtga_deck_advisor::core::Rarity;
use mtga_deck_advisor::loader::{ArchetypeRecord, CardRecord, DatabaseSnapshot, SetRecord};
use std::collections::BTreeMap;

pub fn set(name: &str, code: &str, total_cards: u32, counts: &[(Rarity, u32)]) -> SetRecord {
    SetRecord {
        name: name.to_string(),
        code: code.to_string(),
        client_code: code.to_string(),
        excluded_from_boosters: vec![],
        total_cards,
        rarity_counts: counts.iter().copied().collect::<BTreeMap<_, _>>(),
    }
}

/// Builder for a printing with sensible defaults
pub struct CardBuilder(CardRecord);

impl CardBuilder {
    pub fn new(id: u32, name: &str, set_name: &str, rarity: Rarity) -> Self {
        CardBuilder(CardRecord {
            id,
            name: name.to_string(),
            set_name: set_name.to_string(),
            collector_number: id.to_string(),
            rarity,
            colors: "G".parse().unwrap(),
            rank: 0,
            type_line: "Creature".to_string(),
            mana_cost: "{1}{G}".to_string(),
            cmc: 2,
            image_ref: None,
        })
    }

    pub fn rank(mut self, rank: i32) -> Self {
        self.0.rank = rank;
        self
    }

    pub fn colors(mut self, colors: &str) -> Self {
        self.0.colors = colors.parse().unwrap();
        self
    }

    pub fn type_line(mut self, type_line: &str) -> Self {
        self.0.type_line = type_line.to_string();
        self
    }

    pub fn cost(mut self, mana_cost: &str, cmc: u8) -> Self {
        self.0.mana_cost = mana_cost.to_string();
        self.0.cmc = cmc;
        self
    }

    pub fn build(self) -> CardRecord {
        self.0
    }
}

pub fn basic(id: u32, name: &str, set_name: &str) -> CardRecord {
    CardBuilder::new(id, name, set_name, Rarity::BasicLand)
        .colors("")
        .type_line("Basic Land")
        .cost("", 0)
        .build()
}

pub fn deck(name: &str, main: &[(&str, u32)], side: &[(&str, u32)]) -> ArchetypeRecord {
    let zone = |entries: &[(&str, u32)]| -> Vec<(String, u32)> {
        entries.iter().map(|(n, q)| (n.to_string(), *q)).collect()
    };
    ArchetypeRecord {
        name: name.to_string(),
        main_deck: zone(main),
        sideboard: zone(side),
    }
}

/// A small two-set format: a few green creatures, a rare, and basics
pub fn small_format() -> DatabaseSnapshot {
    DatabaseSnapshot {
        sets: vec![
            set(
                "Core",
                "COR",
                100,
                &[(Rarity::Common, 60), (Rarity::Uncommon, 25), (Rarity::Rare, 15)],
            ),
            set("Promo", "PRM", 0, &[]),
        ],
        cards: vec![
            CardBuilder::new(1, "Llanowar Elves", "Core", Rarity::Common)
                .rank(8)
                .cost("{G}", 1)
                .build(),
            CardBuilder::new(2, "Llanowar Elves", "Promo", Rarity::Uncommon)
                .rank(8)
                .cost("{G}", 1)
                .build(),
            CardBuilder::new(3, "Grizzly Bears", "Core", Rarity::Common).rank(2).build(),
            CardBuilder::new(4, "Centaur Courser", "Core", Rarity::Common)
                .rank(4)
                .cost("{2}{G}", 3)
                .build(),
            CardBuilder::new(5, "Steel Leaf Champion", "Core", Rarity::Rare)
                .rank(9)
                .cost("{G}{G}{G}", 3)
                .build(),
            CardBuilder::new(6, "Giant Growth", "Core", Rarity::Common)
                .rank(5)
                .type_line("Instant")
                .cost("{G}", 1)
                .build(),
            CardBuilder::new(7, "Rat Colony", "Core", Rarity::Common)
                .rank(1)
                .colors("B")
                .cost("{1}{B}", 2)
                .build(),
            basic(8, "Forest", "Core"),
        ],
    }
}
