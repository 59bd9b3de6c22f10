//! Format-wide usage statistics per card name

use crate::archetype::Archetype;
use crate::core::CardName;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;

/// Copies of one name a single deck can usefully run
pub const PLAYSET: u32 = 4;

/// How a card name is used across every archetype of a format
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardStats {
    pub name: CardName,
    /// Archetypes running the name in either zone
    pub deck_count: u32,
    /// Required copies summed over all archetypes and both zones
    pub total_copies: u32,
    /// Largest single-archetype requirement, capped at a playset
    pub max_copies: u32,
}

impl CardStats {
    fn new(name: CardName) -> Self {
        CardStats {
            name,
            deck_count: 0,
            total_copies: 0,
            max_copies: 0,
        }
    }

    pub fn average_per_deck(&self) -> f64 {
        if self.deck_count == 0 {
            return 0.0;
        }
        f64::from(self.total_copies) / f64::from(self.deck_count)
    }
}

/// Statistics for every name of a format, in first-seen order
#[derive(Debug, Clone, Default, Serialize)]
pub struct FormatStats {
    stats: Vec<CardStats>,
    #[serde(skip)]
    index: FxHashMap<String, usize>,
    pub archetype_count: usize,
}

impl FormatStats {
    /// Scan all archetypes once
    ///
    /// Archetypes reaching this point are already validated, so a name is
    /// never listed twice within one zone.
    pub fn aggregate(archetypes: &[Archetype]) -> Self {
        let mut format = FormatStats {
            archetype_count: archetypes.len(),
            ..Default::default()
        };

        for archetype in archetypes {
            let mut seen: FxHashSet<String> = FxHashSet::default();
            let mut combined: FxHashMap<String, u32> = FxHashMap::default();

            for entry in archetype.main_deck.iter().chain(&archetype.sideboard) {
                let key = entry.card_name.key();
                let slot = format.slot(&entry.card_name);
                let stats = &mut format.stats[slot];
                stats.total_copies = stats.total_copies.saturating_add(entry.count);
                let copies = combined.entry(key.clone()).or_insert(0);
                *copies = copies.saturating_add(entry.count);
                seen.insert(key);
            }

            for key in seen {
                let slot = format.index[&key];
                let stats = &mut format.stats[slot];
                stats.deck_count += 1;
                stats.max_copies = stats.max_copies.max(combined[&key].min(PLAYSET));
            }
        }

        log::debug!(
            "Aggregated {} names over {} archetypes",
            format.stats.len(),
            format.archetype_count
        );
        format
    }

    fn slot(&mut self, name: &CardName) -> usize {
        let key = name.key();
        if let Some(slot) = self.index.get(&key) {
            return *slot;
        }
        self.stats.push(CardStats::new(name.clone()));
        self.index.insert(key, self.stats.len() - 1);
        self.stats.len() - 1
    }

    pub fn get(&self, name: &CardName) -> Option<&CardStats> {
        self.index.get(&name.key()).map(|slot| &self.stats[*slot])
    }

    /// Share of archetypes running the name
    pub fn deck_percentage(&self, stats: &CardStats) -> f64 {
        if self.archetype_count == 0 {
            return 0.0;
        }
        f64::from(stats.deck_count) / self.archetype_count as f64
    }

    pub fn iter(&self) -> impl Iterator<Item = &CardStats> {
        self.stats.iter()
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}
