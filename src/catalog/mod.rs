//! Card catalog
//!
//! Registry of every known printing and set, with lookup by id, by full
//! identity (name + set + collector number) and by bare name. The catalog is
//! built once per database load; the process-wide instance is swapped in
//! whole so readers never see a half-built registry.

pub mod economy;

use crate::core::{name_key, Card, CardId, CardIdentity, CardName, Set};
use crate::loader::snapshot::{CardRecord, DatabaseSnapshot, SetRecord};
use crate::{AdvisorError, Result};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

/// Registry of card printings and sets
#[derive(Debug, Default)]
pub struct Catalog {
    cards: FxHashMap<CardId, Arc<Card>>,
    by_identity: FxHashMap<CardIdentity, CardId>,
    /// Normalized name -> printings in insertion order
    by_name: FxHashMap<String, SmallVec<[CardId; 4]>>,
    sets: FxHashMap<String, Arc<Set>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a fresh catalog from a database snapshot
    ///
    /// Fails on the first conflicting record.
    pub fn from_snapshot(snapshot: &DatabaseSnapshot) -> Result<Self> {
        let mut catalog = Catalog::new();
        for set in &snapshot.sets {
            catalog.create_set(set)?;
        }
        for card in &snapshot.cards {
            catalog.create_card(card)?;
        }
        log::info!(
            "Catalog built: {} sets, {} printings, {} names",
            catalog.sets.len(),
            catalog.cards.len(),
            catalog.by_name.len()
        );
        Ok(catalog)
    }

    /// Register a set, or return the already registered one
    pub fn create_set(&mut self, record: &SetRecord) -> Result<Arc<Set>> {
        if let Some(existing) = self.sets.get(&record.name) {
            if existing.code != record.code {
                return Err(AdvisorError::DataConflict(format!(
                    "set '{}' has code '{}' but was registered as '{}'",
                    record.name, record.code, existing.code
                )));
            }
            return Ok(Arc::clone(existing));
        }

        let set = Arc::new(Set {
            name: record.name.clone(),
            code: record.code.clone(),
            client_code: record.client_code.clone(),
            total_cards: record.total_cards,
            rarity_counts: record.rarity_counts.clone(),
            excluded_from_boosters: record
                .excluded_from_boosters
                .iter()
                .map(|n| name_key(n))
                .collect(),
        });
        self.sets.insert(record.name.clone(), Arc::clone(&set));
        Ok(set)
    }

    /// Register a printing, or return the identical one registered earlier
    pub fn create_card(&mut self, record: &CardRecord) -> Result<Arc<Card>> {
        let set = self
            .sets
            .get(&record.set_name)
            .cloned()
            .ok_or_else(|| AdvisorError::UnknownSet(record.set_name.clone()))?;

        let id = CardId::new(record.id);
        let name = CardName::new(record.name.trim());
        let identity = CardIdentity {
            name_key: name.key(),
            set_code: set.code.clone(),
            collector_number: record.collector_number.clone(),
        };

        if let Some(existing) = self.cards.get(&id) {
            if existing.identity() == identity {
                return Ok(Arc::clone(existing));
            }
            return Err(AdvisorError::DataConflict(format!(
                "card id {id} is both '{}' ({} #{}) and '{}' ({} #{})",
                existing.name,
                existing.set.code,
                existing.collector_number,
                name,
                set.code,
                record.collector_number
            )));
        }
        if let Some(other) = self.by_identity.get(&identity) {
            return Err(AdvisorError::DataConflict(format!(
                "'{name}' ({} #{}) is registered under id {other} and id {id}",
                set.code, record.collector_number
            )));
        }

        let booster_cost = economy::booster_cost(&name, record.rarity, &set);
        let card = Arc::new(Card {
            id,
            name,
            set,
            collector_number: record.collector_number.clone(),
            rarity: record.rarity,
            colors: record.colors,
            type_line: record.type_line.clone(),
            mana_cost: record.mana_cost.clone(),
            cmc: record.cmc,
            rank: record.rank,
            booster_cost,
            image_ref: record.image_ref.clone(),
            ordinal: self.cards.len(),
        });

        self.by_name
            .entry(identity.name_key.clone())
            .or_default()
            .push(id);
        self.by_identity.insert(identity, id);
        self.cards.insert(id, Arc::clone(&card));
        Ok(card)
    }

    /// Look up a printing by id
    pub fn card(&self, id: CardId) -> Result<&Arc<Card>> {
        self.cards
            .get(&id)
            .ok_or(AdvisorError::CardNotFound(id.as_u32()))
    }

    /// All printings of a name, in insertion order
    pub fn printings(&self, name: &str) -> Result<&[CardId]> {
        self.by_name
            .get(&name_key(name))
            .map(|ids| ids.as_slice())
            .ok_or_else(|| AdvisorError::NameNotFound(name.to_string()))
    }

    /// All printings of a name, lowest rarity first, insertion order within a rarity
    pub fn printings_by_rarity(&self, name: &str) -> Result<Vec<&Arc<Card>>> {
        let mut cards = self
            .printings(name)?
            .iter()
            .map(|id| self.card(*id))
            .collect::<Result<Vec<_>>>()?;
        cards.sort_by_key(|card| (card.rarity, card.ordinal));
        Ok(cards)
    }

    /// Look up a printing by name, set code and collector number
    pub fn by_full_identity(
        &self,
        name: &str,
        set_code: &str,
        collector_number: &str,
    ) -> Option<&Arc<Card>> {
        let identity = CardIdentity {
            name_key: name_key(name),
            set_code: set_code.to_string(),
            collector_number: collector_number.to_string(),
        };
        self.by_identity
            .get(&identity)
            .and_then(|id| self.cards.get(id))
    }

    pub fn set(&self, name: &str) -> Option<&Arc<Set>> {
        self.sets.get(name)
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.by_name.contains_key(&name_key(name))
    }

    /// Total number of printings
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Forget every card and set
    pub fn clear(&mut self) {
        self.cards.clear();
        self.by_identity.clear();
        self.by_name.clear();
        self.sets.clear();
    }
}

static SHARED: OnceLock<RwLock<Arc<Catalog>>> = OnceLock::new();

fn slot() -> &'static RwLock<Arc<Catalog>> {
    SHARED.get_or_init(|| RwLock::new(Arc::new(Catalog::new())))
}

/// The process-wide catalog currently installed
pub fn shared() -> Arc<Catalog> {
    let guard = slot().read().unwrap_or_else(PoisonError::into_inner);
    Arc::clone(&guard)
}

/// Replace the process-wide catalog with a fully built one
pub fn install(catalog: impl Into<Arc<Catalog>>) -> Arc<Catalog> {
    let catalog = catalog.into();
    let mut guard = slot().write().unwrap_or_else(PoisonError::into_inner);
    *guard = Arc::clone(&catalog);
    catalog
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Colors, Rarity};
    use std::collections::BTreeMap;

    fn set_record(name: &str, code: &str) -> SetRecord {
        SetRecord {
            name: name.to_string(),
            code: code.to_string(),
            client_code: code.to_string(),
            excluded_from_boosters: vec![],
            total_cards: 100,
            rarity_counts: BTreeMap::from([(Rarity::Common, 50), (Rarity::Rare, 20)]),
        }
    }

    fn card_record(id: u32, name: &str, set: &str, number: &str, rarity: Rarity) -> CardRecord {
        CardRecord {
            id,
            name: name.to_string(),
            set_name: set.to_string(),
            collector_number: number.to_string(),
            rarity,
            colors: Colors::COLORLESS,
            rank: 0,
            type_line: "Creature".to_string(),
            mana_cost: "{2}".to_string(),
            cmc: 2,
            image_ref: None,
        }
    }

    fn catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.create_set(&set_record("Alpha", "AAA")).unwrap();
        catalog.create_set(&set_record("Beta", "BBB")).unwrap();
        catalog
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert!(matches!(
            catalog.card(CardId::new(1)),
            Err(AdvisorError::CardNotFound(1))
        ));
        assert!(matches!(
            catalog.printings("Shock"),
            Err(AdvisorError::NameNotFound(_))
        ));
    }

    #[test]
    fn test_create_card_is_idempotent() {
        let mut catalog = catalog();
        let record = card_record(1, "Bear", "Alpha", "10", Rarity::Common);
        let first = catalog.create_card(&record).unwrap();
        let second = catalog.create_card(&record).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_id_with_different_identity_conflicts() {
        let mut catalog = catalog();
        catalog
            .create_card(&card_record(1, "Bear", "Alpha", "10", Rarity::Common))
            .unwrap();
        let err = catalog
            .create_card(&card_record(1, "Bear", "Alpha", "11", Rarity::Common))
            .unwrap_err();
        assert!(matches!(err, AdvisorError::DataConflict(_)));
    }

    #[test]
    fn test_identity_under_two_ids_conflicts() {
        let mut catalog = catalog();
        catalog
            .create_card(&card_record(1, "Bear", "Alpha", "10", Rarity::Common))
            .unwrap();
        let err = catalog
            .create_card(&card_record(2, "Bear", "Alpha", "10", Rarity::Common))
            .unwrap_err();
        assert!(matches!(err, AdvisorError::DataConflict(_)));
    }

    #[test]
    fn test_set_code_conflict() {
        let mut catalog = catalog();
        assert!(catalog.create_set(&set_record("Alpha", "AAA")).is_ok());
        let err = catalog.create_set(&set_record("Alpha", "ZZZ")).unwrap_err();
        assert!(matches!(err, AdvisorError::DataConflict(_)));
    }

    #[test]
    fn test_unknown_set() {
        let mut catalog = catalog();
        let err = catalog
            .create_card(&card_record(1, "Bear", "Gamma", "1", Rarity::Common))
            .unwrap_err();
        assert!(matches!(err, AdvisorError::UnknownSet(_)));
    }

    #[test]
    fn test_lookups() {
        let mut catalog = catalog();
        catalog
            .create_card(&card_record(1, "Bear", "Alpha", "10", Rarity::Rare))
            .unwrap();
        catalog
            .create_card(&card_record(2, "Bear", "Beta", "3", Rarity::Common))
            .unwrap();
        catalog
            .create_card(&card_record(3, "Bear", "Beta", "4", Rarity::Common))
            .unwrap();

        assert_eq!(
            catalog.printings("BEAR").unwrap(),
            &[CardId::new(1), CardId::new(2), CardId::new(3)]
        );
        let ordered: Vec<u32> = catalog
            .printings_by_rarity("bear")
            .unwrap()
            .iter()
            .map(|c| c.id.as_u32())
            .collect();
        assert_eq!(ordered, vec![2, 3, 1]);

        let card = catalog.by_full_identity("Bear", "BBB", "4").unwrap();
        assert_eq!(card.id, CardId::new(3));
        assert!(catalog.by_full_identity("Bear", "BBB", "5").is_none());
        assert!(catalog.card(CardId::new(1)).unwrap().booster_cost > 0.0);
    }

    #[test]
    fn test_clear() {
        let mut catalog = catalog();
        catalog
            .create_card(&card_record(1, "Bear", "Alpha", "10", Rarity::Common))
            .unwrap();
        catalog.clear();
        assert!(catalog.is_empty());
        assert!(catalog.set("Alpha").is_none());
        assert!(!catalog.contains_name("Bear"));
    }

    #[test]
    fn test_install_swaps_shared_catalog() {
        let mut catalog = catalog();
        catalog
            .create_card(&card_record(900, "Installed Bear", "Alpha", "900", Rarity::Common))
            .unwrap();
        let installed = install(catalog);
        assert!(Arc::ptr_eq(&installed, &shared()));
        assert!(shared().contains_name("installed bear"));
    }

    #[test]
    fn test_from_snapshot_aborts_on_conflict() {
        let snapshot = DatabaseSnapshot {
            sets: vec![set_record("Alpha", "AAA")],
            cards: vec![
                card_record(1, "Bear", "Alpha", "10", Rarity::Common),
                card_record(1, "Wolf", "Alpha", "11", Rarity::Common),
            ],
        };
        assert!(matches!(
            Catalog::from_snapshot(&snapshot),
            Err(AdvisorError::DataConflict(_))
        ));
    }
}
