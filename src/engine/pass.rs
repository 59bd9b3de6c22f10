//! Reload passes and publishing
//!
//! A pass recomputes everything for one format from caller-supplied inputs.
//! [`Advisor`] runs passes off the calling task and keeps the newest
//! successful result published; a failed or overtaken pass never replaces it.

use crate::archetype::Archetype;
use crate::catalog::{self, Catalog};
use crate::collection::Inventory;
use crate::config::AdvisorConfig;
use crate::engine::meta::{self, DeckDominance, MetaEntry};
use crate::engine::stats::FormatStats;
use crate::engine::substitution::LandColors;
use crate::engine::{allocation, cost, substitution, ArchetypeAnalysis};
use crate::loader::snapshot::{ArchetypeRecord, DatabaseSnapshot};
use crate::Result;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

/// An archetype left out of the pass and why
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DroppedArchetype {
    pub name: String,
    pub reason: String,
}

/// Published result of one pass
#[derive(Debug, Serialize)]
pub struct FormatReport {
    /// Cheapest to complete first
    pub archetypes: Vec<ArchetypeAnalysis>,
    pub meta_report: Vec<MetaEntry>,
    pub top_decks: Vec<DeckDominance>,
    pub stats: FormatStats,
    pub dropped: Vec<DroppedArchetype>,
    /// Catalog the report's card ids refer to
    #[serde(skip)]
    pub catalog: Arc<Catalog>,
}

impl FormatReport {
    pub fn archetype(&self, name: &str) -> Option<&ArchetypeAnalysis> {
        self.archetypes
            .iter()
            .find(|analysis| analysis.archetype.name.eq_ignore_ascii_case(name))
    }
}

/// Validate decklists, isolating malformed ones
fn validate(records: &[ArchetypeRecord]) -> (Vec<Archetype>, Vec<DroppedArchetype>) {
    let mut valid = Vec::with_capacity(records.len());
    let mut dropped = Vec::new();
    for record in records {
        match Archetype::from_record(record) {
            Ok(archetype) => valid.push(archetype),
            Err(e) => {
                log::warn!("Dropping archetype '{}': {e}", record.name);
                dropped.push(DroppedArchetype {
                    name: record.name.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }
    (valid, dropped)
}

/// Analyse one archetype against a fresh working copy of the inventory
fn analyse(
    archetype: Archetype,
    catalog: &Catalog,
    inventory: &Inventory,
    land_colors: &LandColors,
    unlimited: &allocation::UnlimitedNames,
) -> Result<ArchetypeAnalysis> {
    let mut working = inventory.working_copy();
    let allocation = allocation::allocate(&archetype, catalog, &mut working, unlimited)?;
    let shortfall = allocation.shortfall();
    let replacements =
        substitution::suggest_replacements(&shortfall, catalog, &mut working, land_colors)?;
    let cost = cost::deck_cost(&shortfall, catalog, inventory)?;
    Ok(ArchetypeAnalysis {
        archetype,
        allocation,
        replacements,
        cost,
        dominance: 0.0,
    })
}

/// Run one full pass over a format
///
/// Malformed archetypes are dropped and reported; any lookup miss aborts.
pub fn run(
    catalog: Arc<Catalog>,
    records: &[ArchetypeRecord],
    inventory: &Inventory,
    land_colors: &LandColors,
    config: &AdvisorConfig,
) -> Result<FormatReport> {
    let (archetypes, dropped) = validate(records);
    let stats = FormatStats::aggregate(&archetypes);
    let unlimited = config.unlimited();

    let mut analyses = archetypes
        .into_iter()
        .map(|archetype| analyse(archetype, &catalog, inventory, land_colors, &unlimited))
        .collect::<Result<Vec<_>>>()?;

    let mut entries = meta::rank_cards(&stats, &catalog, inventory)?;
    for analysis in &mut analyses {
        analysis.dominance =
            meta::archetype_dominance(&analysis.allocation.shortfall(), &catalog, &entries)?;
    }
    let top_decks = meta::rank_decks(&analyses, config.top_decks);
    analyses.sort_by(meta::cheapest_first);
    entries.truncate(config.meta_report_size);

    log::info!(
        "Pass complete: {} archetypes ({} dropped), {} meta entries",
        analyses.len(),
        dropped.len(),
        entries.len()
    );

    Ok(FormatReport {
        archetypes: analyses,
        meta_report: entries,
        top_decks,
        stats,
        dropped,
        catalog,
    })
}

/// Inputs of one reload
#[derive(Debug, Clone, Default)]
pub struct ReloadRequest {
    /// Rebuild the catalog from this snapshot first; `None` keeps the
    /// installed one
    pub database: Option<DatabaseSnapshot>,
    pub archetypes: Vec<ArchetypeRecord>,
    pub inventory: Inventory,
    pub land_colors: LandColors,
    pub config: AdvisorConfig,
}

#[derive(Debug, Clone)]
pub enum ReloadOutcome {
    Published(Arc<FormatReport>),
    /// A newer reload published first; this one's output was discarded
    Superseded,
}

#[derive(Debug, Default)]
struct Published {
    generation: u64,
    report: Option<Arc<FormatReport>>,
}

/// Runs reload passes and owns the published report
#[derive(Debug, Default)]
pub struct Advisor {
    generation: AtomicU64,
    published: RwLock<Published>,
}

impl Advisor {
    pub fn new() -> Self {
        Self::default()
    }

    /// The report of the newest successful pass, if any
    pub fn current(&self) -> Option<Arc<FormatReport>> {
        let published = self.published.read().unwrap_or_else(PoisonError::into_inner);
        published.report.clone()
    }

    /// Recompute on a blocking worker and publish last-writer-wins
    ///
    /// An error leaves the previously published report in place.
    pub async fn reload(&self, request: ReloadRequest) -> Result<ReloadOutcome> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        log::info!("Reload #{generation} started");

        let report = tokio::task::spawn_blocking(move || -> Result<FormatReport> {
            let catalog = match &request.database {
                Some(snapshot) => Arc::new(Catalog::from_snapshot(snapshot)?),
                None => catalog::shared(),
            };
            run(
                catalog,
                &request.archetypes,
                &request.inventory,
                &request.land_colors,
                &request.config,
            )
        })
        .await?
        .inspect_err(|e| log::error!("Reload #{generation} failed: {e}"))?;

        let mut published = self
            .published
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if generation <= published.generation {
            log::info!("Reload #{generation} superseded by #{}", published.generation);
            return Ok(ReloadOutcome::Superseded);
        }

        if !Arc::ptr_eq(&report.catalog, &catalog::shared()) {
            catalog::install(Arc::clone(&report.catalog));
        }
        let report = Arc::new(report);
        published.generation = generation;
        published.report = Some(Arc::clone(&report));
        Ok(ReloadOutcome::Published(report))
    }
}
