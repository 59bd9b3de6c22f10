//! The recompute pipeline
//!
//! Stages run strictly in order: statistics over the whole format, then per
//! archetype allocation, substitution and cost, then format-wide ranking.

pub mod allocation;
pub mod cost;
pub mod meta;
pub mod pass;
pub mod stats;
pub mod substitution;

pub use allocation::{allocate, Allocation, UnlimitedNames};
pub use cost::DeckCost;
pub use meta::{DeckDominance, MetaEntry};
pub use pass::{Advisor, DroppedArchetype, FormatReport, ReloadOutcome, ReloadRequest};
pub use stats::{CardStats, FormatStats};
pub use substitution::{suggest_replacements, LandColors, Replacement};

use crate::archetype::Archetype;
use serde::Serialize;

/// Everything computed for one archetype in a pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArchetypeAnalysis {
    pub archetype: Archetype,
    pub allocation: Allocation,
    /// Suggested swaps in discovery order
    pub replacements: Vec<Replacement>,
    pub cost: DeckCost,
    pub dominance: f64,
}
