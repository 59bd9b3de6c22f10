//! Advisor configuration

use crate::engine::allocation::UnlimitedNames;
use crate::loader::snapshot::read_json;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunables of a reload pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    /// Names exempt from the four-copy deck limit
    pub unlimited_names: Vec<String>,
    /// Rows kept in the published meta report
    pub meta_report_size: usize,
    /// Decks kept in the "most worth building" list
    pub top_decks: usize,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        AdvisorConfig {
            unlimited_names: vec![
                "Persistent Petitioners".to_string(),
                "Rat Colony".to_string(),
            ],
            meta_report_size: 70,
            top_decks: 10,
        }
    }
}

impl AdvisorConfig {
    /// Load from a JSON file; missing fields keep their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let config: AdvisorConfig = read_json(path)?;
        log::debug!("Loaded config from {}: {config:?}", path.display());
        Ok(config)
    }

    pub fn unlimited(&self) -> UnlimitedNames {
        UnlimitedNames::new(&self.unlimited_names)
    }
}
