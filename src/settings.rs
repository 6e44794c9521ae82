//! # Settings Module
//!
//! ## Purpose
//! Configuration of a structural analysis run, kept in a small JSON file
//! (`reactnet_settings.json` by default). A missing file means default settings.
//!
//! ## Configuration Format
//! ```json
//! {
//!   "naming": { "prefix": "w", "probe": "w1" },
//!   "max_cycles": 1000,
//!   "max_clique_size": null,
//!   "log_level": "info"
//! }
//! ```
//!
//! ## Usage
//! ```rust, ignore
//! let settings = AnalysisSettings::from_file("reactnet_settings.json");
//! let cycles = settings.collect_valid_cycles(&path_graph);
//! ```
use crate::NetworkStructure::all_cliques::{AllCliques, NeighborLookup};
use crate::NetworkStructure::bipartite_edges::ReactionNaming;
use crate::NetworkStructure::path_graph::{PathGraph, TransferPath};
use log::{LevelFilter, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::hash::Hash;
use std::path::Path;
use std::str::FromStr;

pub const DEFAULT_SETTINGS_FILE: &str = "reactnet_settings.json";

/// settings of one analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// naming convention of reaction nodes, used when a bipartite graph comes without roles
    pub naming: ReactionNaming,
    /// stop after this many valid cycles
    pub max_cycles: Option<usize>,
    /// do not grow cliques beyond this size
    pub max_clique_size: Option<usize>,
    pub log_level: String,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            naming: ReactionNaming::default(),
            max_cycles: None,
            max_clique_size: None,
            log_level: "info".to_string(),
        }
    }
}

impl AnalysisSettings {
    /// Loads settings from a JSON file, missing keys take their default values.
    ///
    /// # Returns
    /// * `Ok(AnalysisSettings)` - parsed settings, or defaults if the file does not exist
    /// * `Err(Box<dyn std::error::Error>)` - unreadable file or invalid JSON
    pub fn load(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        if Path::new(path).exists() {
            let content = fs::read_to_string(path)?;
            let settings: AnalysisSettings = serde_json::from_str(&content)?;
            Ok(settings)
        } else {
            Ok(Self::default())
        }
    }

    /// like `load`, but falls back to defaults on any error
    pub fn from_file(path: &str) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            warn!("settings file '{}' ignored: {}", path, e);
            Self::default()
        })
    }

    pub fn save(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// `log_level` as a filter, unknown names give `Info`
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(self.log_level.trim()).unwrap_or_else(|_| {
            warn!("unknown log level '{}', using info", self.log_level);
            LevelFilter::Info
        })
    }

    /// valid cycles of a path graph, capped by `max_cycles`
    pub fn collect_valid_cycles<T>(&self, graph: &PathGraph<T>) -> Vec<Vec<TransferPath<T>>>
    where
        T: Clone + Ord + Hash,
    {
        graph.collect_valid_cycles(self.max_cycles)
    }

    /// clique producer honouring `max_clique_size`
    pub fn clique_enumerator<G>(&self, graph: &G) -> AllCliques<G::Node>
    where
        G: NeighborLookup,
    {
        let cliques = AllCliques::new(graph);
        match self.max_clique_size {
            Some(max_size) => cliques.with_max_size(max_size),
            None => cliques,
        }
    }
}
