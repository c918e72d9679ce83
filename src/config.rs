//! Search configuration, read from a TOML file such as
//!
//! ```toml
//! engine = "graph-astar"
//! max-depth = 30
//! heuristic = "zero"
//! verbosity = "verbose"
//! ```
//!
//! Every key is optional.

use crate::search::{
    search_engines::DEFAULT_MAX_DEPTH, HeuristicName, Problem, SearchEngine, SearchEngineName,
    Verbosity,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct SearchConfig {
    #[serde(default = "default_engine")]
    pub engine: SearchEngineName,
    /// Largest depth limit tried by iterative deepening, ignored by the other
    /// engines.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    #[serde(default)]
    pub heuristic: HeuristicName,
    #[serde(default)]
    pub verbosity: Verbosity,
}

fn default_engine() -> SearchEngineName {
    SearchEngineName::GraphAstar
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            engine: default_engine(),
            max_depth: default_max_depth(),
            heuristic: HeuristicName::default(),
            verbosity: Verbosity::default(),
        }
    }
}

impl SearchConfig {
    pub fn from_text(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_text(&text)
    }

    pub fn to_text(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    pub fn create_engine<P: Problem>(&self) -> Box<dyn SearchEngine<P>> {
        self.engine.create(self.max_depth)
    }
}
