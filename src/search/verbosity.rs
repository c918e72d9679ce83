use serde::{Deserialize, Serialize};

/// How much the search logs. Maps onto `tracing` levels.
#[derive(
    clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Verbosity {
    /// Errors only
    Silent,
    /// Start and end of each search, periodic statistics
    #[default]
    Normal,
    /// Depth limit iterations and fringe exhaustion
    Verbose,
    /// Every expansion and successor enumeration
    Debug,
}

impl From<Verbosity> for tracing::Level {
    fn from(value: Verbosity) -> Self {
        match value {
            Verbosity::Silent => tracing::Level::ERROR,
            Verbosity::Normal => tracing::Level::INFO,
            Verbosity::Verbose => tracing::Level::DEBUG,
            Verbosity::Debug => tracing::Level::TRACE,
        }
    }
}
