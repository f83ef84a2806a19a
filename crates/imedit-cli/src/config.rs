//! Runtime configuration for the command-line editor.

use imedit_core::DEFAULT_THUMBNAIL_WIDTH;

/// Default log filter when neither `IMEDIT_LOG` nor `--verbose` is given.
const DEFAULT_LOG_FILTER: &str = "info";

/// Settings that come from the environment rather than the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Thumbnail width used when `thumbnail` is run without `--width`.
    pub thumbnail_width: u32,
    /// `tracing` filter directive.
    pub log_filter: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            thumbnail_width: DEFAULT_THUMBNAIL_WIDTH,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl CliConfig {
    /// Defaults overridden by `IMEDIT_THUMBNAIL_WIDTH` and `IMEDIT_LOG`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            thumbnail_width: lookup("IMEDIT_THUMBNAIL_WIDTH")
                .and_then(|s| s.parse().ok())
                .filter(|w| *w > 0)
                .unwrap_or(defaults.thumbnail_width),
            log_filter: lookup("IMEDIT_LOG").unwrap_or(defaults.log_filter),
        }
    }
}
