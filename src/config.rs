//! Bootstrap settings.
//!
//! A page may embed a JSON object in
//! `<script type="application/json" id="survey-checker-config">`; every field
//! is optional and falls back to the defaults below.

use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing::{warn, Level};

use crate::Result;

/// Element id the web shell reads the JSON config from.
pub const CONFIG_ELEMENT_ID: &str = "survey-checker-config";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BootConfig {
    /// `<input type=...>` values the wheel guard blurs.
    #[serde(default = "default_guarded_input_types")]
    pub guarded_input_types: Vec<String>,
    /// Log a failed application init instead of rethrowing it to the page.
    #[serde(default = "default_true")]
    pub report_init_failures: bool,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_guarded_input_types() -> Vec<String> {
    vec!["number".to_string()]
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            guarded_input_types: default_guarded_input_types(),
            report_init_failures: default_true(),
            log_level: default_log_level(),
        }
    }
}

/// What happens when the spawned application initializer fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InitFailurePolicy {
    /// Log at `error` level and carry on.
    #[default]
    Report,
    /// Hand the error back to the host, which surfaces it as an unhandled
    /// page-level error.
    Propagate,
}

impl BootConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn init_failure_policy(&self) -> InitFailurePolicy {
        if self.report_init_failures {
            InitFailurePolicy::Report
        } else {
            InitFailurePolicy::Propagate
        }
    }

    /// Parsed `log_level`; unknown names fall back to `INFO`.
    pub fn level_filter(&self) -> LevelFilter {
        match self.log_level.trim().parse::<LevelFilter>() {
            Ok(level) => level,
            Err(_) => {
                warn!("unknown log level {:?}, using info", self.log_level);
                LevelFilter::INFO
            }
        }
    }

    /// Most verbose level to emit, `None` when logging is `off`.
    pub fn max_level(&self) -> Option<Level> {
        self.level_filter().into_level()
    }
}
