//! Debugger settings, read from TOML.
//!
//! Every key is optional. A file is parsed into patch structs and merged
//! over the defaults, so unknown or missing keys never fail the load.

mod features;
mod logging;

use std::collections::HashMap;

pub use features::FeatureSettings;
use features::FeatureSettingsPatch;
pub use logging::{LogLevel, LoggingSettings};
use logging::LoggingSettingsPatch;
use serde::Deserialize;
use toml::Value;

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DebuggerSettings {
    pub features: FeatureSettings,
    pub logging: LoggingSettings,
}

impl DebuggerSettings {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Self::default().merged_with_toml(source)
    }

    pub fn merged_with_toml(&self, source: &str) -> Result<Self> {
        let patch: DebuggerSettingsPatch = toml::from_str(source)?;
        let mut merged = self.clone();
        merged.apply_patch(patch);
        Ok(merged)
    }

    fn apply_patch(&mut self, patch: DebuggerSettingsPatch) {
        if let Some(p) = patch.features {
            self.features.apply_patch(p);
        }
        if let Some(p) = patch.logging {
            self.logging.apply_patch(p);
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct DebuggerSettingsPatch {
    features: Option<FeatureSettingsPatch>,
    logging: Option<LoggingSettingsPatch>,
    #[serde(flatten)]
    _extra: HashMap<String, Value>,
}
