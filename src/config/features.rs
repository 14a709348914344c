use std::collections::HashMap;

use serde::Deserialize;
use toml::Value;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureSettings {
    /// Match breakpoints by line and column instead of line only.
    pub column_breakpoints: bool,
}

impl FeatureSettings {
    pub(crate) fn apply_patch(&mut self, patch: FeatureSettingsPatch) {
        if let Some(v) = patch.column_breakpoints {
            self.column_breakpoints = v;
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct FeatureSettingsPatch {
    pub(crate) column_breakpoints: Option<bool>,
    #[serde(flatten)]
    pub(crate) _extra: HashMap<String, Value>,
}
