//! Localized labels from TOML (`[strings]` section)

use serde::{Deserialize, Serialize};

/// Raw string table from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStringsConfig {
    /// Heading of the profile section
    pub cohorts: String,
    /// Tooltip on hidden cohorts
    pub hidden: String,
    /// Label of the link to the full list
    pub viewmore: String,
}

impl Default for FileStringsConfig {
    fn default() -> Self {
        Self {
            cohorts: "Cohorts".to_string(),
            hidden: "Hidden".to_string(),
            viewmore: "View more".to_string(),
        }
    }
}

impl FileStringsConfig {
    /// Keys whose label is blank.
    pub fn blank_keys(&self) -> Vec<&'static str> {
        [
            ("cohorts", &self.cohorts),
            ("hidden", &self.hidden),
            ("viewmore", &self.viewmore),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(key, _)| key)
        .collect()
    }
}
