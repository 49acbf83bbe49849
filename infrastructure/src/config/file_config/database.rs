//! Database configuration from TOML (`[database]` section)

use crate::store::DEFAULT_PREFIX;
use serde::{Deserialize, Serialize};

/// Raw database configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDatabaseConfig {
    /// Path to the host's SQLite database
    pub path: Option<String>,
    /// Table name prefix used by the host (`mdl_cohort`, `mdl_cohort_members`)
    pub prefix: String,
}

impl Default for FileDatabaseConfig {
    fn default() -> Self {
        Self {
            path: None,
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

impl FileDatabaseConfig {
    /// Prefixes are spliced into SQL, so only ASCII alphanumerics and `_` pass.
    pub fn prefix_is_valid(&self) -> bool {
        self.prefix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
    }
}
