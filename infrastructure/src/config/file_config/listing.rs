//! Listing configuration from TOML (`[listing]` section)

use cohort_domain::DEFAULT_LIMIT;
use serde::{Deserialize, Serialize};

/// Raw listing configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileListingConfig {
    /// Cohorts shown before the "view more" link
    pub limit: usize,
}

impl Default for FileListingConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_limit_deserialize() {
        let toml_str = r#"
[listing]
limit = 25
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.listing.limit, 25);
    }
}
