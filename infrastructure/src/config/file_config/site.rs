//! Site configuration from TOML (`[site]` section)

use serde::{Deserialize, Serialize};

/// Raw site configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSiteConfig {
    /// Base URL of the site, without trailing slash
    pub wwwroot: String,
    /// User ids holding site admin rights
    pub admins: Vec<i64>,
}
