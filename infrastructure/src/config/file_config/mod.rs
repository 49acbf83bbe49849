//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod database;
mod listing;
mod site;
mod strings;

pub use database::FileDatabaseConfig;
pub use listing::FileListingConfig;
pub use site::FileSiteConfig;
pub use strings::FileStringsConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("listing.limit cannot be 0")]
    ZeroLimit,

    #[error("database.prefix may only contain ASCII letters, digits and '_': {0:?}")]
    InvalidTablePrefix(String),

    #[error("strings.{0} cannot be empty")]
    EmptyString(&'static str),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Display policy settings
    pub listing: FileListingConfig,
    /// Host database settings
    pub database: FileDatabaseConfig,
    /// Site URL and admin list
    pub site: FileSiteConfig,
    /// Localized labels
    pub strings: FileStringsConfig,
}

impl FileConfig {
    /// Validate the configuration, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.listing.limit == 0 {
            return Err(ConfigValidationError::ZeroLimit);
        }

        if !self.database.prefix_is_valid() {
            return Err(ConfigValidationError::InvalidTablePrefix(
                self.database.prefix.clone(),
            ));
        }

        if let Some(key) = self.strings.blank_keys().first() {
            return Err(ConfigValidationError::EmptyString(key));
        }

        Ok(())
    }
}
