//! Configuration file loading for cohort-profile
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `COHORT_PROFILE_<SECTION>__<KEY>`
//! 2. `--config <path>` specified file
//! 3. Project root: `./cohort-profile.toml` or `./.cohort-profile.toml`
//! 4. Global: `$XDG_CONFIG_HOME/cohort-profile/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileDatabaseConfig, FileListingConfig, FileSiteConfig,
    FileStringsConfig,
};
pub use loader::ConfigLoader;
