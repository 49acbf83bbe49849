//! Infrastructure layer for cohort-profile
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod permissions;
pub mod store;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileDatabaseConfig, FileListingConfig,
    FileSiteConfig, FileStringsConfig,
};
pub use permissions::ConfiguredSiteAdmins;
pub use store::{InMemoryCohortStore, SqliteCohortStore};
