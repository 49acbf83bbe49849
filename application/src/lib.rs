//! Application layer for cohort-profile
//!
//! This crate contains the use case that resolves a profile's cohort listing
//! and the port definitions it depends on. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    cohort_store::{CohortStore, StoreError},
    site_admin::SiteAdminCheck,
};
pub use use_cases::resolve_listing::{ResolveCohortListingUseCase, ResolveListingError};
