//! Domain layer for cohort-profile
//!
//! This crate contains the cohort entities, the listing value objects and the
//! display policy that decides which cohorts a viewer sees on a profile page.
//! It has no dependencies on storage or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Cohort**: a named group of users with a visibility flag
//! - **Visibility scope**: site admins see every cohort, everyone else only
//!   the visible ones
//! - **Listing policy**: truncates the list to a configured limit and reports
//!   whether more cohorts exist beyond it

pub mod cohort;
pub mod core;

// Re-export commonly used types
pub use cohort::{
    entities::{Cohort, CohortId, UserId},
    policy::{DEFAULT_LIMIT, ListingPolicy},
    request::{ViewRequest, VisibilityScope},
    value_objects::{CohortEntry, CohortListing},
};
pub use core::error::DomainError;
