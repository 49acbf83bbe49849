//! Cohorts and the profile listing built from them.
//!
//! - [`entities`]: identifiers and the [`Cohort`](entities::Cohort) record
//! - [`request`]: who is looking and how much they asked to see
//! - [`value_objects`]: the resolved [`CohortListing`](value_objects::CohortListing)
//! - [`policy`]: visibility filtering and truncation

pub mod entities;
pub mod policy;
pub mod request;
pub mod value_objects;
