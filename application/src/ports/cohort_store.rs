//! Port for reading cohort memberships.
//!
//! The host owns the `cohort` and `cohort_members` records; adapters only
//! read them. Both queries take the same `visible_only` flag so the listing
//! and the count always agree on which cohorts exist for the viewer.

use async_trait::async_trait;
use cohort_domain::{Cohort, UserId};
use thiserror::Error;

/// Errors raised by a cohort store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Invalid fixture: {0}")]
    Fixture(String),
}

#[async_trait]
pub trait CohortStore: Send + Sync {
    /// Cohorts `user` is a member of, in the store's natural order.
    ///
    /// With `visible_only`, hidden cohorts are left out by the query itself.
    /// An unknown user yields an empty list.
    async fn list_cohorts_for_user(
        &self,
        user: UserId,
        visible_only: bool,
    ) -> Result<Vec<Cohort>, StoreError>;

    /// Number of cohorts [`list_cohorts_for_user`](Self::list_cohorts_for_user)
    /// would return for the same arguments.
    async fn count_cohorts_for_user(
        &self,
        user: UserId,
        visible_only: bool,
    ) -> Result<usize, StoreError>;
}
