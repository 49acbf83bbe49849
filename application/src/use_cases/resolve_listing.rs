//! Resolve cohort listing use case
//!
//! This module provides the [`ResolveCohortListingUseCase`] which turns a
//! [`ViewRequest`] into the [`CohortListing`] shown on a profile page.
//!
//! # Flow
//!
//! 1. **Scope** - site admins see every cohort, other viewers only visible ones
//! 2. **List** - fetch the subject's cohorts for that scope from the store
//! 3. **Count** - unless the full list was requested, ask the store for the
//!    total so `has_more` reflects what really exists
//! 4. **Policy** - truncate to the configured limit and mark hidden entries
//!
//! Store failures are passed through untouched; an unknown subject simply
//! has no cohorts.

use crate::ports::cohort_store::{CohortStore, StoreError};
use cohort_domain::{CohortListing, DomainError, ListingPolicy, ViewRequest};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while resolving a listing.
#[derive(Error, Debug)]
pub enum ResolveListingError {
    /// The cohort store failed to answer.
    #[error("Cohort store error: {0}")]
    Store(#[from] StoreError),

    /// The listing policy could not be built.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Use case for resolving the cohorts shown on a profile page.
///
/// Stateless: the same request against an unchanged store always yields the
/// same listing.
pub struct ResolveCohortListingUseCase {
    store: Arc<dyn CohortStore>,
    policy: ListingPolicy,
}

impl ResolveCohortListingUseCase {
    /// Creates a use case with the default display limit.
    pub fn new(store: Arc<dyn CohortStore>) -> Self {
        Self {
            store,
            policy: ListingPolicy::default(),
        }
    }

    /// Creates a use case with a configured display limit.
    ///
    /// # Errors
    ///
    /// [`ResolveListingError::Domain`] when `limit` is zero.
    pub fn with_limit(
        store: Arc<dyn CohortStore>,
        limit: usize,
    ) -> Result<Self, ResolveListingError> {
        Ok(Self {
            store,
            policy: ListingPolicy::new(limit)?,
        })
    }

    /// Resolves the listing for `request`.
    ///
    /// Performs one listing query, plus one count query when the request
    /// does not ask for the full list.
    ///
    /// # Errors
    ///
    /// [`ResolveListingError::Store`] when either query fails.
    pub async fn execute(
        &self,
        request: &ViewRequest,
    ) -> Result<CohortListing, ResolveListingError> {
        let visible_only = request.scope().visible_only();
        debug!(
            subject = %request.subject,
            visible_only,
            show_all = request.show_all,
            "Resolving cohort listing"
        );

        let cohorts = self
            .store
            .list_cohorts_for_user(request.subject, visible_only)
            .await?;

        let total = if self.policy.needs_total(request) {
            Some(
                self.store
                    .count_cohorts_for_user(request.subject, visible_only)
                    .await?,
            )
        } else {
            None
        };

        let listing = self.policy.apply(request, cohorts, total);
        info!(
            subject = %listing.subject,
            shown = listing.len(),
            total = listing.total,
            has_more = listing.has_more,
            "Resolved cohort listing"
        );

        Ok(listing)
    }
}
