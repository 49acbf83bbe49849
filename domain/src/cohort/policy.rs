//! Cohort listing policy.
//!
//! Decides which of a subject's cohorts a viewer sees and how many of them
//! are shown before the "view more" link takes over.
//!
//! # Rules
//!
//! 1. Viewers without site admin rights never see hidden cohorts, and hidden
//!    cohorts do not count towards the total either.
//! 2. Unless the viewer asked for everything, at most `limit` cohorts are
//!    shown, in the order the store returned them.
//! 3. `has_more` is set only when the visible total exceeds what was shown.
//!
//! # Examples
//!
//! ```
//! use cohort_domain::{Cohort, ListingPolicy, UserId, ViewRequest};
//!
//! let policy = ListingPolicy::new(2).unwrap();
//! let cohorts = vec![
//!     Cohort::new(1, "A", true),
//!     Cohort::new(2, "B", true),
//!     Cohort::new(3, "C", true),
//! ];
//!
//! let listing = policy.apply(&ViewRequest::new(UserId::new(7)), cohorts, Some(3));
//! assert_eq!(listing.names(), vec!["A", "B"]);
//! assert!(listing.has_more);
//! ```

use super::entities::Cohort;
use super::request::ViewRequest;
use super::value_objects::{CohortEntry, CohortListing};
use crate::core::error::DomainError;

/// Number of cohorts shown before the "view more" link.
pub const DEFAULT_LIMIT: usize = 10;

/// Visibility filtering and truncation of a subject's cohorts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingPolicy {
    limit: usize,
}

impl Default for ListingPolicy {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
        }
    }
}

impl ListingPolicy {
    pub fn new(limit: usize) -> Result<Self, DomainError> {
        if limit == 0 {
            return Err(DomainError::InvalidLimit(limit));
        }
        Ok(Self { limit })
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Whether a separate total is needed to decide `has_more`.
    pub fn needs_total(&self, request: &ViewRequest) -> bool {
        !request.show_all
    }

    /// Build the listing from the cohorts fetched for the request's scope.
    ///
    /// `total` is the store's count for the same scope; when absent the
    /// length of `cohorts` after filtering is used. The scope filter is
    /// applied again here so hidden cohorts never reach a non-admin even if
    /// the store returned them. A store that leaked hidden cohorts into the
    /// listing cannot be trusted for the count either, so the filtered
    /// length becomes the total in that case.
    pub fn apply(
        &self,
        request: &ViewRequest,
        cohorts: Vec<Cohort>,
        total: Option<usize>,
    ) -> CohortListing {
        let scope = request.scope();
        let fetched = cohorts.len();
        let admitted: Vec<Cohort> = cohorts.into_iter().filter(|c| scope.admits(c)).collect();
        let admitted_len = admitted.len();

        if admitted.is_empty() {
            return CohortListing::empty(request.subject);
        }

        if request.show_all {
            return CohortListing {
                subject: request.subject,
                entries: admitted.into_iter().map(CohortEntry::from).collect(),
                total: admitted_len,
                has_more: false,
            };
        }

        let total = match total {
            Some(_) if admitted_len < fetched => admitted_len,
            Some(count) => count,
            None => admitted_len,
        };
        let entries: Vec<CohortEntry> = admitted
            .into_iter()
            .take(self.limit)
            .map(CohortEntry::from)
            .collect();
        let has_more = total > entries.len();

        CohortListing {
            subject: request.subject,
            entries,
            total,
            has_more,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cohort::entities::UserId;

    // ==================== Helper ====================

    fn visible_cohorts(count: usize) -> Vec<Cohort> {
        (1..=count)
            .map(|i| Cohort::new(i as i64, format!("Cohort {i}"), true))
            .collect()
    }

    fn subject() -> UserId {
        UserId::new(42)
    }

    // ==================== Construction ====================

    #[test]
    fn test_default_limit_is_ten() {
        assert_eq!(ListingPolicy::default().limit(), 10);
        assert_eq!(DEFAULT_LIMIT, 10);
    }

    #[test]
    fn test_zero_limit_rejected() {
        assert_eq!(ListingPolicy::new(0), Err(DomainError::InvalidLimit(0)));
        assert_eq!(ListingPolicy::new(3).unwrap().limit(), 3);
    }

    #[test]
    fn test_needs_total_only_when_truncating() {
        let policy = ListingPolicy::default();
        let request = ViewRequest::new(subject());
        assert!(policy.needs_total(&request));
        assert!(!policy.needs_total(&request.with_show_all(true)));
    }

    // ==================== Truncation ====================

    #[test]
    fn test_empty_input_gives_empty_listing() {
        let listing = ListingPolicy::default().apply(&ViewRequest::new(subject()), vec![], Some(0));
        assert!(listing.is_empty());
        assert!(!listing.has_more);
        assert_eq!(listing.total, 0);
    }

    #[test]
    fn test_at_or_below_limit_shows_everything() {
        let policy = ListingPolicy::default();
        for count in [1, 9, 10] {
            for show_all in [false, true] {
                let request = ViewRequest::new(subject()).with_show_all(show_all);
                let listing = policy.apply(&request, visible_cohorts(count), Some(count));
                assert_eq!(listing.len(), count);
                assert!(!listing.has_more, "count={count} show_all={show_all}");
            }
        }
    }

    #[test]
    fn test_above_limit_truncates_and_flags_more() {
        let request = ViewRequest::new(subject()).with_admin_viewer(true);
        let listing = ListingPolicy::default().apply(&request, visible_cohorts(12), Some(12));

        assert_eq!(listing.len(), 10);
        assert_eq!(listing.total, 12);
        assert!(listing.has_more);
        assert_eq!(listing.entries[0].name, "Cohort 1");
        assert_eq!(listing.entries[9].name, "Cohort 10");
    }

    #[test]
    fn test_show_all_returns_everything() {
        let request = ViewRequest::new(subject()).with_show_all(true);
        let listing = ListingPolicy::default().apply(&request, visible_cohorts(12), None);

        assert_eq!(listing.len(), 12);
        assert_eq!(listing.total, 12);
        assert!(!listing.has_more);
    }

    #[test]
    fn test_exactly_limit_is_not_more() {
        let policy = ListingPolicy::new(3).unwrap();
        let listing = policy.apply(&ViewRequest::new(subject()), visible_cohorts(3), Some(3));
        assert_eq!(listing.len(), 3);
        assert!(!listing.has_more);
    }

    #[test]
    fn test_missing_total_falls_back_to_admitted_count() {
        let policy = ListingPolicy::new(2).unwrap();
        let listing = policy.apply(&ViewRequest::new(subject()), visible_cohorts(5), None);
        assert_eq!(listing.len(), 2);
        assert_eq!(listing.total, 5);
        assert!(listing.has_more);
    }

    // ==================== Visibility ====================

    #[test]
    fn test_admin_sees_hidden_cohort_dimmed() {
        let cohorts = vec![Cohort::new(1, "A", true), Cohort::new(2, "B", false)];
        let request = ViewRequest::new(subject()).with_admin_viewer(true);
        let listing = ListingPolicy::default().apply(&request, cohorts, Some(2));

        assert_eq!(
            listing.entries,
            vec![CohortEntry::new("A", false), CohortEntry::new("B", true)]
        );
        assert!(!listing.has_more);
    }

    #[test]
    fn test_non_admin_never_sees_hidden_cohort() {
        let cohorts = vec![Cohort::new(1, "A", true), Cohort::new(2, "B", false)];
        let request = ViewRequest::new(subject());
        let listing = ListingPolicy::default().apply(&request, cohorts, Some(1));

        assert_eq!(listing.entries, vec![CohortEntry::new("A", false)]);
        assert_eq!(listing.dimmed_count(), 0);
        assert!(!listing.has_more);
    }

    #[test]
    fn test_hidden_cohorts_do_not_count_for_non_admin() {
        // 10 visible + 3 hidden: a non-admin sees exactly the limit, nothing more
        let mut cohorts = visible_cohorts(10);
        cohorts.extend((11..=13).map(|i| Cohort::new(i, format!("Hidden {i}"), false)));

        let request = ViewRequest::new(subject());
        let listing = ListingPolicy::default().apply(&request, cohorts, None);
        assert_eq!(listing.len(), 10);
        assert_eq!(listing.total, 10);
        assert!(!listing.has_more);
    }

    #[test]
    fn test_leaked_hidden_cohorts_do_not_inflate_store_count() {
        // The store ignored the visibility scope in both queries
        let mut cohorts = visible_cohorts(10);
        cohorts.extend((11..=13).map(|i| Cohort::new(i, format!("Hidden {i}"), false)));

        let request = ViewRequest::new(subject());
        let listing = ListingPolicy::default().apply(&request, cohorts, Some(13));
        assert_eq!(listing.len(), 10);
        assert_eq!(listing.total, 10);
        assert_eq!(listing.dimmed_count(), 0);
        assert!(!listing.has_more);
    }

    #[test]
    fn test_store_count_is_kept_when_nothing_was_filtered() {
        let request = ViewRequest::new(subject()).with_admin_viewer(true);
        let listing = ListingPolicy::new(2)
            .unwrap()
            .apply(&request, visible_cohorts(2), Some(5));
        assert_eq!(listing.total, 5);
        assert!(listing.has_more);
    }

    #[test]
    fn test_only_hidden_cohorts_yield_empty_listing_for_non_admin() {
        let cohorts = vec![Cohort::new(1, "Staff", false)];
        let request = ViewRequest::new(subject());
        let listing = ListingPolicy::default().apply(&request, cohorts, Some(1));
        assert_eq!(listing, CohortListing::empty(subject()));
    }

    #[test]
    fn test_apply_is_deterministic() {
        let policy = ListingPolicy::new(4).unwrap();
        let request = ViewRequest::new(subject());
        let first = policy.apply(&request, visible_cohorts(6), Some(6));
        let second = policy.apply(&request, visible_cohorts(6), Some(6));
        assert_eq!(first, second);
    }
}
