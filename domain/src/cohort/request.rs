//! Per-request inputs to the cohort listing

use super::entities::{Cohort, UserId};
use serde::{Deserialize, Serialize};

/// Which cohorts a viewer is allowed to see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisibilityScope {
    /// Every cohort, hidden ones included (site admins)
    All,
    /// Only cohorts flagged visible
    VisibleOnly,
}

impl VisibilityScope {
    pub fn for_viewer(viewer_is_admin: bool) -> Self {
        if viewer_is_admin {
            Self::All
        } else {
            Self::VisibleOnly
        }
    }

    pub fn visible_only(self) -> bool {
        matches!(self, Self::VisibleOnly)
    }

    pub fn admits(self, cohort: &Cohort) -> bool {
        match self {
            Self::All => true,
            Self::VisibleOnly => cohort.visible,
        }
    }
}

/// A single request to list the cohorts of a profile's subject.
///
/// # Examples
///
/// ```
/// use cohort_domain::{UserId, ViewRequest, VisibilityScope};
///
/// let request = ViewRequest::new(UserId::new(42)).with_show_all(true);
/// assert_eq!(request.scope(), VisibilityScope::VisibleOnly);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewRequest {
    /// Owner of the profile being viewed
    pub subject: UserId,
    /// Whether the viewer bypasses cohort visibility
    pub viewer_is_admin: bool,
    /// Whether the viewer asked for the unbounded list
    pub show_all: bool,
}

impl ViewRequest {
    pub fn new(subject: UserId) -> Self {
        Self {
            subject,
            viewer_is_admin: false,
            show_all: false,
        }
    }

    pub fn with_admin_viewer(mut self, viewer_is_admin: bool) -> Self {
        self.viewer_is_admin = viewer_is_admin;
        self
    }

    pub fn with_show_all(mut self, show_all: bool) -> Self {
        self.show_all = show_all;
        self
    }

    pub fn scope(&self) -> VisibilityScope {
        VisibilityScope::for_viewer(self.viewer_is_admin)
    }
}
