//! Resolved listing value objects

use super::entities::{Cohort, UserId};
use serde::{Deserialize, Serialize};

/// One cohort as it appears on the profile page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CohortEntry {
    pub name: String,
    /// Hidden cohort shown to a site admin; rendered de-emphasized
    pub dimmed: bool,
}

impl CohortEntry {
    pub fn new(name: impl Into<String>, dimmed: bool) -> Self {
        Self {
            name: name.into(),
            dimmed,
        }
    }
}

impl From<Cohort> for CohortEntry {
    fn from(cohort: Cohort) -> Self {
        let dimmed = cohort.is_hidden();
        Self {
            name: cohort.name,
            dimmed,
        }
    }
}

/// The cohorts shown on one profile page.
///
/// `entries` keeps the store's iteration order. `total` is the number of
/// cohorts the viewer is allowed to see, of which `entries` may be a prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CohortListing {
    pub subject: UserId,
    pub entries: Vec<CohortEntry>,
    pub total: usize,
    pub has_more: bool,
}

impl CohortListing {
    pub fn empty(subject: UserId) -> Self {
        Self {
            subject,
            entries: Vec::new(),
            total: 0,
            has_more: false,
        }
    }

    /// An empty listing means the profile gets no cohorts section at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn dimmed_count(&self) -> usize {
        self.entries.iter().filter(|e| e.dimmed).count()
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }
}
