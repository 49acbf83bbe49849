//! Presentation-level configuration
//!
//! Localized labels and site URLs used when rendering the cohorts section.

use cohort_domain::UserId;
use serde::{Deserialize, Serialize};

/// Localized labels for the cohorts section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileStrings {
    /// Section heading
    pub cohorts: String,
    /// Tooltip on hidden cohorts
    pub hidden: String,
    /// Label of the link to the full list
    pub viewmore: String,
}

impl Default for ProfileStrings {
    fn default() -> Self {
        Self {
            cohorts: "Cohorts".to_string(),
            hidden: "Hidden".to_string(),
            viewmore: "View more".to_string(),
        }
    }
}

/// Site URLs for links in the cohorts section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileUrls {
    /// Site base URL without trailing slash; empty for site-relative links
    pub wwwroot: String,
}

impl ProfileUrls {
    pub fn new(wwwroot: impl Into<String>) -> Self {
        Self {
            wwwroot: wwwroot.into().trim_end_matches('/').to_string(),
        }
    }

    /// Profile page of `user` with every cohort listed.
    pub fn show_all_cohorts(&self, user: UserId) -> String {
        format!(
            "{}/user/profile.php?id={}&showallcohorts=1",
            self.wwwroot, user
        )
    }
}
