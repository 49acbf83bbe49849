//! Site admin list from the `[site]` config section

use cohort_application::SiteAdminCheck;
use cohort_domain::UserId;
use std::collections::HashSet;

/// [`SiteAdminCheck`] answering from a fixed list of user ids.
#[derive(Debug, Clone, Default)]
pub struct ConfiguredSiteAdmins {
    admins: HashSet<UserId>,
}

impl ConfiguredSiteAdmins {
    pub fn new(admins: impl IntoIterator<Item = i64>) -> Self {
        Self {
            admins: admins.into_iter().map(UserId::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.admins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.admins.is_empty()
    }
}

impl SiteAdminCheck for ConfiguredSiteAdmins {
    fn is_site_admin(&self, viewer: UserId) -> bool {
        self.admins.contains(&viewer)
    }
}
