//! Port for the host's site admin check.
//!
//! Site admins bypass cohort visibility. The check is a plain predicate on
//! the viewer; anonymous viewers are never admins.

use cohort_domain::UserId;

pub trait SiteAdminCheck: Send + Sync {
    /// Whether `viewer` holds site admin rights.
    fn is_site_admin(&self, viewer: UserId) -> bool;
}
