//! Cohorts section of the profile page
//!
//! [`CohortProfileNavigation`] is the thin adapter between the host's
//! profile page and the listing use case:
//!
//! 1. read `showallcohorts` from the request
//! 2. ask the host whether the viewer is a site admin
//! 3. resolve the listing
//! 4. attach a `cohortdetails` category and a `cohortprofile` node holding
//!    the HTML fragment, or leave the tree alone when there is nothing to show

use crate::config::{ProfileStrings, ProfileUrls};
use crate::profile::html::CohortListingHtml;
use crate::profile::params::ProfileParams;
use crate::profile::tree::{Category, Node, ProfileTree, TreeError};
use cohort_application::{ResolveCohortListingUseCase, ResolveListingError, SiteAdminCheck};
use cohort_domain::{CohortListing, UserId, ViewRequest};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

pub const CATEGORY_NAME: &str = "cohortdetails";
pub const NODE_NAME: &str = "cohortprofile";

#[derive(Error, Debug)]
pub enum NavigationError {
    #[error(transparent)]
    Resolve(#[from] ResolveListingError),

    #[error("Profile tree error: {0}")]
    Tree(#[from] TreeError),

    #[error("Failed to render cohorts section: {0}")]
    Render(#[from] askama::Error),
}

pub struct CohortProfileNavigation {
    use_case: ResolveCohortListingUseCase,
    admins: Arc<dyn SiteAdminCheck>,
    html: CohortListingHtml,
}

impl CohortProfileNavigation {
    pub fn new(
        use_case: ResolveCohortListingUseCase,
        admins: Arc<dyn SiteAdminCheck>,
        strings: ProfileStrings,
        urls: ProfileUrls,
    ) -> Self {
        Self {
            use_case,
            admins,
            html: CohortListingHtml::new(strings, urls),
        }
    }

    /// Adds the cohorts section for `subject`'s profile as seen by `viewer`.
    ///
    /// Anonymous viewers (`None`) are never site admins. Returns the
    /// resolved listing; the tree is only touched when it is non-empty.
    pub async fn extend(
        &self,
        tree: &mut dyn ProfileTree,
        subject: UserId,
        viewer: Option<UserId>,
        params: &ProfileParams,
    ) -> Result<CohortListing, NavigationError> {
        let viewer_is_admin = viewer.is_some_and(|v| self.admins.is_site_admin(v));
        let request = ViewRequest::new(subject)
            .with_admin_viewer(viewer_is_admin)
            .with_show_all(params.show_all());

        let listing = self.use_case.execute(&request).await?;
        if listing.is_empty() {
            debug!(subject = %subject, "No cohorts to show, skipping section");
            return Ok(listing);
        }

        let title = self.html.strings().cohorts.clone();
        let content = self.html.render(&listing)?;
        tree.add_category(Category::new(CATEGORY_NAME, title))?;
        tree.add_node(Node::new(CATEGORY_NAME, NODE_NAME, content))?;

        Ok(listing)
    }
}
