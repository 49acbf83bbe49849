//! Profile page integration
//!
//! - [`params`]: the `showallcohorts` request parameter
//! - [`html`]: the cohort listing fragment
//! - [`tree`]: categories and nodes of the profile page
//! - [`navigation`]: resolves the listing and attaches it to the tree

pub mod html;
pub mod navigation;
pub mod params;
pub mod tree;
