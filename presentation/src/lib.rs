//! Presentation layer for cohort-profile
//!
//! This crate turns a resolved cohort listing into the "Cohorts" section of
//! a profile page: request parameter parsing, the HTML fragment, the profile
//! tree it is attached to, and the CLI definitions.

pub mod cli;
pub mod config;
pub mod profile;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use config::{ProfileStrings, ProfileUrls};
pub use profile::{
    html::CohortListingHtml,
    navigation::{CATEGORY_NAME, CohortProfileNavigation, NODE_NAME, NavigationError},
    params::{ParamsError, ProfileParams},
    tree::{Category, MyProfileTree, Node, ProfileTree, TreeError},
};
