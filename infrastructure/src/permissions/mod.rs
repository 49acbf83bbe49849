//! Site admin checks backed by configuration

mod site_admins;

pub use site_admins::ConfiguredSiteAdmins;
