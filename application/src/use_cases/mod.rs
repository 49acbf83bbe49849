//! Use cases

pub mod resolve_listing;
