//! Cohort entities and identifiers
//!
//! Cohorts and their memberships are owned by the host's store. This crate
//! only ever reads them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a user in the host system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub const fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a cohort in the host system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CohortId(i64);

impl CohortId {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub const fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for CohortId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for CohortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn default_visible() -> bool {
    true
}

/// A named group of users.
///
/// `visible` controls whether viewers without site admin rights may see the
/// cohort at all. `idnumber` and `description` are carried through from the
/// store but never shown on the profile page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cohort {
    pub id: CohortId,
    pub name: String,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idnumber: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Cohort {
    pub fn new(id: i64, name: impl Into<String>, visible: bool) -> Self {
        Self {
            id: CohortId::new(id),
            name: name.into(),
            visible,
            idnumber: None,
            description: None,
        }
    }

    pub fn with_idnumber(mut self, idnumber: impl Into<String>) -> Self {
        self.idnumber = Some(idnumber.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Hidden cohorts are shown de-emphasized, and only to site admins.
    pub fn is_hidden(&self) -> bool {
        !self.visible
    }
}
