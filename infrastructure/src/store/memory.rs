//! In-memory cohort store
//!
//! Holds a fixed set of cohorts and memberships. Memberships are kept in
//! insertion order, which is the store's natural order for listings.
//!
//! Fixture files are JSON:
//!
//! ```json
//! {
//!   "cohorts": [{ "id": 1, "name": "Staff", "visible": false }],
//!   "members": [{ "cohortid": 1, "userid": 42 }]
//! }
//! ```

use async_trait::async_trait;
use cohort_application::{CohortStore, StoreError};
use cohort_domain::{Cohort, CohortId, UserId};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct Fixture {
    #[serde(default)]
    cohorts: Vec<Cohort>,
    #[serde(default)]
    members: Vec<FixtureMember>,
}

#[derive(Debug, Deserialize)]
struct FixtureMember {
    cohortid: CohortId,
    userid: UserId,
}

/// Cohort store over in-memory records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCohortStore {
    cohorts: Vec<Cohort>,
    members: Vec<(CohortId, UserId)>,
}

impl InMemoryCohortStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a cohort record.
    pub fn with_cohort(mut self, cohort: Cohort) -> Self {
        match self.cohorts.iter_mut().find(|c| c.id == cohort.id) {
            Some(existing) => *existing = cohort,
            None => self.cohorts.push(cohort),
        }
        self
    }

    /// Adds a membership. Duplicate memberships are ignored.
    pub fn with_member(mut self, cohort: CohortId, user: UserId) -> Self {
        if !self.members.contains(&(cohort, user)) {
            self.members.push((cohort, user));
        }
        self
    }

    /// Parses a JSON fixture.
    ///
    /// # Errors
    ///
    /// [`StoreError::Fixture`] on malformed JSON or a membership that
    /// references an unknown cohort.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let fixture: Fixture =
            serde_json::from_str(json).map_err(|e| StoreError::Fixture(e.to_string()))?;

        let store = fixture
            .cohorts
            .into_iter()
            .fold(Self::new(), |store, cohort| store.with_cohort(cohort));

        fixture.members.into_iter().try_fold(store, |store, member| {
            if store.cohorts.iter().any(|c| c.id == member.cohortid) {
                Ok(store.with_member(member.cohortid, member.userid))
            } else {
                Err(StoreError::Fixture(format!(
                    "membership of user {} references unknown cohort {}",
                    member.userid, member.cohortid
                )))
            }
        })
    }

    /// Reads and parses a JSON fixture file.
    pub fn from_fixture_file(path: &Path) -> Result<Self, StoreError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| StoreError::Fixture(format!("{}: {}", path.display(), e)))?;
        let store = Self::from_json(&json)?;
        debug!(
            "Loaded fixture {} ({} cohorts, {} memberships)",
            path.display(),
            store.cohorts.len(),
            store.members.len()
        );
        Ok(store)
    }

    fn cohorts_for(&self, user: UserId, visible_only: bool) -> impl Iterator<Item = &Cohort> {
        self.members
            .iter()
            .filter(move |(_, member)| *member == user)
            .filter_map(move |(id, _)| self.cohorts.iter().find(|c| c.id == *id))
            .filter(move |c| !visible_only || c.visible)
    }
}

#[async_trait]
impl CohortStore for InMemoryCohortStore {
    async fn list_cohorts_for_user(
        &self,
        user: UserId,
        visible_only: bool,
    ) -> Result<Vec<Cohort>, StoreError> {
        Ok(self.cohorts_for(user, visible_only).cloned().collect())
    }

    async fn count_cohorts_for_user(
        &self,
        user: UserId,
        visible_only: bool,
    ) -> Result<usize, StoreError> {
        Ok(self.cohorts_for(user, visible_only).count())
    }
}
