//! [`CohortStore`](cohort_application::CohortStore) adapters
//!
//! - [`SqliteCohortStore`]: reads the host's `cohort` tables through sqlx
//! - [`InMemoryCohortStore`]: fixed memberships, loadable from a JSON fixture

mod memory;
mod sqlite;

pub use memory::InMemoryCohortStore;
pub use sqlite::{DEFAULT_PREFIX, SqliteCohortStore};
