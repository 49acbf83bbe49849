//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Listing limit must be at least 1, got {0}")]
    InvalidLimit(usize),
}
