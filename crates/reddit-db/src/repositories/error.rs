//! Error handling utilities for repositories

use reddit_core::{DomainError, StoreError};

/// Convert a store error to a DomainError
pub fn map_store_error(e: StoreError) -> DomainError {
    DomainError::from(e)
}
