//! Transaction runner
//!
//! Runs a transaction body against the document store, retrying the whole
//! body when the commit loses a race. Each attempt gets a fresh
//! [`Transaction`], so reads are redone against the latest data.

use std::future::Future;

use reddit_core::{DocumentStore, DomainError, StoreError, Transaction};
use tracing::{debug, warn};

use super::error::ServiceResult;

/// What a transaction body decided
#[derive(Debug)]
pub enum TxOutcome<T> {
    /// Commit the buffered writes, then return the value
    Commit(Transaction, T),
    /// Nothing to write
    ReadOnly(T),
}

/// Run `body` until its writes commit or it returns an error
///
/// # Errors
/// Any error returned by `body` aborts immediately with nothing written.
/// Losing `max_attempts` commits in a row yields `BackendUnavailable`.
pub async fn run_transaction<T, F, Fut>(
    store: &dyn DocumentStore,
    max_attempts: u32,
    mut body: F,
) -> ServiceResult<T>
where
    F: FnMut(Transaction) -> Fut,
    Fut: Future<Output = ServiceResult<TxOutcome<T>>>,
{
    let max_attempts = max_attempts.max(1);

    for attempt in 1..=max_attempts {
        let (tx, value) = match body(Transaction::new()).await? {
            TxOutcome::ReadOnly(value) => return Ok(value),
            TxOutcome::Commit(tx, value) => (tx, value),
        };

        match store.commit(tx).await {
            Ok(()) => {
                debug!(attempt, "Transaction committed");
                return Ok(value);
            }
            Err(StoreError::Contention) => {
                warn!(attempt, max_attempts, "Transaction contention, retrying");
            }
            Err(e) => return Err(e.into()),
        }
    }

    Err(DomainError::BackendUnavailable(format!(
        "Transaction failed after {max_attempts} attempts due to contention"
    ))
    .into())
}
