use mucize_core::error::CoreError;
use mucize_db::StoreError;

/// Failure of a synchronization-layer mutation.
///
/// Local collections are never modified when one of these is returned.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// The store rejected or could not perform the operation.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The input broke a domain rule before any store call was made.
    #[error(transparent)]
    Core(#[from] CoreError),
}
