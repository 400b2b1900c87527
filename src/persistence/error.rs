use crate::validate::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Input was rejected; the store is unchanged
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    /// The in-memory change was applied but could not be written to disk
    #[error("failed to save: {0:#}")]
    Save(anyhow::Error),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
