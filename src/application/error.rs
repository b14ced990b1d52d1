use thiserror::Error;

use crate::domain::ValidationError;
use crate::storage::StoreError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Export failed: {0}")]
    Export(#[from] anyhow::Error),
}

impl AppError {
    /// Validation failures are reported to the user but never abort the run.
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }
}
