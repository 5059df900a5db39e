//! Flow error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlowError {
    #[error("Storage error: {0}")]
    Storage(#[from] linkgate_storage::StorageError),
}
