//! Core error type for the kernel

use thiserror::Error;

use crate::header::HeaderError;
use crate::temporal::TemporalError;

/// Aggregated error type for kernel operations
#[derive(Debug, Error)]
pub enum KernelError {
    #[error("temporal error: {0}")]
    Temporal(#[from] TemporalError),

    #[error("header error: {0}")]
    Header(#[from] HeaderError),

    #[error("validation error: {0}")]
    Validation(String),
}

impl KernelError {
    pub fn validation(message: impl Into<String>) -> Self {
        KernelError::Validation(message.into())
    }
}
