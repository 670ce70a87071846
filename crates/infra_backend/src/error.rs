//! Backend error taxonomy
//!
//! Lifecycle and selection problems are expected conditions and carry no
//! source; storage failures wrap whatever the adapter's engine reported and
//! are propagated as-is - the core never retries.

use thiserror::Error;

use reporting_kernel::TemporalError;

/// Error type for all backend port operations
#[derive(Debug, Error)]
pub enum BackendError {
    /// An operation ran against a backend that was never initialized
    #[error("backend is not initialized")]
    NotInitialized,

    /// `init_backend` was called on an already-initialized instance
    #[error("backend is already initialized")]
    AlreadyInitialized,

    /// No backend is registered, so nothing can be selected
    #[error("no reporting backend is configured")]
    NoBackendConfigured,

    /// More than one backend is registered and none was explicitly chosen
    #[error("ambiguous backend selection, candidates: {}", candidates.join(", "))]
    AmbiguousBackend { candidates: Vec<String> },

    /// The active backend handle was already set
    #[error("a reporting backend was already selected")]
    AlreadySelected,

    /// A malformed date range was supplied, caught before any I/O
    #[error(transparent)]
    InvalidRange(#[from] TemporalError),

    /// An adapter rejected its configuration
    #[error("backend configuration error: {0}")]
    Configuration(String),

    /// Unrecoverable I/O or protocol failure during store or iterate
    #[error("backend storage failure: {message}")]
    Storage {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl BackendError {
    /// Creates a Configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        BackendError::Configuration(message.into())
    }

    /// Creates a Storage error without an underlying source
    pub fn storage(message: impl Into<String>) -> Self {
        BackendError::Storage {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a Storage error wrapping an engine-level error
    pub fn storage_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        BackendError::Storage {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Returns true if the error means "no usable backend", as opposed to an
    /// operational failure of a selected one
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            BackendError::NotInitialized
                | BackendError::NoBackendConfigured
                | BackendError::AmbiguousBackend { .. }
        )
    }
}
