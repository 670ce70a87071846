//! Backend Port Infrastructure
//!
//! This crate decouples the reporting item model from any specific
//! persistence engine. It provides:
//!
//! - [`ReportingBackend`]: the port trait every storage adapter implements,
//!   with a strict lifecycle (`init` once, `store`/`iterate` while
//!   initialized, `shutdown` once)
//! - [`ReportingBackendExt`]: range-validated iteration, month expansion and
//!   `for_each` conveniences, blanket-implemented for every adapter
//! - [`BackendRegistry`] and [`ActiveBackend`]: explicit, fail-closed backend
//!   selection - zero or more than one candidate selects nothing
//! - [`with_initialized_backend`]: a scoped init/work/shutdown helper that is
//!   safe whether or not the caller manages the backend lifetime itself
//! - [`MemoryBackend`]: the in-memory reference adapter
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut registry = BackendRegistry::new();
//! registry.register("memory", Arc::new(MemoryBackend::new()))?;
//!
//! let active = ActiveBackend::new();
//! active.set_from(&registry)?;
//!
//! let backend = active.get()?;
//! with_initialized_backend(backend.as_ref(), &config, || async {
//!     backend.store_reporting_item(&item).await
//! })
//! .await?;
//! ```

pub mod config;
pub mod error;
pub mod memory;
pub mod port;
pub mod registry;

pub use config::BackendConfig;
pub use error::BackendError;
pub use memory::MemoryBackend;
pub use port::{with_initialized_backend, ReportingBackend, ReportingBackendExt};
pub use registry::{ActiveBackend, BackendRegistry};
