//! Explicit backend selection
//!
//! The host registers the adapters it ships and selects one at startup.
//! Selection is fail-closed: with zero or more than one registration,
//! [`BackendRegistry::resolve`] selects nothing rather than picking
//! arbitrarily. A caller that knows which backend it wants bypasses
//! resolution with [`BackendRegistry::get`] or sets the [`ActiveBackend`]
//! directly.

use std::collections::BTreeMap;
use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::error::BackendError;
use crate::port::ReportingBackend;

/// Name-keyed collection of available backend adapters
#[derive(Default)]
pub struct BackendRegistry {
    backends: BTreeMap<String, Arc<dyn ReportingBackend>>,
}

impl BackendRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an adapter under a unique name
    pub fn register(
        &mut self,
        name: impl Into<String>,
        backend: Arc<dyn ReportingBackend>,
    ) -> Result<(), BackendError> {
        let name = name.into();
        if self.backends.contains_key(&name) {
            return Err(BackendError::configuration(format!(
                "backend '{name}' is already registered"
            )));
        }
        self.backends.insert(name, backend);
        Ok(())
    }

    /// Returns the adapter registered under the given name
    pub fn get(&self, name: &str) -> Option<Arc<dyn ReportingBackend>> {
        self.backends.get(name).cloned()
    }

    /// Returns the registered names, sorted
    pub fn names(&self) -> Vec<String> {
        self.backends.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.backends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.backends.is_empty()
    }

    /// Resolves the single registered backend
    ///
    /// Fail-closed: zero registrations is [`BackendError::NoBackendConfigured`]
    /// and two or more is [`BackendError::AmbiguousBackend`]. An ambiguous
    /// registry never yields an arbitrary pick.
    pub fn resolve(&self) -> Result<Arc<dyn ReportingBackend>, BackendError> {
        let mut iter = self.backends.values();
        match (iter.next(), iter.next()) {
            (Some(backend), None) => Ok(Arc::clone(backend)),
            (None, _) => Err(BackendError::NoBackendConfigured),
            (Some(_), Some(_)) => Err(BackendError::AmbiguousBackend {
                candidates: self.names(),
            }),
        }
    }
}

impl std::fmt::Debug for BackendRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendRegistry")
            .field("names", &self.names())
            .finish()
    }
}

/// Process-wide selected backend, set exactly once
///
/// Reads vastly outnumber the single startup write, so the handle is a
/// swap-once cell rather than a lock. A second `set` fails instead of
/// replacing the selection.
#[derive(Default)]
pub struct ActiveBackend {
    cell: OnceCell<Arc<dyn ReportingBackend>>,
}

impl ActiveBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects a backend explicitly, overriding registry resolution
    pub fn set(&self, backend: Arc<dyn ReportingBackend>) -> Result<(), BackendError> {
        self.cell
            .set(backend)
            .map_err(|_| BackendError::AlreadySelected)
    }

    /// Resolves the registry fail-closed and selects the result
    pub fn set_from(&self, registry: &BackendRegistry) -> Result<(), BackendError> {
        let backend = registry.resolve()?;
        self.set(backend)
    }

    /// Returns the selected backend
    pub fn get(&self) -> Result<Arc<dyn ReportingBackend>, BackendError> {
        self.cell
            .get()
            .cloned()
            .ok_or(BackendError::NoBackendConfigured)
    }

    pub fn is_set(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl std::fmt::Debug for ActiveBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActiveBackend")
            .field("selected", &self.cell.get().map(|b| b.display_name()))
            .finish()
    }
}
