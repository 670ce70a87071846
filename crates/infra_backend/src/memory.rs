//! In-memory reference adapter
//!
//! Useful for tests and for hosts that aggregate immediately after
//! collection. It is also the executable specification of the port contract:
//! every lifecycle and filtering clause of [`ReportingBackend`] is visible
//! here in its simplest form.
//!
//! Recognized configuration keys:
//! - `memory.capacity` - optional initial capacity of the item buffer

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use domain_reporting::{is_eligible, ReportingItem};
use reporting_kernel::DateRange;

use crate::config::BackendConfig;
use crate::error::BackendError;
use crate::port::ReportingBackend;

/// Backend storing reporting items in process memory
#[derive(Debug, Default)]
pub struct MemoryBackend {
    initialized: AtomicBool,
    items: RwLock<Vec<ReportingItem>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of items currently held
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }

    fn ensure_initialized(&self) -> Result<(), BackendError> {
        if self.initialized.load(Ordering::Acquire) {
            Ok(())
        } else {
            Err(BackendError::NotInitialized)
        }
    }
}

#[async_trait]
impl ReportingBackend for MemoryBackend {
    fn display_name(&self) -> &'static str {
        "memory"
    }

    async fn init_backend(&self, config: &BackendConfig) -> Result<(), BackendError> {
        // Validate configuration before claiming the flag, so a failed init
        // leaves is_initialized() false.
        let capacity = match config.get("memory.capacity") {
            None => 0,
            Some(raw) => raw.parse::<usize>().map_err(|_| {
                BackendError::configuration(format!(
                    "memory.capacity must be a non-negative integer, got '{raw}'"
                ))
            })?,
        };

        // Atomic claim: of any number of concurrent init calls, exactly one
        // wins the flag.
        if self
            .initialized
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(BackendError::AlreadyInitialized);
        }

        self.items.write().await.reserve(capacity);
        tracing::info!(backend = self.display_name(), capacity, "backend initialized");
        Ok(())
    }

    fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }

    async fn shutdown_backend(&self) {
        if !self.initialized.swap(false, Ordering::AcqRel) {
            tracing::warn!(
                backend = self.display_name(),
                "shutdown requested on a backend that was not initialized"
            );
            return;
        }
        self.items.write().await.clear();
        tracing::info!(backend = self.display_name(), "backend shut down");
    }

    async fn store_reporting_item(&self, item: &ReportingItem) -> Result<(), BackendError> {
        self.ensure_initialized()?;

        if !is_eligible(item) {
            tracing::info!(
                doc_type = %item.doc_type(),
                "skipping reporting item with reserved report document type"
            );
            return Ok(());
        }

        self.items.write().await.push(item.clone());
        Ok(())
    }

    async fn iterate_range(&self, range: DateRange) -> Result<Vec<ReportingItem>, BackendError> {
        self.ensure_initialized()?;

        let items = self.items.read().await;
        let mut selected: Vec<ReportingItem> = items
            .iter()
            .filter(|item| range.contains(item.exchange_date()))
            .cloned()
            .collect();
        // Structural order leads with the exchange instant.
        selected.sort();
        Ok(selected)
    }
}
