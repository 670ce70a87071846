//! Backend Test Helpers
//!
//! Spin-up helpers for the in-memory backend plus tracing initialization for
//! test binaries.

use once_cell::sync::OnceCell;

use domain_reporting::ReportingItem;
use infra_backend::{BackendConfig, BackendError, MemoryBackend, ReportingBackend};

static TRACING: OnceCell<()> = OnceCell::new();

/// Installs a test tracing subscriber once per test binary
///
/// Honors `RUST_LOG`; defaults to `info` when unset. Safe to call from every
/// test.
pub fn init_test_tracing() {
    TRACING.get_or_init(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// An initialized, empty memory backend
pub async fn initialized_memory_backend() -> MemoryBackend {
    let backend = MemoryBackend::new();
    backend
        .init_backend(&BackendConfig::default())
        .await
        .expect("fresh memory backend initializes");
    backend
}

/// An initialized memory backend pre-loaded with the given items
///
/// Storage applies the production eligibility filter, so ineligible items in
/// `items` are silently dropped exactly as they would be in production.
pub async fn seeded_memory_backend<I>(items: I) -> Result<MemoryBackend, BackendError>
where
    I: IntoIterator<Item = ReportingItem>,
{
    let backend = initialized_memory_backend().await;
    for item in items {
        backend.store_reporting_item(&item).await?;
    }
    Ok(backend)
}
