//! The backend port trait and its convenience extension
//!
//! Exactly one adapter is active in a process at a time (see
//! [`crate::registry`]). Adapters own their internal state and must make
//! `store`/`iterate` safe for concurrent callers once initialized; the caller
//! drains in-flight work before shutting an instance down.

use async_trait::async_trait;
use chrono::NaiveDate;

use domain_reporting::ReportingItem;
use reporting_kernel::{DateRange, ReportPeriod};

use crate::config::BackendConfig;
use crate::error::BackendError;

/// Storage port for reporting items
///
/// # Lifecycle contract
///
/// - `init_backend` is not idempotent: a second call on an initialized
///   instance fails with [`BackendError::AlreadyInitialized`]. When init
///   fails, `is_initialized()` must remain false.
/// - `shutdown_backend` on a non-initialized instance logs a warning and
///   returns; it is never an error.
/// - `store_reporting_item` applies the eligibility filter before touching
///   storage: items carrying one of the reserved report document types are
///   skipped silently (info log) so reports never count reports.
/// - `iterate_range` returns items ascending by exchange timestamp,
///   inclusive on both ends of the range. Range validation happens in
///   [`ReportingBackendExt::iterate_reporting_items`], before any I/O;
///   adapters may assume a well-formed range.
#[async_trait]
pub trait ReportingBackend: Send + Sync + 'static {
    /// Implementation identity for diagnostics
    fn display_name(&self) -> &'static str;

    /// Initializes the backend from opaque key-value configuration
    async fn init_backend(&self, config: &BackendConfig) -> Result<(), BackendError>;

    /// Returns true once `init_backend` has succeeded and before shutdown
    fn is_initialized(&self) -> bool;

    /// Releases all resources held by the backend
    async fn shutdown_backend(&self);

    /// Persists one reporting item, skipping ineligible ones
    async fn store_reporting_item(&self, item: &ReportingItem) -> Result<(), BackendError>;

    /// Returns all items whose exchange date falls inside the range,
    /// ascending by exchange timestamp
    async fn iterate_range(&self, range: DateRange) -> Result<Vec<ReportingItem>, BackendError>;
}

/// Convenience methods available on every backend
#[async_trait]
pub trait ReportingBackendExt: ReportingBackend {
    /// Iterates items between two inclusive dates
    ///
    /// `end < start` fails with the range precondition error before any
    /// adapter I/O happens.
    async fn iterate_reporting_items(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<ReportingItem>, BackendError> {
        let range = DateRange::new(start, end)?;
        self.iterate_range(range).await
    }

    /// Iterates all items of one calendar month
    async fn iterate_month(
        &self,
        year: i32,
        month: u32,
    ) -> Result<Vec<ReportingItem>, BackendError> {
        let period = ReportPeriod::new(year, month).map_err(BackendError::from)?;
        self.iterate_range(period.date_range()).await
    }

    /// Applies a callback to every item between two inclusive dates
    async fn for_each_reporting_item<F>(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        mut callback: F,
    ) -> Result<(), BackendError>
    where
        F: FnMut(&ReportingItem) + Send,
    {
        for item in self.iterate_reporting_items(start, end).await? {
            callback(&item);
        }
        Ok(())
    }

    /// Applies a callback to every item of one calendar month
    async fn for_each_in_month<F>(
        &self,
        year: i32,
        month: u32,
        mut callback: F,
    ) -> Result<(), BackendError>
    where
        F: FnMut(&ReportingItem) + Send,
    {
        for item in self.iterate_month(year, month).await? {
            callback(&item);
        }
        Ok(())
    }
}

// Blanket implementation for all backend implementors
impl<T: ReportingBackend + ?Sized> ReportingBackendExt for T {}

/// Runs `work` against a backend, initializing and shutting it down only
/// when the caller has not done so already
///
/// When the backend is already initialized the helper leaves its lifetime
/// alone, so the same call site works whether the caller manages the backend
/// itself or not. When the helper performed the init, it shuts the backend
/// down even if `work` failed.
pub async fn with_initialized_backend<B, F, Fut, T>(
    backend: &B,
    config: &BackendConfig,
    work: F,
) -> Result<T, BackendError>
where
    B: ReportingBackend + ?Sized,
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = Result<T, BackendError>>,
{
    if backend.is_initialized() {
        return work().await;
    }

    backend.init_backend(config).await?;
    let result = work().await;
    backend.shutdown_backend().await;
    result
}
