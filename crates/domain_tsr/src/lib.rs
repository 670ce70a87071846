//! Transaction Statistics Report Domain
//!
//! The TSR counts exchanged documents - events, not people. One period total
//! plus three breakdown families:
//!
//! - **per transport protocol**
//! - **per counterparty provider, document type and process**
//! - **per counterparty provider, document type, process and country pair**,
//!   computed from receiving items only
//!
//! [`aggregate`] is a pure, deterministic function; [`TsrReportBuilder`]
//! wraps its result with the report header.

pub mod error;
pub mod report;
pub mod statistics;

pub use error::TsrError;
pub use report::{TransactionStatisticsReport, TsrReportBuilder};
pub use statistics::{aggregate, TransactionStatistics, TransactionSubtotal};
