//! Reporting Kernel - Foundational types for the exchange statistics system
//!
//! This crate provides the fundamental building blocks used across all domain
//! modules:
//! - Calendar periods and inclusive date ranges for report retrieval
//! - The report header shared by both report types
//! - Well-known identifiers that external validators compare literally

pub mod error;
pub mod header;
pub mod identifiers;
pub mod temporal;

pub use error::KernelError;
pub use header::{HeaderError, ReportHeader, ReporterIdentity};
pub use identifiers::{
    reserved_report_document_types, DocumentTypeId, ProcessId, EUSR_CUSTOMIZATION_ID,
    EUSR_REPORT_DOCTYPE_VALUE, REPORTING_PROFILE_ID, REPORT_DOCTYPE_SCHEME,
    TSR_CUSTOMIZATION_ID, TSR_REPORT_DOCTYPE_VALUE,
};
pub use temporal::{truncate_to_millis, DateRange, ReportPeriod, TemporalError};
