//! End-User Statistics Report Domain
//!
//! The EUSR counts distinct end users - people, not events. An end user who
//! exchanged a thousand documents in a period counts once. One full-set
//! summary plus four breakdown families:
//!
//! - **per end-user country**
//! - **per document type and process**
//! - **per document type and end-user country**
//! - **per document type, process and end-user country**
//!
//! The end-user country is the C1 country on sending items and the C4
//! country on receiving items, mirroring which corner the recording provider
//! can actually see.

pub mod error;
pub mod report;
pub mod statistics;

pub use error::EusrError;
pub use report::{EndUserStatisticsReport, EusrReportBuilder};
pub use statistics::{aggregate, EndUserStatistics, EndUserSubtotal, FullSetCounts};
