//! Reporting Item Domain
//!
//! This crate defines the unit record of the statistics system: one
//! [`ReportingItem`] per exchanged document, carrying who exchanged it, when,
//! under which document type and process, over which transport, and for which
//! end user.
//!
//! Items can only be constructed through [`ReportingItemBuilder`], which is
//! the single validation point of the system. Everything downstream - the
//! storage backends and both aggregation engines - trusts items that were
//! already validated here.
//!
//! # Example
//!
//! ```rust
//! use chrono::Utc;
//! use domain_reporting::{Direction, ReportingItem};
//! use reporting_kernel::{DocumentTypeId, ProcessId};
//!
//! let item = ReportingItem::builder()
//!     .exchange_instant(Utc::now())
//!     .receiving("DE")
//!     .c2_id("PSP000101")
//!     .c3_id("PSP000202")
//!     .doc_type(DocumentTypeId::new("busdox-docid-qns", "urn:example:invoice:3"))
//!     .process(ProcessId::new("cenbii-procid-ubl", "urn:example:bis:billing"))
//!     .transport_protocol("AS4-v1.0")
//!     .c1_country_code("FI")
//!     .end_user_id("eu-4711")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(item.direction(), Direction::Receiving);
//! assert_eq!(item.other_service_provider_id(), "PSP000101");
//! assert_eq!(item.end_user_country_code(), "DE");
//! ```

pub mod builder;
pub mod counters;
pub mod eligibility;
pub mod error;
pub mod item;
pub mod keys;

pub use builder::ReportingItemBuilder;
pub use counters::{EndUserCounter, TransactionCounter};
pub use eligibility::{is_eligible, is_report_document_type};
pub use error::ItemValidationError;
pub use item::{Direction, ReportingItem};
pub use keys::SubtotalKey;
