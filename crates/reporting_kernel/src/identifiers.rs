//! Well-known identifiers and shared identifier value types
//!
//! The customization, profile and report document-type identifiers defined
//! here are part of the stable contract with external validators, which
//! compare them literally. They must never be edited without coordinating a
//! validator release.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Document type identifier: a scheme plus a value within that scheme
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DocumentTypeId {
    pub scheme: String,
    pub value: String,
}

impl DocumentTypeId {
    pub fn new(scheme: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for DocumentTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.scheme, self.value)
    }
}

/// Process identifier: a scheme plus a value within that scheme
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProcessId {
    pub scheme: String,
    pub value: String,
}

impl ProcessId {
    pub fn new(scheme: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.scheme, self.value)
    }
}

/// Customization identifier carried in every TSR header
pub const TSR_CUSTOMIZATION_ID: &str =
    "urn:fdc:peppol.eu:edec:trns:transaction-statistics-reporting:1.0";

/// Customization identifier carried in every EUSR header
pub const EUSR_CUSTOMIZATION_ID: &str =
    "urn:fdc:peppol.eu:edec:trns:end-user-statistics-report:1.1";

/// Profile identifier shared by both report types
pub const REPORTING_PROFILE_ID: &str = "urn:fdc:peppol.eu:edec:bis:reporting:1.0";

/// Identifier scheme of the reserved report document types
pub const REPORT_DOCTYPE_SCHEME: &str = "busdox-docid-qns";

/// Document type under which finished TSR documents are themselves exchanged
pub const TSR_REPORT_DOCTYPE_VALUE: &str = "urn:fdc:peppol:transaction-statistics-report:1.0\
::TransactionStatisticsReport\
##urn:fdc:peppol.eu:edec:trns:transaction-statistics-reporting:1.0::1.0";

/// Document type under which finished EUSR documents are themselves exchanged
pub const EUSR_REPORT_DOCTYPE_VALUE: &str = "urn:fdc:peppol:end-user-statistics-report:1.1\
::EndUserStatisticsReport\
##urn:fdc:peppol.eu:edec:trns:end-user-statistics-reporting:1.1::1.1";

static RESERVED_REPORT_DOCUMENT_TYPES: Lazy<[DocumentTypeId; 2]> = Lazy::new(|| {
    [
        DocumentTypeId::new(REPORT_DOCTYPE_SCHEME, TSR_REPORT_DOCTYPE_VALUE),
        DocumentTypeId::new(REPORT_DOCTYPE_SCHEME, EUSR_REPORT_DOCTYPE_VALUE),
    ]
});

/// The two reserved "report about reports" document types
///
/// Exchanges of these document types are excluded from storage and from both
/// aggregations, so a period's reports never count the reports of the
/// previous period.
pub fn reserved_report_document_types() -> &'static [DocumentTypeId; 2] {
    &RESERVED_REPORT_DOCUMENT_TYPES
}
