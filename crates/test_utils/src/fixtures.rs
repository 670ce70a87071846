//! Test Fixtures
//!
//! Pre-built values for common entities so tests only spell out what they
//! actually care about. Fixtures are deterministic; anything random belongs
//! in `generators`.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use reporting_kernel::{DocumentTypeId, ProcessId, ReportPeriod, ReporterIdentity};

/// Fixed identifiers used across the test suite
pub struct IdentifierFixtures;

impl IdentifierFixtures {
    /// A plausible invoice document type
    pub fn invoice_doc_type() -> DocumentTypeId {
        DocumentTypeId::new("busdox-docid-qns", "urn:example:invoice:3")
    }

    /// A second, distinct document type for breakdown tests
    pub fn order_doc_type() -> DocumentTypeId {
        DocumentTypeId::new("busdox-docid-qns", "urn:example:order:3")
    }

    /// A plausible billing process
    pub fn billing_process() -> ProcessId {
        ProcessId::new("cenbii-procid-ubl", "urn:example:bis:billing")
    }

    /// A second, distinct process for breakdown tests
    pub fn ordering_process() -> ProcessId {
        ProcessId::new("cenbii-procid-ubl", "urn:example:bis:ordering")
    }

    /// The reporting provider's own identifier
    pub fn own_provider_id() -> &'static str {
        "PSP000101"
    }

    /// The counterparty provider's identifier
    pub fn other_provider_id() -> &'static str {
        "PSP000202"
    }

    pub fn transport_protocol() -> &'static str {
        "AS4-v1.0"
    }
}

/// Fixed timestamps and periods used across the test suite
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// The canonical test period
    pub fn period() -> ReportPeriod {
        ReportPeriod::new(2024, 5).expect("May 2024 is a valid period")
    }

    /// An instant well inside [`TemporalFixtures::period`]
    pub fn mid_period_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 10, 9, 30, 0).unwrap()
    }

    /// An instant in the month after [`TemporalFixtures::period`]
    pub fn next_month_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    }

    pub fn mid_period_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 10).unwrap()
    }
}

/// Reporter identities used across the test suite
pub struct ReporterFixtures;

impl ReporterFixtures {
    pub fn reporter() -> ReporterIdentity {
        ReporterIdentity::new("CertSubjectCN", IdentifierFixtures::own_provider_id())
            .expect("fixture reporter identity is valid")
    }
}
