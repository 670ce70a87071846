//! The reporting item: one validated record of a single document exchange
//!
//! # The four corners
//!
//! ```text
//! C1 (originator) --> C2 (sending provider) --> C3 (receiving provider) --> C4 (recipient)
//! ```
//!
//! Every item is recorded by one of the two providers. A SENDING item is
//! written by C2, a RECEIVING item by C3. The recording side knows its own
//! corner's country (C1 for senders, C4 for receivers), which is why the C4
//! country code exists exactly on receiving items.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use reporting_kernel::{DocumentTypeId, ProcessId};

use crate::builder::ReportingItemBuilder;

/// Maximum length of the C2/C3 service provider identifiers
pub const MAX_SERVICE_PROVIDER_ID_LEN: usize = 64;
/// Maximum length of a document type scheme
pub const MAX_DOCTYPE_SCHEME_LEN: usize = 64;
/// Maximum length of a document type value
pub const MAX_DOCTYPE_VALUE_LEN: usize = 500;
/// Maximum length of a process scheme
pub const MAX_PROCESS_SCHEME_LEN: usize = 64;
/// Maximum length of a process value
pub const MAX_PROCESS_VALUE_LEN: usize = 200;
/// Maximum length of the transport protocol identifier
pub const MAX_TRANSPORT_PROTOCOL_LEN: usize = 64;
/// Maximum length of the opaque end-user identifier
pub const MAX_END_USER_ID_LEN: usize = 256;

/// Whether the reporting service provider sent or received the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Sending,
    Receiving,
}

impl Direction {
    pub fn is_sending(&self) -> bool {
        matches!(self, Direction::Sending)
    }

    pub fn is_receiving(&self) -> bool {
        matches!(self, Direction::Receiving)
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Sending => write!(f, "SENDING"),
            Direction::Receiving => write!(f, "RECEIVING"),
        }
    }
}

/// One validated, immutable record of a single document exchange
///
/// Fields are private; items are constructed only through
/// [`ReportingItem::builder`], never mutated afterwards, and safe to share
/// across threads.
///
/// Equality and ordering are structural over all persisted fields, with the
/// exchange instant as the leading component so the derived `Ord` sorts
/// timestamp-ascending - the order backends must return.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ReportingItem {
    pub(crate) exchange_instant: DateTime<Utc>,
    pub(crate) direction: Direction,
    pub(crate) c2_id: String,
    pub(crate) c3_id: String,
    pub(crate) doc_type: DocumentTypeId,
    pub(crate) process: ProcessId,
    pub(crate) transport_protocol: String,
    pub(crate) c1_country_code: String,
    pub(crate) c4_country_code: Option<String>,
    pub(crate) end_user_id: String,
}

impl ReportingItem {
    /// Returns a fresh builder, the only way to obtain an item
    pub fn builder() -> ReportingItemBuilder {
        ReportingItemBuilder::new()
    }

    /// The moment of the exchange, UTC, millisecond precision
    pub fn exchange_instant(&self) -> DateTime<Utc> {
        self.exchange_instant
    }

    /// The calendar day of the exchange, used for range retrieval
    pub fn exchange_date(&self) -> NaiveDate {
        self.exchange_instant.date_naive()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Identifier of the sending service provider (corner two)
    pub fn c2_id(&self) -> &str {
        &self.c2_id
    }

    /// Identifier of the receiving service provider (corner three)
    pub fn c3_id(&self) -> &str {
        &self.c3_id
    }

    pub fn doc_type(&self) -> &DocumentTypeId {
        &self.doc_type
    }

    pub fn process(&self) -> &ProcessId {
        &self.process
    }

    pub fn transport_protocol(&self) -> &str {
        &self.transport_protocol
    }

    /// Country code of the originating end user (corner one)
    pub fn c1_country_code(&self) -> &str {
        &self.c1_country_code
    }

    /// Country code of the final recipient (corner four)
    ///
    /// Present exactly on receiving items.
    pub fn c4_country_code(&self) -> Option<&str> {
        self.c4_country_code.as_deref()
    }

    /// Opaque identifier of the end user on whose behalf the document moved
    pub fn end_user_id(&self) -> &str {
        &self.end_user_id
    }

    /// The counterparty provider: C3 when sending, C2 when receiving
    pub fn other_service_provider_id(&self) -> &str {
        match self.direction {
            Direction::Sending => &self.c3_id,
            Direction::Receiving => &self.c2_id,
        }
    }

    /// The country of the end user on the recording side
    ///
    /// C1 for sending items, C4 for receiving items. The builder guarantees
    /// C4 is present on receiving items.
    pub fn end_user_country_code(&self) -> &str {
        match self.direction {
            Direction::Sending => &self.c1_country_code,
            Direction::Receiving => self
                .c4_country_code
                .as_deref()
                .expect("receiving item always carries a C4 country code"),
        }
    }
}

/// Returns true for exactly two characters of `[0-9A-Z]`
pub(crate) fn is_country_code(value: &str) -> bool {
    value.len() == 2
        && value
            .bytes()
            .all(|b| b.is_ascii_digit() || b.is_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_code_charset() {
        assert!(is_country_code("DE"));
        assert!(is_country_code("1A"));
        assert!(is_country_code("09"));
        assert!(!is_country_code("de"));
        assert!(!is_country_code("DEU"));
        assert!(!is_country_code("D"));
        assert!(!is_country_code("D-"));
        assert!(!is_country_code(""));
    }

    #[test]
    fn test_direction_display() {
        assert_eq!(Direction::Sending.to_string(), "SENDING");
        assert_eq!(Direction::Receiving.to_string(), "RECEIVING");
    }
}
