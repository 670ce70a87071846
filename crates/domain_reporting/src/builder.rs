//! Validating builder for reporting items
//!
//! Validation lives in exactly one place: [`ReportingItemBuilder::validate`].
//! It checks the invariants in a fixed field order and reports the first
//! violation. [`ReportingItemBuilder::build`] is all-or-nothing: it either
//! returns a fully normalized item or the first error, never a partial value.

use chrono::{DateTime, Utc};

use reporting_kernel::{truncate_to_millis, DocumentTypeId, ProcessId};

use crate::error::ItemValidationError;
use crate::item::{
    is_country_code, Direction, ReportingItem, MAX_DOCTYPE_SCHEME_LEN, MAX_DOCTYPE_VALUE_LEN,
    MAX_END_USER_ID_LEN, MAX_PROCESS_SCHEME_LEN, MAX_PROCESS_VALUE_LEN,
    MAX_SERVICE_PROVIDER_ID_LEN, MAX_TRANSPORT_PROTOCOL_LEN,
};

/// Mutable accumulator for one reporting item
///
/// All setters consume and return the builder, so construction reads as one
/// fluent chain. Field checks run in the order the fields are documented on
/// [`ReportingItem`]: exchange instant, direction, C2, C3, document type
/// scheme and value, process scheme and value, transport protocol, C1
/// country, C4 country (conditional on direction), end-user id.
#[derive(Debug, Clone, Default)]
pub struct ReportingItemBuilder {
    exchange_instant: Option<DateTime<Utc>>,
    direction: Option<Direction>,
    c2_id: Option<String>,
    c3_id: Option<String>,
    doc_type: Option<DocumentTypeId>,
    process: Option<ProcessId>,
    transport_protocol: Option<String>,
    c1_country_code: Option<String>,
    c4_country_code: Option<String>,
    end_user_id: Option<String>,
}

impl ReportingItemBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the exchange timestamp; normalized to UTC milliseconds on build
    pub fn exchange_instant(mut self, instant: DateTime<Utc>) -> Self {
        self.exchange_instant = Some(instant);
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Marks the item as sent by the reporting provider
    pub fn sending(self) -> Self {
        self.direction(Direction::Sending)
    }

    /// Marks the item as received by the reporting provider and records the
    /// recipient country in one step
    pub fn receiving(self, c4_country_code: impl Into<String>) -> Self {
        self.direction(Direction::Receiving)
            .c4_country_code(c4_country_code)
    }

    pub fn c2_id(mut self, id: impl Into<String>) -> Self {
        self.c2_id = Some(id.into());
        self
    }

    pub fn c3_id(mut self, id: impl Into<String>) -> Self {
        self.c3_id = Some(id.into());
        self
    }

    pub fn doc_type(mut self, doc_type: DocumentTypeId) -> Self {
        self.doc_type = Some(doc_type);
        self
    }

    pub fn process(mut self, process: ProcessId) -> Self {
        self.process = Some(process);
        self
    }

    pub fn transport_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.transport_protocol = Some(protocol.into());
        self
    }

    pub fn c1_country_code(mut self, code: impl Into<String>) -> Self {
        self.c1_country_code = Some(code.into());
        self
    }

    pub fn c4_country_code(mut self, code: impl Into<String>) -> Self {
        self.c4_country_code = Some(code.into());
        self
    }

    pub fn end_user_id(mut self, id: impl Into<String>) -> Self {
        self.end_user_id = Some(id.into());
        self
    }

    /// Checks every invariant and returns the first violation
    ///
    /// Does not consume the builder and never logs, so it doubles as a cheap
    /// completeness probe before `build`.
    pub fn validate(&self) -> Result<(), ItemValidationError> {
        if self.exchange_instant.is_none() {
            return Err(ItemValidationError::MissingExchangeInstant);
        }
        let direction = self
            .direction
            .ok_or(ItemValidationError::MissingDirection)?;

        check_required(&self.c2_id, "C2 id", MAX_SERVICE_PROVIDER_ID_LEN)?;
        check_required(&self.c3_id, "C3 id", MAX_SERVICE_PROVIDER_ID_LEN)?;

        match &self.doc_type {
            None => {
                return Err(ItemValidationError::MissingField {
                    field: "document type",
                })
            }
            Some(dt) => {
                check_bounded(&dt.scheme, "document type scheme", MAX_DOCTYPE_SCHEME_LEN)?;
                check_bounded(&dt.value, "document type value", MAX_DOCTYPE_VALUE_LEN)?;
            }
        }

        match &self.process {
            None => return Err(ItemValidationError::MissingField { field: "process" }),
            Some(pr) => {
                check_bounded(&pr.scheme, "process scheme", MAX_PROCESS_SCHEME_LEN)?;
                check_bounded(&pr.value, "process value", MAX_PROCESS_VALUE_LEN)?;
            }
        }

        check_required(
            &self.transport_protocol,
            "transport protocol",
            MAX_TRANSPORT_PROTOCOL_LEN,
        )?;

        match &self.c1_country_code {
            None => {
                return Err(ItemValidationError::MissingField {
                    field: "C1 country code",
                })
            }
            Some(code) if !is_country_code(code) => {
                return Err(ItemValidationError::InvalidCountryCode {
                    field: "C1 country code",
                    value: code.clone(),
                })
            }
            Some(_) => {}
        }

        // C4 is tied to the direction: receivers know the recipient country,
        // senders must not claim to.
        match (direction, &self.c4_country_code) {
            (Direction::Receiving, None) => return Err(ItemValidationError::MissingC4CountryCode),
            (Direction::Receiving, Some(code)) if !is_country_code(code) => {
                return Err(ItemValidationError::InvalidCountryCode {
                    field: "C4 country code",
                    value: code.clone(),
                })
            }
            (Direction::Sending, Some(_)) => {
                return Err(ItemValidationError::UnexpectedC4CountryCode)
            }
            _ => {}
        }

        check_required(&self.end_user_id, "end user id", MAX_END_USER_ID_LEN)?;

        Ok(())
    }

    /// Validates and constructs the immutable item
    ///
    /// The exchange instant is normalized to UTC millisecond precision. The
    /// first violated invariant is logged at debug and returned.
    pub fn build(self) -> Result<ReportingItem, ItemValidationError> {
        if let Err(error) = self.validate() {
            tracing::debug!(%error, "reporting item failed validation");
            return Err(error);
        }

        // validate() proved every required field present
        Ok(ReportingItem {
            exchange_instant: truncate_to_millis(
                self.exchange_instant
                    .expect("validated: exchange instant present"),
            ),
            direction: self.direction.expect("validated: direction present"),
            c2_id: self.c2_id.expect("validated: C2 id present"),
            c3_id: self.c3_id.expect("validated: C3 id present"),
            doc_type: self.doc_type.expect("validated: document type present"),
            process: self.process.expect("validated: process present"),
            transport_protocol: self
                .transport_protocol
                .expect("validated: transport protocol present"),
            c1_country_code: self
                .c1_country_code
                .expect("validated: C1 country code present"),
            c4_country_code: self.c4_country_code,
            end_user_id: self.end_user_id.expect("validated: end user id present"),
        })
    }
}

fn check_required(
    value: &Option<String>,
    field: &'static str,
    max: usize,
) -> Result<(), ItemValidationError> {
    match value {
        None => Err(ItemValidationError::MissingField { field }),
        Some(v) => check_bounded(v, field, max),
    }
}

fn check_bounded(value: &str, field: &'static str, max: usize) -> Result<(), ItemValidationError> {
    if value.is_empty() {
        return Err(ItemValidationError::EmptyField { field });
    }
    if value.chars().count() > max {
        return Err(ItemValidationError::FieldTooLong { field, max });
    }
    Ok(())
}
