//! TSR report builder errors

use thiserror::Error;

/// Errors raised when building a transaction statistics report
///
/// Reported fail-first in the order: customization id, profile id, period,
/// reporter identity.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TsrError {
    #[error("customization id must not be empty")]
    EmptyCustomizationId,

    #[error("profile id must not be empty")]
    EmptyProfileId,

    #[error("reporting period is missing")]
    MissingPeriod,

    #[error("reporter identity is missing")]
    MissingReporter,
}
