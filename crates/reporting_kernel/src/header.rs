//! Report header types shared by both report builders
//!
//! A header identifies what kind of report follows (customization and
//! profile), which month it covers, and who is reporting. It maps 1:1 onto
//! the XML header block produced by the marshalling layer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::temporal::ReportPeriod;

/// Maximum length of a reporter identity scheme
pub const MAX_REPORTER_SCHEME_LEN: usize = 64;

/// Maximum length of a reporter identity value
pub const MAX_REPORTER_ID_LEN: usize = 256;

/// Errors raised when constructing header values
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeaderError {
    #[error("reporter identity scheme must not be empty")]
    EmptyScheme,

    #[error("reporter identity id must not be empty")]
    EmptyId,

    #[error("reporter identity scheme exceeds {MAX_REPORTER_SCHEME_LEN} characters")]
    SchemeTooLong,

    #[error("reporter identity id exceeds {MAX_REPORTER_ID_LEN} characters")]
    IdTooLong,
}

/// Identity of the service provider submitting a report
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ReporterIdentity {
    scheme: String,
    id: String,
}

impl ReporterIdentity {
    /// Creates a validated reporter identity
    pub fn new(scheme: impl Into<String>, id: impl Into<String>) -> Result<Self, HeaderError> {
        let scheme = scheme.into();
        let id = id.into();
        if scheme.is_empty() {
            return Err(HeaderError::EmptyScheme);
        }
        if scheme.chars().count() > MAX_REPORTER_SCHEME_LEN {
            return Err(HeaderError::SchemeTooLong);
        }
        if id.is_empty() {
            return Err(HeaderError::EmptyId);
        }
        if id.chars().count() > MAX_REPORTER_ID_LEN {
            return Err(HeaderError::IdTooLong);
        }
        Ok(Self { scheme, id })
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl std::fmt::Display for ReporterIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}::{}", self.scheme, self.id)
    }
}

/// Header block of a finished report
///
/// Built once by a report builder and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportHeader {
    pub customization_id: String,
    pub profile_id: String,
    pub period: ReportPeriod,
    pub reporter: ReporterIdentity,
}

impl ReportHeader {
    pub fn new(
        customization_id: impl Into<String>,
        profile_id: impl Into<String>,
        period: ReportPeriod,
        reporter: ReporterIdentity,
    ) -> Self {
        Self {
            customization_id: customization_id.into(),
            profile_id: profile_id.into(),
            period,
            reporter,
        }
    }
}
