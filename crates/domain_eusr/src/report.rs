//! EUSR report builder
//!
//! Mirrors the TSR builder: published customization and profile identifiers
//! by default, a period and a reporter identity supplied by the caller,
//! fail-first validation, and a build that delegates to the engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use domain_reporting::ReportingItem;
use reporting_kernel::{
    ReportHeader, ReportPeriod, ReporterIdentity, EUSR_CUSTOMIZATION_ID, REPORTING_PROFILE_ID,
};

use crate::error::EusrError;
use crate::statistics::{aggregate, EndUserStatistics};

/// A finished end-user statistics report, immutable once built
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndUserStatisticsReport {
    pub header: ReportHeader,
    pub statistics: EndUserStatistics,
}

/// Builder for [`EndUserStatisticsReport`]
#[derive(Debug, Clone)]
pub struct EusrReportBuilder {
    customization_id: String,
    profile_id: String,
    period: Option<ReportPeriod>,
    reporter: Option<ReporterIdentity>,
}

impl Default for EusrReportBuilder {
    fn default() -> Self {
        Self {
            customization_id: EUSR_CUSTOMIZATION_ID.to_owned(),
            profile_id: REPORTING_PROFILE_ID.to_owned(),
            period: None,
            reporter: None,
        }
    }
}

impl EusrReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the default customization identifier
    pub fn customization_id(mut self, id: impl Into<String>) -> Self {
        self.customization_id = id.into();
        self
    }

    /// Overrides the default profile identifier
    pub fn profile_id(mut self, id: impl Into<String>) -> Self {
        self.profile_id = id.into();
        self
    }

    /// Sets the reporting period directly
    pub fn period(mut self, period: ReportPeriod) -> Self {
        self.period = Some(period);
        self
    }

    /// Sets the reporting period to the month containing the given date
    pub fn month_of(mut self, date: NaiveDate) -> Self {
        self.period = Some(ReportPeriod::containing(date));
        self
    }

    pub fn reporter(mut self, reporter: ReporterIdentity) -> Self {
        self.reporter = Some(reporter);
        self
    }

    /// Checks header completeness, reporting the first missing piece
    pub fn validate(&self) -> Result<(), EusrError> {
        if self.customization_id.is_empty() {
            return Err(EusrError::EmptyCustomizationId);
        }
        if self.profile_id.is_empty() {
            return Err(EusrError::EmptyProfileId);
        }
        if self.period.is_none() {
            return Err(EusrError::MissingPeriod);
        }
        if self.reporter.is_none() {
            return Err(EusrError::MissingReporter);
        }
        Ok(())
    }

    /// Builds the header and aggregates the given items into the report
    pub fn build<'a, I>(self, items: I) -> Result<EndUserStatisticsReport, EusrError>
    where
        I: IntoIterator<Item = &'a ReportingItem>,
    {
        self.validate()?;

        let header = ReportHeader::new(
            self.customization_id,
            self.profile_id,
            self.period.expect("validated: period present"),
            self.reporter.expect("validated: reporter present"),
        );

        Ok(EndUserStatisticsReport {
            header,
            statistics: aggregate(items),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reporter() -> ReporterIdentity {
        ReporterIdentity::new("CertSubjectCN", "PSP000101").unwrap()
    }

    #[test]
    fn test_defaults_are_the_published_identifiers() {
        let report = EusrReportBuilder::new()
            .period(ReportPeriod::new(2024, 5).unwrap())
            .reporter(reporter())
            .build([])
            .unwrap();

        assert_eq!(report.header.customization_id, EUSR_CUSTOMIZATION_ID);
        assert_eq!(report.header.profile_id, REPORTING_PROFILE_ID);
    }

    #[test]
    fn test_validation_is_fail_first() {
        let builder = EusrReportBuilder::new();
        assert_eq!(builder.validate().unwrap_err(), EusrError::MissingPeriod);

        let builder = EusrReportBuilder::new().period(ReportPeriod::new(2024, 5).unwrap());
        assert_eq!(builder.validate().unwrap_err(), EusrError::MissingReporter);

        let builder = EusrReportBuilder::new().profile_id("");
        assert_eq!(builder.validate().unwrap_err(), EusrError::EmptyProfileId);
    }

    #[test]
    fn test_month_of_derives_the_period() {
        let report = EusrReportBuilder::new()
            .month_of(NaiveDate::from_ymd_opt(2024, 11, 3).unwrap())
            .reporter(reporter())
            .build([])
            .unwrap();

        assert_eq!(report.header.period, ReportPeriod::new(2024, 11).unwrap());
    }
}
