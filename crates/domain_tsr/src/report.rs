//! TSR report builder
//!
//! Combines a header with an aggregation result. The customization and
//! profile identifiers default to the published values and rarely need to be
//! set; the period and the reporter identity always do.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use domain_reporting::ReportingItem;
use reporting_kernel::{
    ReportHeader, ReportPeriod, ReporterIdentity, REPORTING_PROFILE_ID, TSR_CUSTOMIZATION_ID,
};

use crate::error::TsrError;
use crate::statistics::{aggregate, TransactionStatistics};

/// A finished transaction statistics report, immutable once built
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionStatisticsReport {
    pub header: ReportHeader,
    pub statistics: TransactionStatistics,
}

/// Builder for [`TransactionStatisticsReport`]
#[derive(Debug, Clone)]
pub struct TsrReportBuilder {
    customization_id: String,
    profile_id: String,
    period: Option<ReportPeriod>,
    reporter: Option<ReporterIdentity>,
}

impl Default for TsrReportBuilder {
    fn default() -> Self {
        Self {
            customization_id: TSR_CUSTOMIZATION_ID.to_owned(),
            profile_id: REPORTING_PROFILE_ID.to_owned(),
            period: None,
            reporter: None,
        }
    }
}

impl TsrReportBuilder {
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
    pub fn validate(&self) -> Result<(), TsrError> {
        if self.customization_id.is_empty() {
            return Err(TsrError::EmptyCustomizationId);
        }
        if self.profile_id.is_empty() {
            return Err(TsrError::EmptyProfileId);
        }
        if self.period.is_none() {
            return Err(TsrError::MissingPeriod);
        }
        if self.reporter.is_none() {
            return Err(TsrError::MissingReporter);
        }
        Ok(())
    }

    /// Builds the header and aggregates the given items into the report
    pub fn build<'a, I>(self, items: I) -> Result<TransactionStatisticsReport, TsrError>
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

        Ok(TransactionStatisticsReport {
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
        let report = TsrReportBuilder::new()
            .period(ReportPeriod::new(2024, 5).unwrap())
            .reporter(reporter())
            .build([])
            .unwrap();

        assert_eq!(report.header.customization_id, TSR_CUSTOMIZATION_ID);
        assert_eq!(report.header.profile_id, REPORTING_PROFILE_ID);
    }

    #[test]
    fn test_month_of_derives_the_period() {
        let report = TsrReportBuilder::new()
            .month_of(NaiveDate::from_ymd_opt(2024, 5, 17).unwrap())
            .reporter(reporter())
            .build([])
            .unwrap();

        assert_eq!(report.header.period, ReportPeriod::new(2024, 5).unwrap());
    }

    #[test]
    fn test_validation_is_fail_first() {
        // Period is checked before the reporter.
        let builder = TsrReportBuilder::new();
        assert_eq!(builder.validate().unwrap_err(), TsrError::MissingPeriod);

        let builder = TsrReportBuilder::new().period(ReportPeriod::new(2024, 5).unwrap());
        assert_eq!(builder.validate().unwrap_err(), TsrError::MissingReporter);

        let builder = TsrReportBuilder::new().customization_id("");
        assert_eq!(
            builder.validate().unwrap_err(),
            TsrError::EmptyCustomizationId
        );
    }
}
