//! Test Data Builders
//!
//! Wraps the production item builder with fixture defaults so tests only
//! override the fields under test. `TestItemBuilder::new()` produces a
//! complete, valid SENDING item; every setter delegates to the real builder,
//! so production validation still runs on `build`.

use chrono::{DateTime, Utc};

use domain_reporting::{ReportingItem, ReportingItemBuilder};
use reporting_kernel::{DocumentTypeId, ProcessId};

use crate::fixtures::{IdentifierFixtures, TemporalFixtures};

/// Builder for complete test reporting items
#[derive(Debug, Clone)]
pub struct TestItemBuilder {
    inner: ReportingItemBuilder,
}

impl Default for TestItemBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestItemBuilder {
    /// Creates a builder holding a complete, valid sending item
    pub fn new() -> Self {
        Self {
            inner: ReportingItem::builder()
                .exchange_instant(TemporalFixtures::mid_period_instant())
                .sending()
                .c2_id(IdentifierFixtures::own_provider_id())
                .c3_id(IdentifierFixtures::other_provider_id())
                .doc_type(IdentifierFixtures::invoice_doc_type())
                .process(IdentifierFixtures::billing_process())
                .transport_protocol(IdentifierFixtures::transport_protocol())
                .c1_country_code("FI")
                .end_user_id("eu-1"),
        }
    }

    pub fn exchange_instant(mut self, instant: DateTime<Utc>) -> Self {
        self.inner = self.inner.exchange_instant(instant);
        self
    }

    pub fn sending(mut self) -> Self {
        self.inner = self.inner.sending();
        self
    }

    pub fn receiving(mut self, c4_country_code: impl Into<String>) -> Self {
        self.inner = self.inner.receiving(c4_country_code);
        self
    }

    pub fn c2_id(mut self, id: impl Into<String>) -> Self {
        self.inner = self.inner.c2_id(id);
        self
    }

    pub fn c3_id(mut self, id: impl Into<String>) -> Self {
        self.inner = self.inner.c3_id(id);
        self
    }

    pub fn doc_type(mut self, doc_type: DocumentTypeId) -> Self {
        self.inner = self.inner.doc_type(doc_type);
        self
    }

    pub fn process(mut self, process: ProcessId) -> Self {
        self.inner = self.inner.process(process);
        self
    }

    pub fn transport_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.inner = self.inner.transport_protocol(protocol);
        self
    }

    pub fn c1_country_code(mut self, code: impl Into<String>) -> Self {
        self.inner = self.inner.c1_country_code(code);
        self
    }

    pub fn end_user_id(mut self, id: impl Into<String>) -> Self {
        self.inner = self.inner.end_user_id(id);
        self
    }

    /// Builds the item, panicking on validation failure
    ///
    /// Test-only: the defaults are valid, so a failure here means the test
    /// overrode a field with something invalid on purpose and should use
    /// `try_build` instead.
    pub fn build(self) -> ReportingItem {
        self.inner.build().expect("test item defaults are valid")
    }

    /// Builds the item, surfacing the validation result
    pub fn try_build(self) -> Result<ReportingItem, domain_reporting::ItemValidationError> {
        self.inner.build()
    }
}

/// A valid sending item with fixture defaults
pub fn sending_item() -> ReportingItem {
    TestItemBuilder::new().build()
}

/// A valid receiving item with fixture defaults and the given C4 country
pub fn receiving_item(c4_country_code: &str) -> ReportingItem {
    TestItemBuilder::new().receiving(c4_country_code).build()
}
