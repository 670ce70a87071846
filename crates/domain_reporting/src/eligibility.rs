//! Eligibility filtering: reports must never count reports
//!
//! Finished TSR and EUSR documents are themselves exchanged over the same
//! network, under two reserved document types. If those exchanges were
//! recorded, each period's reports would count the previous period's report
//! deliveries, forever. Items matching a reserved document type are therefore
//! skipped - silently, at info level - when stored, and again by both
//! aggregation engines in case an unfiltered collection reaches them.

use reporting_kernel::{reserved_report_document_types, DocumentTypeId};

use crate::item::ReportingItem;

/// Returns true if the document type is one of the two reserved report types
pub fn is_report_document_type(doc_type: &DocumentTypeId) -> bool {
    reserved_report_document_types()
        .iter()
        .any(|reserved| reserved == doc_type)
}

/// Returns true if the item may be stored and aggregated
pub fn is_eligible(item: &ReportingItem) -> bool {
    !is_report_document_type(item.doc_type())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use reporting_kernel::{
        ProcessId, EUSR_REPORT_DOCTYPE_VALUE, REPORT_DOCTYPE_SCHEME, TSR_REPORT_DOCTYPE_VALUE,
    };

    fn item_with_doc_type(doc_type: DocumentTypeId) -> ReportingItem {
        ReportingItem::builder()
            .exchange_instant(Utc::now())
            .sending()
            .c2_id("PSP000101")
            .c3_id("PSP000202")
            .doc_type(doc_type)
            .process(ProcessId::new("cenbii-procid-ubl", "urn:example:bis:billing"))
            .transport_protocol("AS4-v1.0")
            .c1_country_code("FI")
            .end_user_id("eu-1")
            .build()
            .unwrap()
    }

    #[test]
    fn test_ordinary_document_is_eligible() {
        let item = item_with_doc_type(DocumentTypeId::new(
            "busdox-docid-qns",
            "urn:example:invoice:3",
        ));
        assert!(is_eligible(&item));
    }

    #[test]
    fn test_both_reserved_types_are_ineligible() {
        for value in [TSR_REPORT_DOCTYPE_VALUE, EUSR_REPORT_DOCTYPE_VALUE] {
            let item = item_with_doc_type(DocumentTypeId::new(REPORT_DOCTYPE_SCHEME, value));
            assert!(!is_eligible(&item));
        }
    }

    #[test]
    fn test_reserved_value_under_other_scheme_is_eligible() {
        // Scheme and value must both match
        let item = item_with_doc_type(DocumentTypeId::new(
            "other-scheme",
            TSR_REPORT_DOCTYPE_VALUE,
        ));
        assert!(is_eligible(&item));
    }
}
