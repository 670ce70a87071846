//! TSR aggregation engine
//!
//! A single synchronous pass over one period's reporting items. Every
//! breakdown family groups into a `BTreeMap` keyed by [`SubtotalKey`], so
//! rows come out sorted by key and any permutation of the same input
//! multiset produces identical output. O(n) time, O(k) space for k distinct
//! keys.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use domain_reporting::{is_eligible, ReportingItem, SubtotalKey, TransactionCounter};

/// One breakdown row: a dimension combination and its event counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionSubtotal {
    pub key: SubtotalKey,
    pub incoming: u64,
    pub outgoing: u64,
}

/// Result of aggregating one period's items for the TSR
///
/// Key component order per family. Identifier schemes and values are
/// separate components, so the keys stay injective even when a scheme or
/// value contains a separator:
/// - `per_transport_protocol`: `[transport protocol]`
/// - `per_provider_doctype_process`: `[counterparty provider id,
///   document type scheme, document type value, process scheme,
///   process value]`
/// - `per_provider_doctype_process_country`: `[counterparty provider id,
///   document type scheme, document type value, process scheme,
///   process value, C1 country, C4 country]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionStatistics {
    /// Whole-period event counts, no breakdown
    pub total: TransactionCounter,
    pub per_transport_protocol: Vec<TransactionSubtotal>,
    pub per_provider_doctype_process: Vec<TransactionSubtotal>,
    pub per_provider_doctype_process_country: Vec<TransactionSubtotal>,
}

/// Aggregates reporting items into transaction statistics
///
/// Ineligible items (reserved report document types) are skipped here even
/// though backends already skip them on store - an unfiltered collection
/// handed in directly must not leak into a report.
///
/// The country-pair family is computed from RECEIVING items only: a sender
/// cannot reliably know the recipient's country, so only the receiving side
/// reports country pairs. This asymmetry is deliberate.
pub fn aggregate<'a, I>(items: I) -> TransactionStatistics
where
    I: IntoIterator<Item = &'a ReportingItem>,
{
    let mut total = TransactionCounter::new();
    let mut per_tp: BTreeMap<SubtotalKey, TransactionCounter> = BTreeMap::new();
    let mut per_sp_dt_pr: BTreeMap<SubtotalKey, TransactionCounter> = BTreeMap::new();
    let mut per_sp_dt_pr_cc: BTreeMap<SubtotalKey, TransactionCounter> = BTreeMap::new();

    for item in items {
        if !is_eligible(item) {
            tracing::info!(
                doc_type = %item.doc_type(),
                "skipping reporting item with reserved report document type"
            );
            continue;
        }

        let direction = item.direction();
        let doc_type = item.doc_type();
        let process = item.process();
        total.record(direction);

        per_tp
            .entry(SubtotalKey::new([item.transport_protocol()]))
            .or_default()
            .record(direction);

        per_sp_dt_pr
            .entry(SubtotalKey::new([
                item.other_service_provider_id(),
                doc_type.scheme.as_str(),
                doc_type.value.as_str(),
                process.scheme.as_str(),
                process.value.as_str(),
            ]))
            .or_default()
            .record(direction);

        if direction.is_receiving() {
            if let Some(c4) = item.c4_country_code() {
                per_sp_dt_pr_cc
                    .entry(SubtotalKey::new([
                        item.other_service_provider_id(),
                        doc_type.scheme.as_str(),
                        doc_type.value.as_str(),
                        process.scheme.as_str(),
                        process.value.as_str(),
                        item.c1_country_code(),
                        c4,
                    ]))
                    .or_default()
                    .record(direction);
            }
        }
    }

    TransactionStatistics {
        total,
        per_transport_protocol: into_rows(per_tp),
        per_provider_doctype_process: into_rows(per_sp_dt_pr),
        per_provider_doctype_process_country: into_rows(per_sp_dt_pr_cc),
    }
}

fn into_rows(map: BTreeMap<SubtotalKey, TransactionCounter>) -> Vec<TransactionSubtotal> {
    map.into_iter()
        .map(|(key, counter)| TransactionSubtotal {
            key,
            incoming: counter.incoming,
            outgoing: counter.outgoing,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use domain_reporting::ReportingItemBuilder;
    use reporting_kernel::{DocumentTypeId, ProcessId};

    fn base_builder() -> ReportingItemBuilder {
        ReportingItem::builder()
            .exchange_instant(Utc::now())
            .c2_id("PSP000101")
            .c3_id("PSP000202")
            .doc_type(DocumentTypeId::new("busdox-docid-qns", "urn:example:invoice:3"))
            .process(ProcessId::new("cenbii-procid-ubl", "urn:example:bis:billing"))
            .transport_protocol("AS4-v1.0")
            .c1_country_code("FI")
            .end_user_id("eu-1")
    }

    #[test]
    fn test_empty_input_yields_empty_statistics() {
        let stats = aggregate([]);
        assert_eq!(stats.total.total(), 0);
        assert!(stats.per_transport_protocol.is_empty());
        assert!(stats.per_provider_doctype_process.is_empty());
        assert!(stats.per_provider_doctype_process_country.is_empty());
    }

    #[test]
    fn test_sending_item_skips_country_family() {
        let item = base_builder().sending().build().unwrap();
        let stats = aggregate([&item]);

        assert_eq!(stats.total.outgoing, 1);
        assert_eq!(stats.total.incoming, 0);
        assert_eq!(stats.per_transport_protocol.len(), 1);
        assert_eq!(stats.per_provider_doctype_process.len(), 1);
        assert!(stats.per_provider_doctype_process_country.is_empty());
    }

    #[test]
    fn test_receiving_item_populates_all_families() {
        let item = base_builder().receiving("DE").build().unwrap();
        let stats = aggregate([&item]);

        assert_eq!(stats.total.incoming, 1);
        assert_eq!(stats.per_transport_protocol.len(), 1);
        assert_eq!(stats.per_provider_doctype_process.len(), 1);
        assert_eq!(stats.per_provider_doctype_process_country.len(), 1);

        let row = &stats.per_provider_doctype_process_country[0];
        assert_eq!(
            row.key.components(),
            [
                "PSP000101",
                "busdox-docid-qns",
                "urn:example:invoice:3",
                "cenbii-procid-ubl",
                "urn:example:bis:billing",
                "FI",
                "DE",
            ]
        );
        assert_eq!(row.incoming, 1);
        assert_eq!(row.outgoing, 0);
    }

    #[test]
    fn test_identifier_keys_keep_scheme_and_value_apart() {
        // Same concatenation, different (scheme, value) splits: must not
        // merge into one row.
        let first = base_builder()
            .sending()
            .doc_type(DocumentTypeId::new(
                "busdox-docid-qns::urn:example",
                "invoice:3",
            ))
            .build()
            .unwrap();
        let second = base_builder()
            .sending()
            .doc_type(DocumentTypeId::new(
                "busdox-docid-qns",
                "urn:example::invoice:3",
            ))
            .build()
            .unwrap();

        let stats = aggregate([&first, &second]);
        assert_eq!(stats.per_provider_doctype_process.len(), 2);
    }

    #[test]
    fn test_counterparty_depends_on_direction() {
        let sent = base_builder().sending().build().unwrap();
        let received = base_builder().receiving("DE").build().unwrap();
        let stats = aggregate([&sent, &received]);

        // Same doc type and process but different counterparties: C3 for the
        // sent item, C2 for the received one.
        assert_eq!(stats.per_provider_doctype_process.len(), 2);
        let providers: Vec<&String> = stats
            .per_provider_doctype_process
            .iter()
            .map(|row| &row.key.components()[0])
            .collect();
        assert_eq!(providers, ["PSP000101", "PSP000202"]);
    }
}
