//! TSR aggregation and report tests

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use domain_reporting::{ReportingItem, ReportingItemBuilder};
use domain_tsr::{aggregate, TsrReportBuilder};
use reporting_kernel::{
    DocumentTypeId, ProcessId, ReportPeriod, ReporterIdentity, EUSR_REPORT_DOCTYPE_VALUE,
    REPORT_DOCTYPE_SCHEME, TSR_REPORT_DOCTYPE_VALUE,
};

fn builder() -> ReportingItemBuilder {
    ReportingItem::builder()
        .exchange_instant(Utc.with_ymd_and_hms(2024, 5, 10, 9, 0, 0).unwrap())
        .c2_id("PSP000101")
        .c3_id("PSP000202")
        .doc_type(DocumentTypeId::new("busdox-docid-qns", "urn:example:invoice:3"))
        .process(ProcessId::new("cenbii-procid-ubl", "urn:example:bis:billing"))
        .transport_protocol("AS4-v1.0")
        .c1_country_code("FI")
        .end_user_id("eu-1")
}

#[test]
fn test_mixed_directions_split_the_total() {
    let items = vec![
        builder().sending().build().unwrap(),
        builder().sending().end_user_id("eu-2").build().unwrap(),
        builder().receiving("DE").build().unwrap(),
    ];

    let stats = aggregate(&items);
    assert_eq!(stats.total.outgoing, 2);
    assert_eq!(stats.total.incoming, 1);
    assert_eq!(stats.total.total(), 3);
}

#[test]
fn test_transport_rows_count_both_directions() {
    let items = vec![
        builder().sending().build().unwrap(),
        builder().receiving("DE").build().unwrap(),
        builder()
            .sending()
            .transport_protocol("AS4-v2.0")
            .build()
            .unwrap(),
    ];

    let stats = aggregate(&items);
    assert_eq!(stats.per_transport_protocol.len(), 2);

    let v1 = &stats.per_transport_protocol[0];
    assert_eq!(v1.key.components(), ["AS4-v1.0"]);
    assert_eq!((v1.incoming, v1.outgoing), (1, 1));

    let v2 = &stats.per_transport_protocol[1];
    assert_eq!(v2.key.components(), ["AS4-v2.0"]);
    assert_eq!((v2.incoming, v2.outgoing), (0, 1));
}

#[test]
fn test_reserved_report_items_never_reach_the_output() {
    let report_about_reports = builder()
        .sending()
        .doc_type(DocumentTypeId::new(
            REPORT_DOCTYPE_SCHEME,
            TSR_REPORT_DOCTYPE_VALUE,
        ))
        .build()
        .unwrap();
    let other_report = builder()
        .receiving("DE")
        .doc_type(DocumentTypeId::new(
            REPORT_DOCTYPE_SCHEME,
            EUSR_REPORT_DOCTYPE_VALUE,
        ))
        .build()
        .unwrap();
    let ordinary = builder().sending().build().unwrap();

    // Passed directly to the engine, bypassing any backend filtering.
    let stats = aggregate([&report_about_reports, &other_report, &ordinary]);
    assert_eq!(stats.total.total(), 1);
    assert_eq!(stats.per_transport_protocol.len(), 1);
    assert_eq!(stats.per_provider_doctype_process.len(), 1);
    assert!(stats.per_provider_doctype_process_country.is_empty());
}

#[test]
fn test_report_wraps_header_and_statistics() {
    let items = vec![builder().receiving("DE").build().unwrap()];
    let report = TsrReportBuilder::new()
        .period(ReportPeriod::new(2024, 5).unwrap())
        .reporter(ReporterIdentity::new("CertSubjectCN", "PSP000202").unwrap())
        .build(&items)
        .unwrap();

    assert_eq!(report.header.period.to_string(), "2024-05");
    assert_eq!(report.statistics.total.incoming, 1);
    assert_eq!(report.statistics.per_provider_doctype_process_country.len(), 1);
}

fn arbitrary_items() -> impl Strategy<Value = Vec<ReportingItem>> {
    let item = (
        0u8..3,
        0u8..3,
        0u8..2,
        any::<bool>(),
        0i64..2_000_000,
    )
        .prop_map(|(provider, doc, transport, receiving, offset_secs)| {
            let b = builder()
                .exchange_instant(
                    Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap()
                        + chrono::Duration::seconds(offset_secs),
                )
                .c2_id(format!("PSP00010{provider}"))
                .doc_type(DocumentTypeId::new(
                    "busdox-docid-qns",
                    format!("urn:example:doc:{doc}"),
                ))
                .transport_protocol(format!("AS4-v{transport}.0"));
            if receiving {
                b.receiving("DE").build().unwrap()
            } else {
                b.sending().build().unwrap()
            }
        });
    proptest::collection::vec(item, 0..40)
}

proptest! {
    /// Aggregation is a function of the input multiset, not its order.
    #[test]
    fn prop_aggregation_is_permutation_invariant(items in arbitrary_items(), seed in any::<u64>()) {
        let baseline = aggregate(&items);

        let mut shuffled = items;
        // Cheap deterministic shuffle driven by the seed.
        let len = shuffled.len();
        if len > 1 {
            for i in 0..len {
                let j = ((seed.wrapping_mul(6364136223846793005).wrapping_add(i as u64)) % len as u64) as usize;
                shuffled.swap(i, j);
            }
        }

        let reordered = aggregate(&shuffled);
        prop_assert_eq!(baseline, reordered);
    }

    /// The total always equals the sum over any one breakdown family.
    #[test]
    fn prop_transport_rows_sum_to_the_total(items in arbitrary_items()) {
        let stats = aggregate(&items);
        let incoming: u64 = stats.per_transport_protocol.iter().map(|r| r.incoming).sum();
        let outgoing: u64 = stats.per_transport_protocol.iter().map(|r| r.outgoing).sum();
        prop_assert_eq!(incoming, stats.total.incoming);
        prop_assert_eq!(outgoing, stats.total.outgoing);
    }
}
