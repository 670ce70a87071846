//! End-to-end pipeline tests
//!
//! Build items, store them through the memory backend, iterate one month
//! back out, and aggregate both report kinds from the same snapshot.

use chrono::{TimeZone, Utc};

use domain_eusr::EusrReportBuilder;
use domain_tsr::TsrReportBuilder;
use infra_backend::{ReportingBackend, ReportingBackendExt};
use reporting_kernel::{
    DocumentTypeId, EUSR_CUSTOMIZATION_ID, REPORT_DOCTYPE_SCHEME, TSR_CUSTOMIZATION_ID,
    TSR_REPORT_DOCTYPE_VALUE,
};
use test_utils::{
    assert_end_user_rows_sorted, assert_rows_sum_to, assert_transaction_rows_sorted,
    init_test_tracing, seeded_memory_backend, IdentifierFixtures, ReporterFixtures,
    TemporalFixtures, TestItemBuilder,
};

#[tokio::test]
async fn test_month_of_items_flows_into_both_reports() {
    init_test_tracing();

    let items = vec![
        TestItemBuilder::new().end_user_id("eu-1").build(),
        TestItemBuilder::new()
            .end_user_id("eu-2")
            .doc_type(IdentifierFixtures::order_doc_type())
            .build(),
        TestItemBuilder::new()
            .end_user_id("eu-1")
            .receiving("DE")
            .build(),
        // Out of period: must not appear in the May snapshot.
        TestItemBuilder::new()
            .exchange_instant(TemporalFixtures::next_month_instant())
            .end_user_id("eu-3")
            .build(),
    ];

    let backend = seeded_memory_backend(items).await.unwrap();
    let snapshot = backend.iterate_month(2024, 5).await.unwrap();
    assert_eq!(snapshot.len(), 3);

    let tsr = TsrReportBuilder::new()
        .period(TemporalFixtures::period())
        .reporter(ReporterFixtures::reporter())
        .build(&snapshot)
        .unwrap();

    assert_eq!(tsr.header.customization_id, TSR_CUSTOMIZATION_ID);
    assert_eq!(tsr.statistics.total.outgoing, 2);
    assert_eq!(tsr.statistics.total.incoming, 1);
    assert_transaction_rows_sorted(&tsr.statistics.per_transport_protocol);
    assert_rows_sum_to(&tsr.statistics.per_transport_protocol, 1, 2);

    let eusr = EusrReportBuilder::new()
        .period(TemporalFixtures::period())
        .reporter(ReporterFixtures::reporter())
        .build(&snapshot)
        .unwrap();

    assert_eq!(eusr.header.customization_id, EUSR_CUSTOMIZATION_ID);
    // eu-1 sent and received, eu-2 only sent.
    assert_eq!(eusr.statistics.full_set.sending, 2);
    assert_eq!(eusr.statistics.full_set.receiving, 1);
    assert_eq!(eusr.statistics.full_set.sending_or_receiving, 2);
    assert_end_user_rows_sorted(&eusr.statistics.per_doctype_process);
}

#[tokio::test]
async fn test_reserved_report_traffic_never_enters_storage() {
    init_test_tracing();

    let report_about_reports = TestItemBuilder::new()
        .doc_type(DocumentTypeId::new(
            REPORT_DOCTYPE_SCHEME,
            TSR_REPORT_DOCTYPE_VALUE,
        ))
        .build();
    let regular = TestItemBuilder::new().build();

    let backend = seeded_memory_backend([report_about_reports, regular])
        .await
        .unwrap();

    let snapshot = backend.iterate_month(2024, 5).await.unwrap();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(
        snapshot[0].doc_type(),
        &IdentifierFixtures::invoice_doc_type()
    );
}

#[tokio::test]
async fn test_snapshot_is_timestamp_ordered() {
    init_test_tracing();

    let later = TestItemBuilder::new()
        .exchange_instant(Utc.with_ymd_and_hms(2024, 5, 20, 12, 0, 0).unwrap())
        .build();
    let earlier = TestItemBuilder::new()
        .exchange_instant(Utc.with_ymd_and_hms(2024, 5, 3, 8, 0, 0).unwrap())
        .build();

    let backend = seeded_memory_backend([later, earlier]).await.unwrap();
    let snapshot = backend.iterate_month(2024, 5).await.unwrap();

    assert_eq!(snapshot.len(), 2);
    assert!(snapshot[0].exchange_instant() < snapshot[1].exchange_instant());
}

#[tokio::test]
async fn test_same_snapshot_feeds_both_engines_consistently() {
    init_test_tracing();

    let items = vec![
        TestItemBuilder::new().end_user_id("eu-1").build(),
        TestItemBuilder::new().end_user_id("eu-2").receiving("NO").build(),
        TestItemBuilder::new().end_user_id("eu-2").receiving("NO").build(),
    ];

    let backend = seeded_memory_backend(items).await.unwrap();
    let snapshot = backend.iterate_month(2024, 5).await.unwrap();

    let tsr = domain_tsr::aggregate(&snapshot);
    let eusr = domain_eusr::aggregate(&snapshot);

    // Three events, but only two people.
    assert_eq!(tsr.total.total(), 3);
    assert_eq!(eusr.full_set.sending_or_receiving, 2);
}

#[tokio::test]
async fn test_backend_rejects_use_after_shutdown() {
    init_test_tracing();

    let backend = seeded_memory_backend([TestItemBuilder::new().build()])
        .await
        .unwrap();
    backend.shutdown_backend().await;

    let result = backend.iterate_month(2024, 5).await;
    assert!(matches!(
        result,
        Err(infra_backend::BackendError::NotInitialized)
    ));
}
