//! Property-Based Test Generators
//!
//! Proptest strategies that produce valid reporting items and the values
//! they are made of. Every generated item passes production validation.

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;

use domain_reporting::{Direction, ReportingItem};
use reporting_kernel::{DocumentTypeId, ProcessId};

use crate::builders::TestItemBuilder;
use crate::fixtures::IdentifierFixtures;

/// Strategy for generating valid two-letter country codes
pub fn country_code_strategy() -> impl Strategy<Value = String> {
    proptest::sample::select(vec!["FI", "DE", "NO", "SE", "FR", "BE"]).prop_map(str::to_owned)
}

/// Strategy for generating exchange directions
pub fn direction_strategy() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Sending), Just(Direction::Receiving)]
}

/// Strategy for generating service provider identifiers
pub fn service_provider_id_strategy() -> impl Strategy<Value = String> {
    (100u32..120u32).prop_map(|n| format!("PSP000{n}"))
}

/// Strategy for generating document types from a small pool
///
/// The pool is deliberately small so generated inputs collide on keys and
/// exercise grouping, not just row creation.
pub fn doc_type_strategy() -> impl Strategy<Value = DocumentTypeId> {
    (0u8..4).prop_map(|n| DocumentTypeId::new("busdox-docid-qns", format!("urn:example:doc:{n}")))
}

/// Strategy for generating processes from a small pool
pub fn process_strategy() -> impl Strategy<Value = ProcessId> {
    (0u8..3).prop_map(|n| ProcessId::new("cenbii-procid-ubl", format!("urn:example:proc:{n}")))
}

/// Strategy for generating end-user identifiers from a small pool
pub fn end_user_id_strategy() -> impl Strategy<Value = String> {
    (0u8..8).prop_map(|n| format!("eu-{n}"))
}

/// Strategy for generating instants within May 2024
pub fn in_period_instant_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..31 * 24 * 60, 0u32..1000u32).prop_map(|(minutes, millis)| {
        Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap()
            + Duration::minutes(minutes)
            + Duration::milliseconds(millis as i64)
    })
}

/// Strategy for generating one complete, valid reporting item
pub fn reporting_item_strategy() -> impl Strategy<Value = ReportingItem> {
    (
        in_period_instant_strategy(),
        direction_strategy(),
        service_provider_id_strategy(),
        doc_type_strategy(),
        process_strategy(),
        country_code_strategy(),
        country_code_strategy(),
        end_user_id_strategy(),
    )
        .prop_map(
            |(instant, direction, counterparty, doc_type, process, c1, c4, end_user)| {
                let builder = TestItemBuilder::new()
                    .exchange_instant(instant)
                    .c2_id(IdentifierFixtures::own_provider_id())
                    .c3_id(counterparty)
                    .doc_type(doc_type)
                    .process(process)
                    .c1_country_code(c1)
                    .end_user_id(end_user);
                match direction {
                    Direction::Sending => builder.sending().build(),
                    Direction::Receiving => builder.receiving(c4).build(),
                }
            },
        )
}

/// Strategy for generating a batch of valid reporting items
pub fn reporting_items_strategy(max: usize) -> impl Strategy<Value = Vec<ReportingItem>> {
    proptest::collection::vec(reporting_item_strategy(), 0..max)
}
