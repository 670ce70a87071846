//! EUSR aggregation engine
//!
//! Structurally the same single pass as the TSR engine, with different
//! counting semantics: each key accumulates a set of end-user identifiers
//! per role, and the final counts are set sizes. Duplicate sightings of the
//! same end user within a key contribute once. Determinism follows from the
//! `BTreeMap` grouping, exactly as in the TSR engine.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use domain_reporting::{is_eligible, EndUserCounter, ReportingItem, SubtotalKey};

/// Whole-period distinct end-user counts, no breakdown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullSetCounts {
    /// Distinct end users seen on sending items
    pub sending: u64,
    /// Distinct end users seen on receiving items
    pub receiving: u64,
    /// Distinct end users seen in either role - a set union, never a sum
    pub sending_or_receiving: u64,
}

impl From<&EndUserCounter> for FullSetCounts {
    fn from(counter: &EndUserCounter) -> Self {
        Self {
            sending: counter.sending_count(),
            receiving: counter.receiving_count(),
            sending_or_receiving: counter.sending_or_receiving_count(),
        }
    }
}

/// One breakdown row: a dimension combination and its distinct-user counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndUserSubtotal {
    pub key: SubtotalKey,
    pub sending: u64,
    pub receiving: u64,
    pub sending_or_receiving: u64,
}

/// Result of aggregating one period's items for the EUSR
///
/// Key component order per family. Identifier schemes and values are
/// separate components, so the keys stay injective even when a scheme or
/// value contains a separator:
/// - `per_end_user_country`: `[end-user country]`
/// - `per_doctype_process`: `[document type scheme, document type value,
///   process scheme, process value]`
/// - `per_doctype_country`: `[document type scheme, document type value,
///   end-user country]`
/// - `per_doctype_process_country`: `[document type scheme, document type
///   value, process scheme, process value, end-user country]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndUserStatistics {
    pub full_set: FullSetCounts,
    pub per_end_user_country: Vec<EndUserSubtotal>,
    pub per_doctype_process: Vec<EndUserSubtotal>,
    pub per_doctype_country: Vec<EndUserSubtotal>,
    pub per_doctype_process_country: Vec<EndUserSubtotal>,
}

/// Aggregates reporting items into end-user statistics
///
/// Ineligible items (reserved report document types) are skipped here even
/// though backends already skip them on store.
///
/// All four families use the end-user country of the recording side (C1 when
/// sending, C4 when receiving); the direction asymmetry of the underlying
/// data is deliberate and mirrors the TSR engine's country-pair family.
pub fn aggregate<'a, I>(items: I) -> EndUserStatistics
where
    I: IntoIterator<Item = &'a ReportingItem>,
{
    let mut full_set = EndUserCounter::new();
    let mut per_euc: BTreeMap<SubtotalKey, EndUserCounter> = BTreeMap::new();
    let mut per_dt_pr: BTreeMap<SubtotalKey, EndUserCounter> = BTreeMap::new();
    let mut per_dt_euc: BTreeMap<SubtotalKey, EndUserCounter> = BTreeMap::new();
    let mut per_dt_pr_euc: BTreeMap<SubtotalKey, EndUserCounter> = BTreeMap::new();

    for item in items {
        if !is_eligible(item) {
            tracing::info!(
                doc_type = %item.doc_type(),
                "skipping reporting item with reserved report document type"
            );
            continue;
        }

        let direction = item.direction();
        let end_user = item.end_user_id();
        let country = item.end_user_country_code();
        let doc_type = item.doc_type();
        let process = item.process();

        full_set.record(direction, end_user);

        per_euc
            .entry(SubtotalKey::new([country]))
            .or_default()
            .record(direction, end_user);

        per_dt_pr
            .entry(SubtotalKey::new([
                doc_type.scheme.as_str(),
                doc_type.value.as_str(),
                process.scheme.as_str(),
                process.value.as_str(),
            ]))
            .or_default()
            .record(direction, end_user);

        per_dt_euc
            .entry(SubtotalKey::new([
                doc_type.scheme.as_str(),
                doc_type.value.as_str(),
                country,
            ]))
            .or_default()
            .record(direction, end_user);

        per_dt_pr_euc
            .entry(SubtotalKey::new([
                doc_type.scheme.as_str(),
                doc_type.value.as_str(),
                process.scheme.as_str(),
                process.value.as_str(),
                country,
            ]))
            .or_default()
            .record(direction, end_user);
    }

    EndUserStatistics {
        full_set: FullSetCounts::from(&full_set),
        per_end_user_country: into_rows(per_euc),
        per_doctype_process: into_rows(per_dt_pr),
        per_doctype_country: into_rows(per_dt_euc),
        per_doctype_process_country: into_rows(per_dt_pr_euc),
    }
}

fn into_rows(map: BTreeMap<SubtotalKey, EndUserCounter>) -> Vec<EndUserSubtotal> {
    map.into_iter()
        .map(|(key, counter)| EndUserSubtotal {
            key,
            sending: counter.sending_count(),
            receiving: counter.receiving_count(),
            sending_or_receiving: counter.sending_or_receiving_count(),
        })
        .collect()
}
