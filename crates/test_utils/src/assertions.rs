//! Custom Test Assertions
//!
//! Assertion helpers for statistics types that give more meaningful error
//! messages than standard assertions.

use domain_eusr::EndUserSubtotal;
use domain_tsr::TransactionSubtotal;

/// Asserts that transaction rows are in strictly ascending key order
pub fn assert_transaction_rows_sorted(rows: &[TransactionSubtotal]) {
    for pair in rows.windows(2) {
        assert!(
            pair[0].key < pair[1].key,
            "rows out of order: {} before {}",
            pair[0].key,
            pair[1].key
        );
    }
}

/// Asserts that end-user rows are in strictly ascending key order
pub fn assert_end_user_rows_sorted(rows: &[EndUserSubtotal]) {
    for pair in rows.windows(2) {
        assert!(
            pair[0].key < pair[1].key,
            "rows out of order: {} before {}",
            pair[0].key,
            pair[1].key
        );
    }
}

/// Asserts that a breakdown family's events sum to the report total
pub fn assert_rows_sum_to(rows: &[TransactionSubtotal], incoming: u64, outgoing: u64) {
    let row_incoming: u64 = rows.iter().map(|r| r.incoming).sum();
    let row_outgoing: u64 = rows.iter().map(|r| r.outgoing).sum();
    assert_eq!(
        (row_incoming, row_outgoing),
        (incoming, outgoing),
        "breakdown rows do not sum to the total"
    );
}
