//! Accumulators for the two counting semantics
//!
//! TSR counts events: every recorded exchange increments a scalar. EUSR
//! counts people: an end user contributes once per key and role no matter
//! how many documents they exchanged. Both reports need both shapes, so the
//! accumulators live here next to the item model.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::item::Direction;

/// Event counter for the transaction statistics report
///
/// `incoming` counts RECEIVING items, `outgoing` counts SENDING items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionCounter {
    pub incoming: u64,
    pub outgoing: u64,
}

impl TransactionCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one exchange event in the given direction
    pub fn record(&mut self, direction: Direction) {
        match direction {
            Direction::Sending => self.outgoing += 1,
            Direction::Receiving => self.incoming += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.incoming + self.outgoing
    }
}

/// Distinct end-user accumulator for the end-user statistics report
///
/// Holds three id sets: end users seen sending, seen receiving, and seen in
/// either role. The third set is a true union, never a sum - an end user
/// active in both roles is one person.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndUserCounter {
    sending: BTreeSet<String>,
    receiving: BTreeSet<String>,
    sending_or_receiving: BTreeSet<String>,
}

impl EndUserCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one sighting of an end user in the given role
    ///
    /// Recording the same id and role again has no effect.
    pub fn record(&mut self, direction: Direction, end_user_id: &str) {
        match direction {
            Direction::Sending => {
                self.sending.insert(end_user_id.to_owned());
            }
            Direction::Receiving => {
                self.receiving.insert(end_user_id.to_owned());
            }
        }
        self.sending_or_receiving.insert(end_user_id.to_owned());
    }

    /// Distinct end users seen on sending items
    pub fn sending_count(&self) -> u64 {
        self.sending.len() as u64
    }

    /// Distinct end users seen on receiving items
    pub fn receiving_count(&self) -> u64 {
        self.receiving.len() as u64
    }

    /// Distinct end users seen in either role (set union)
    pub fn sending_or_receiving_count(&self) -> u64 {
        self.sending_or_receiving.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.sending_or_receiving.is_empty()
    }
}
