//! Statistics records and the per-operation breakdown table.
//!
//! A [`Statistics`] value summarizes one logical scope of a benchmark run
//! (one worker thread, one operation type, or a whole node): how many
//! operations succeeded, and the maximum latency observed per configured
//! time-window slot. Records combine in place; the combination is commutative
//! and associative, which is what makes the two-level merge protocol
//! (threads into a node, nodes into a cluster) independent of merge order.

use crate::error::AggregateError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Aggregate measurements for one logical scope of a benchmark run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    /// Count of successful operations.
    pub num_success: u64,

    /// Per-slot maximum observed latency in nanoseconds.
    ///
    /// The profile has a fixed length for the lifetime of a run; what each
    /// slot represents (a time window, an operation class) is owned by the
    /// caller, not by this record. All records that will ever be combined
    /// must share the same length.
    pub max_response_time_ns: Vec<u64>,
}

impl Statistics {
    /// Create an empty record with `slots` response-time slots.
    pub fn new(slots: usize) -> Self {
        Self {
            num_success: 0,
            max_response_time_ns: vec![0; slots],
        }
    }

    /// Number of response-time slots in this record's profile.
    pub fn slot_count(&self) -> usize {
        self.max_response_time_ns.len()
    }

    /// Record an observed latency into one slot, keeping the slot maximum.
    ///
    /// Slot layout is caller-owned; an out-of-range slot is ignored.
    pub fn record_response_time(&mut self, slot: usize, elapsed_ns: u64) {
        if let Some(max) = self.max_response_time_ns.get_mut(slot) {
            *max = (*max).max(elapsed_ns);
        }
    }

    /// Combine another record into this one in place.
    ///
    /// Success counts are summed and each response-time slot takes the
    /// element-wise maximum, so combining never decreases either. `other`
    /// is left unchanged. Fails with [`AggregateError::ShapeMismatch`] if
    /// the two profiles differ in length.
    pub fn combine(&mut self, other: &Statistics) -> Result<(), AggregateError> {
        if self.max_response_time_ns.len() != other.max_response_time_ns.len() {
            return Err(AggregateError::ShapeMismatch {
                expected: self.max_response_time_ns.len(),
                actual: other.max_response_time_ns.len(),
            });
        }

        self.num_success += other.num_success;
        for (slot, theirs) in self
            .max_response_time_ns
            .iter_mut()
            .zip(&other.max_response_time_ns)
        {
            *slot = (*slot).max(*theirs);
        }

        Ok(())
    }
}

impl Default for Statistics {
    fn default() -> Self {
        Self::new(crate::defaults::RESPONSE_TIME_SLOTS)
    }
}

/// Breakdown of a run by operation method name.
///
/// Maps each operation name to the [`Statistics`] accumulated for it.
/// Merging two tables takes the union of their key sets: records under
/// matching keys are combined, unseen keys are inserted, and no key is
/// ever removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MethodTable {
    entries: HashMap<String, Statistics>,
}

impl MethodTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct operation methods recorded.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no operation method has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Statistics recorded for one operation method, if any.
    pub fn get(&self, method: &str) -> Option<&Statistics> {
        self.entries.get(method)
    }

    /// Mutable statistics for one operation method, created empty with
    /// `slots` response-time slots if not yet present.
    pub fn entry_mut(&mut self, method: &str, slots: usize) -> &mut Statistics {
        self.entries
            .entry(method.to_string())
            .or_insert_with(|| Statistics::new(slots))
    }

    /// Insert (or replace) the statistics for one operation method.
    pub fn insert(&mut self, method: impl Into<String>, statistics: Statistics) {
        self.entries.insert(method.into(), statistics);
    }

    /// Iterate over `(method, statistics)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Statistics)> {
        self.entries.iter()
    }

    /// Merge another table into this one in place.
    ///
    /// For every method in `other`: if absent here its record is inserted,
    /// otherwise the existing record is combined with it. Input iteration
    /// order does not affect the merged contents. Fails if any pair of
    /// records has mismatched profile shapes.
    pub fn combine(&mut self, other: &MethodTable) -> Result<(), AggregateError> {
        for (method, theirs) in &other.entries {
            match self.entries.get_mut(method) {
                Some(ours) => ours.combine(theirs)?,
                None => {
                    self.entries.insert(method.clone(), theirs.clone());
                }
            }
        }
        Ok(())
    }
}
