//! Task results and the two merge operations that combine them.
//!
//! A [`TaskResult`] is the unit produced by one worker: timing bounds for
//! the measured window, a whole-task [`Statistics`] record, a per-operation
//! breakdown, the list of errors observed while running, and the
//! configuration snapshot the task ran under. A worker owns its result
//! exclusively while measuring, finalizes it, and hands it upward.
//!
//! Two merge operations exist with deliberately different contracts:
//!
//! - [`TaskResult::merge_full`] combines results that originated on the
//!   *same* node (sibling worker threads) and concatenates their error
//!   lists.
//! - [`TaskResult::merge_aggregate_only`] combines results from *different*
//!   nodes for the cluster-wide summary and never touches `errors`, so each
//!   node's failures stay attributable in the per-node map.
//!
//! Confusing the two at an aggregation boundary either loses per-node error
//! attribution or balloons one list with every node's failures, which is why
//! they are two named operations rather than one merge with a flag.

use crate::{
    error::AggregateError,
    parameters::{BaseParameters, BenchParameters},
    statistics::{MethodTable, Statistics},
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Summarized output of one benchmark task (one worker thread or one node).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskResult {
    /// Wall-clock start of the recorded (post-warmup) window, epoch ms.
    pub record_start_ms: i64,

    /// Wall-clock end of the recorded window, epoch ms.
    pub end_ms: i64,

    /// Length of the recorded window in milliseconds.
    pub duration_ms: i64,

    /// Node-identifying parameters the task ran under.
    pub base_parameters: BaseParameters,

    /// Workload parameters the task ran under.
    pub parameters: BenchParameters,

    /// Free-text failure descriptions collected while the task ran.
    ///
    /// These are data, not errors: they never abort aggregation and are
    /// carried through to the final report.
    pub errors: Vec<String>,

    /// Whole-task aggregate statistics.
    pub statistics: Statistics,

    /// Breakdown of statistics by operation method.
    pub statistics_per_method: MethodTable,
}

impl TaskResult {
    /// Create an empty result whose response-time profiles have `slots`
    /// slots.
    ///
    /// Workers create one of these at task start and mutate it in place
    /// through the recording operations below.
    pub fn new(base_parameters: BaseParameters, parameters: BenchParameters, slots: usize) -> Self {
        Self {
            record_start_ms: 0,
            end_ms: 0,
            duration_ms: 0,
            base_parameters,
            parameters,
            errors: Vec::new(),
            statistics: Statistics::new(slots),
            statistics_per_method: MethodTable::new(),
        }
    }

    /// Identifier of the node that produced this result.
    pub fn node_id(&self) -> &str {
        &self.base_parameters.id
    }

    /// Increment the whole-task success count.
    pub fn increment_num_success(&mut self, num_success: u64) {
        self.statistics.num_success += num_success;
    }

    /// Record an observed latency into one slot of the whole-task profile.
    pub fn record_response_time(&mut self, slot: usize, elapsed_ns: u64) {
        self.statistics.record_response_time(slot, elapsed_ns);
    }

    /// Append one failure description.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Mutable per-method statistics for `method`, created empty (with the
    /// same slot count as the whole-task profile) on first use.
    pub fn method_statistics_mut(&mut self, method: &str) -> &mut Statistics {
        let slots = self.statistics.slot_count();
        self.statistics_per_method.entry_mut(method, slots)
    }

    /// Install a fully-built statistics record for one method.
    pub fn put_method_statistics(&mut self, method: impl Into<String>, statistics: Statistics) {
        self.statistics_per_method.insert(method, statistics);
    }

    /// Merge a sibling result from the same node into this one.
    ///
    /// Appends `other`'s errors after this result's own (concatenation in
    /// order, no deduplication), then performs the aggregate-only merge.
    /// On failure the receiver may be partially updated; treat failure as
    /// fatal to the aggregation run.
    pub fn merge_full(&mut self, other: &TaskResult) -> Result<(), AggregateError> {
        self.errors.extend(other.errors.iter().cloned());
        self.merge_aggregate_only(other)
    }

    /// Merge a result from a different node into this one, leaving `errors`
    /// untouched.
    ///
    /// Statistics and the per-method table combine commutatively, and
    /// `end_ms` takes the maximum, so the folded totals are independent of
    /// merge order. `record_start_ms` and both parameter snapshots take the
    /// incoming value (last-merged wins); they exist for reporting, not for
    /// correctness-sensitive computation, and their order dependence is a
    /// documented limitation. On failure the receiver may be partially
    /// updated; treat failure as fatal to the aggregation run.
    pub fn merge_aggregate_only(&mut self, other: &TaskResult) -> Result<(), AggregateError> {
        self.statistics.combine(&other.statistics)?;

        self.record_start_ms = other.record_start_ms;
        self.end_ms = self.end_ms.max(other.end_ms);
        self.base_parameters = other.base_parameters.clone();
        self.parameters = other.parameters.clone();

        self.statistics_per_method
            .combine(&other.statistics_per_method)
    }

    /// Load a task result from a JSON file produced by a worker.
    pub fn from_json_file(path: &Path) -> Result<Self, AggregateError> {
        debug!("Loading task result from {:?}", path);
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Write this task result to a JSON file for transport to a coordinator.
    pub fn write_json_file(&self, path: &Path) -> Result<(), AggregateError> {
        debug!("Writing task result for {} to {:?}", self.node_id(), path);
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_for(id: &str, num_success: u64, maxes: &[u64]) -> TaskResult {
        let base = BaseParameters {
            id: id.to_string(),
            ..BaseParameters::default()
        };
        let mut result = TaskResult::new(base, BenchParameters::default(), maxes.len());
        result.statistics.num_success = num_success;
        result.statistics.max_response_time_ns = maxes.to_vec();
        result
    }

    #[test]
    fn test_recording_operations_update_in_place() {
        let mut result = result_for("node-0", 0, &[0, 0]);

        result.increment_num_success(5);
        result.record_response_time(1, 42);
        result.add_error("rpc timed out");
        result.method_statistics_mut("GetStatus").num_success += 3;

        assert_eq!(result.statistics.num_success, 5);
        assert_eq!(result.statistics.max_response_time_ns, vec![0, 42]);
        assert_eq!(result.errors, vec!["rpc timed out".to_string()]);
        let per_method = result.statistics_per_method.get("GetStatus").unwrap();
        assert_eq!(per_method.num_success, 3);
        assert_eq!(per_method.slot_count(), 2);
    }

    #[test]
    fn test_merge_full_concatenates_errors_receiver_first() {
        let mut receiver = result_for("node-0", 1, &[1]);
        receiver.add_error("e2");
        let mut other = result_for("node-0", 2, &[2]);
        other.add_error("e1");

        receiver.merge_full(&other).unwrap();

        assert_eq!(receiver.errors, vec!["e2".to_string(), "e1".to_string()]);
        assert_eq!(receiver.statistics.num_success, 3);
        // the merged-in sibling keeps its own error list
        assert_eq!(other.errors, vec!["e1".to_string()]);
    }

    #[test]
    fn test_merge_aggregate_only_never_touches_errors() {
        let mut receiver = result_for("node-0", 1, &[1]);
        receiver.add_error("local failure");
        let mut other = result_for("node-1", 2, &[2]);
        other.add_error("remote failure");

        receiver.merge_aggregate_only(&other).unwrap();

        assert_eq!(receiver.errors, vec!["local failure".to_string()]);
        assert_eq!(receiver.statistics.num_success, 3);
    }

    #[test]
    fn test_merge_aggregate_only_timing_and_snapshot_rules() {
        let mut receiver = result_for("node-0", 0, &[0]);
        receiver.record_start_ms = 100;
        receiver.end_ms = 900;

        let mut other = result_for("node-1", 0, &[0]);
        other.record_start_ms = 250;
        other.end_ms = 800;

        receiver.merge_aggregate_only(&other).unwrap();

        // incoming start wins, end takes the maximum
        assert_eq!(receiver.record_start_ms, 250);
        assert_eq!(receiver.end_ms, 900);
        // parameter snapshots are last-merged-wins
        assert_eq!(receiver.node_id(), "node-1");
    }

    #[test]
    fn test_merge_propagates_nested_shape_mismatch() {
        let mut receiver = result_for("node-0", 1, &[1, 2]);
        let other = result_for("node-1", 1, &[1, 2, 3]);

        assert!(matches!(
            receiver.merge_full(&other),
            Err(AggregateError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_merge_combines_per_method_tables() {
        let mut receiver = result_for("node-0", 0, &[0]);
        receiver.put_method_statistics(
            "CreateFile",
            Statistics {
                num_success: 4,
                max_response_time_ns: vec![10],
            },
        );

        let mut other = result_for("node-1", 0, &[0]);
        other.put_method_statistics(
            "CreateFile",
            Statistics {
                num_success: 6,
                max_response_time_ns: vec![25],
            },
        );
        other.put_method_statistics(
            "ListDir",
            Statistics {
                num_success: 1,
                max_response_time_ns: vec![5],
            },
        );

        receiver.merge_aggregate_only(&other).unwrap();

        let create = receiver.statistics_per_method.get("CreateFile").unwrap();
        assert_eq!(create.num_success, 10);
        assert_eq!(create.max_response_time_ns, vec![25]);
        assert_eq!(
            receiver.statistics_per_method.get("ListDir").unwrap().num_success,
            1
        );
    }
}
