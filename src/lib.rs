//! # Bench Aggregator Library
//!
//! An aggregation engine for distributed benchmark results. Many concurrent
//! workers (threads within a process, and separate processes or nodes in a
//! cluster run) each produce a summarized task result; this library combines
//! them into a single, statistically correct cluster summary.
//!
//! ## Two-Level Merge Protocol
//!
//! Results combine at two levels with deliberately different semantics:
//!
//! - **Within a node** (`merge_full`): sibling worker threads merge into one
//!   node-level result, concatenating their error lists.
//! - **Across nodes** (`merge_aggregate_only`): node-level results fold into
//!   the cluster summary without touching error lists, so each node's
//!   failures stay attributable in the per-node map.
//!
//! Success counts sum and per-slot latency maxima combine element-wise; both
//! operations are commutative and associative, which makes the folded totals
//! independent of merge order - the property that keeps distributed
//! aggregation correct regardless of which node reports first.
//!
//! ## Architecture Overview
//!
//! The library is organized into several key modules:
//!
//! - `statistics`: statistics records and the per-operation breakdown table
//! - `result`: per-task results, the two merge operations, and JSON file IO
//! - `aggregator`: the cross-node fold producing the final summary
//! - `parameters`: configuration snapshots identifying each node
//! - `error`: typed aggregation errors
//! - `cli`: command-line interface for the coordinator binary
//!
//! ## Usage Example
//!
//! ```rust
//! use bench_aggregator::{aggregate, BaseParameters, BenchParameters, TaskResult};
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut node0 = TaskResult::new(
//!         BaseParameters { id: "node-0".to_string(), ..Default::default() },
//!         BenchParameters::default(),
//!         2,
//!     );
//!     node0.increment_num_success(10);
//!     node0.record_response_time(0, 5_000);
//!
//!     let mut node1 = TaskResult::new(
//!         BaseParameters { id: "node-1".to_string(), ..Default::default() },
//!         BenchParameters::default(),
//!         2,
//!     );
//!     node1.increment_num_success(20);
//!     node1.record_response_time(0, 7_000);
//!
//!     let summary = aggregate(vec![node0, node1])?;
//!     assert_eq!(summary.cluster().statistics.num_success, 30);
//!     assert_eq!(summary.node_count(), 2);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Semantics
//!
//! Failures observed *while benchmarking* are data: workers append them as
//! strings to their result's error list and they never abort aggregation.
//! Failures observed *while merging* (mismatched latency-profile shapes,
//! duplicate node identifiers, empty input) are typed errors that propagate
//! unchanged to the caller - a failed merge must never produce a
//! plausible-looking but wrong summary.

/// Cross-node aggregation
///
/// Contains the `aggregate` fold and the `Summary` it produces. The fold
/// consumes owned task results, retains each node's pristine result in a
/// per-node map, and merges everything into one cluster-wide result.
pub mod aggregator;

/// Command-line interface for the coordinator binary
///
/// Argument parsing using clap for the thin coordinator shell that loads
/// per-node result files, aggregates them, and writes the summary.
pub mod cli;

/// Typed errors for the aggregation engine
///
/// Shape mismatches, empty input, duplicate node identifiers, and the IO
/// and serialization failures of the result-file helpers.
pub mod error;

/// Log line formatting for the coordinator binary
pub mod logging;

/// Configuration snapshots carried inside each task result
///
/// `BaseParameters` identifies the owning node; `BenchParameters` describes
/// the workload. Both travel with the result through serialization so
/// reports stay attributable.
pub mod parameters;

/// Per-task results and the two merge operations
///
/// The `TaskResult` type produced by each worker, its in-place recording
/// operations, the same-node and cross-node merges, and JSON file helpers
/// for transport to the coordinator.
pub mod result;

/// Statistics records and the per-operation breakdown
///
/// The commutative, associative `combine` operations that make the
/// two-level merge protocol order-independent.
pub mod statistics;

// Re-export key types for convenient library usage
// These are the primary types that library users will interact with

/// The cross-node fold and its output
pub use aggregator::{aggregate, Summary};

/// Typed aggregation errors
pub use error::AggregateError;

/// Node and workload configuration snapshots
pub use parameters::{BaseParameters, BenchParameters};

/// The unit of work produced by each benchmark worker
pub use result::TaskResult;

/// Statistics records and the per-operation table
pub use statistics::{MethodTable, Statistics};

/// The current version of the bench aggregator
///
/// This version string is automatically populated from Cargo.toml and used
/// in result output for reproducibility and debugging purposes.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default configuration values
pub mod defaults {
    /// Default number of response-time slots in an extremal-latency profile
    ///
    /// One slot per tracked time window of the run. Every worker in a run
    /// must use the same slot count; combining profiles of different
    /// lengths is a configuration error.
    pub const RESPONSE_TIME_SLOTS: usize = 6;

    /// Default output file name
    ///
    /// The cluster summary is written in JSON format for easy parsing and
    /// analysis by external tools.
    pub const OUTPUT_FILE: &str = "cluster_summary.json";
}
