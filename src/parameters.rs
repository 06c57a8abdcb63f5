//! Configuration snapshots carried inside each task result.
//!
//! These are immutable descriptions of how a task was run. They identify
//! the owning node and travel with the result through serialization, so a
//! report can always say which node produced which numbers and under what
//! settings. The aggregation engine itself only reads
//! [`BaseParameters::id`]; everything else is reporting payload.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Parameters shared by every benchmark task regardless of workload.
///
/// `id` is the stable node identifier used to key the per-node result map
/// during aggregation; it must be unique across the participating nodes
/// of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseParameters {
    /// Stable identifier of the node that produced the result.
    pub id: String,

    /// Whether the task ran as part of a distributed cluster run.
    pub cluster: bool,

    /// Wall-clock start of the task in epoch milliseconds.
    pub start_ms: i64,

    /// Whether the task ran in-process with the coordinator.
    pub in_process: bool,
}

impl Default for BaseParameters {
    fn default() -> Self {
        Self {
            id: "local".to_string(),
            cluster: false,
            start_ms: 0,
            in_process: true,
        }
    }
}

/// Workload-specific parameters for one benchmark task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchParameters {
    /// Name of the operation mix the task executed.
    pub operation: String,

    /// Number of concurrent worker threads the task ran.
    pub threads: usize,

    /// Measured window length requested for the task.
    pub duration: Duration,

    /// Warmup period excluded from recorded measurements.
    pub warmup: Duration,

    /// Target the workload was issued against (path, endpoint, ...).
    pub target: String,
}

impl Default for BenchParameters {
    fn default() -> Self {
        Self {
            operation: "Noop".to_string(),
            threads: 1,
            duration: Duration::from_secs(30),
            warmup: Duration::from_secs(5),
            target: String::new(),
        }
    }
}
