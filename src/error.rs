//! Typed errors for the aggregation engine.
//!
//! Merge failures are not recoverable locally: a shape mismatch between two
//! latency profiles means the workers were run with inconsistent bucket
//! configuration, and continuing would produce a plausible-looking but wrong
//! summary. Callers are expected to propagate these with `?` and abort the
//! aggregation run.

use thiserror::Error;

/// Errors produced while combining or aggregating task results.
#[derive(Debug, Error)]
pub enum AggregateError {
    /// Two extremal-latency profiles with different slot counts were combined.
    ///
    /// All workers in a run must share the same response-time bucket
    /// configuration; this surfaces as a configuration-inconsistency error.
    #[error(
        "response time profile shape mismatch: expected {expected} slots, got {actual}"
    )]
    ShapeMismatch { expected: usize, actual: usize },

    /// The aggregator was handed zero task results.
    ///
    /// Surfaced as a usage error rather than an empty summary.
    #[error("no task results to aggregate")]
    EmptyInput,

    /// Two task results claimed the same node identifier.
    ///
    /// A duplicate id means two workers reported as the same node; merging
    /// both while only one remains visible per-node would silently skew the
    /// summary, so this fails fast.
    #[error("duplicate node identifier: {0}")]
    DuplicateNodeId(String),

    /// Failure reading or writing a result file.
    #[error("result file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Failure serializing or deserializing a result object.
    #[error("result serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
