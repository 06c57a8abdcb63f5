//! Folding per-node task results into a cluster-wide summary.
//!
//! The aggregator consumes one finalized [`TaskResult`] per participating
//! node and produces a [`Summary`]: a single merged result for the whole
//! cluster, plus a map retaining every node's individual result so reports
//! can show per-node detail (including each node's own error list, which
//! the cross-node merge deliberately leaves alone).
//!
//! The fold is an explicit reduce over owned inputs. The accumulator is
//! seeded with a clone of the first input so that the per-node map always
//! holds pristine, unmerged results; merging never aliases a map entry.

use crate::{error::AggregateError, result::TaskResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info};

/// Final output of an aggregation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// All inputs folded into one cluster-wide result via the
    /// aggregate-only merge.
    pub cluster: TaskResult,

    /// Each node's individual result, unmerged across nodes, keyed by node
    /// identifier. The key set is exactly the set of node ids observed
    /// among the inputs.
    pub nodes: HashMap<String, TaskResult>,
}

impl Summary {
    /// The merged cluster-wide result.
    pub fn cluster(&self) -> &TaskResult {
        &self.cluster
    }

    /// One node's individual result, if that node participated.
    pub fn node(&self, id: &str) -> Option<&TaskResult> {
        self.nodes.get(id)
    }

    /// Number of nodes that contributed to this summary.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total count of errors reported across all nodes.
    ///
    /// Counted over the per-node results; the cluster result's own list only
    /// reflects same-node merging.
    pub fn total_error_count(&self) -> usize {
        self.nodes.values().map(|r| r.errors.len()).sum()
    }

    /// Write this summary to a JSON file.
    pub fn write_json_file(&self, path: &std::path::Path) -> Result<(), AggregateError> {
        info!("Writing cluster summary to {:?}", path);
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Fold a collection of per-node task results into a [`Summary`].
///
/// Each input is recorded in the per-node map under its node identifier and
/// merged into the accumulator with
/// [`TaskResult::merge_aggregate_only`], so the cluster totals reflect every
/// input while each node's errors stay attributed to that node. Because the
/// statistical combinations are commutative and associative, the folded
/// counters are independent of input order; only the last-wins reporting
/// fields (`record_start_ms`, parameter snapshots) depend on it.
///
/// Fails with [`AggregateError::EmptyInput`] on an empty collection and
/// [`AggregateError::DuplicateNodeId`] if two inputs claim the same node.
pub fn aggregate<I>(results: I) -> Result<Summary, AggregateError>
where
    I: IntoIterator<Item = TaskResult>,
{
    let mut nodes: HashMap<String, TaskResult> = HashMap::new();
    let mut cluster: Option<TaskResult> = None;

    for result in results {
        debug!(
            "Folding result from node {} ({} successes, {} errors)",
            result.node_id(),
            result.statistics.num_success,
            result.errors.len()
        );

        match cluster.as_mut() {
            None => cluster = Some(result.clone()),
            Some(acc) => acc.merge_aggregate_only(&result)?,
        }

        let id = result.node_id().to_string();
        if nodes.insert(id.clone(), result).is_some() {
            return Err(AggregateError::DuplicateNodeId(id));
        }
    }

    let cluster = cluster.ok_or(AggregateError::EmptyInput)?;
    info!(
        "Aggregated {} node results: {} total successes",
        nodes.len(),
        cluster.statistics.num_success
    );

    Ok(Summary { cluster, nodes })
}
