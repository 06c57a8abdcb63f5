//! # Bench Aggregator - Coordinator Entry Point
//!
//! This is the coordinator shell around the aggregation engine. Remote nodes
//! ship their task results as JSON files (the wire transport that delivers
//! them is out of scope here); this binary performs these key operations:
//!
//! 1. **Initialize logging**: colorized output via tracing
//! 2. **Parse arguments**: input result files and output path
//! 3. **Load task results**: deserialize one `TaskResult` per node
//! 4. **Aggregate**: fold all node results into a cluster `Summary`
//! 5. **Report**: write the summary JSON and log per-node headlines
//!
//! ## Error Handling
//!
//! The binary uses `anyhow::Result` with context throughout. Any merge
//! failure (mismatched latency-profile shapes, duplicate node identifiers)
//! aborts the run: a failed aggregation must not produce a plausible-looking
//! but wrong summary. Errors that nodes recorded *during* benchmarking are
//! data, not failures - they are logged as warnings and carried into the
//! summary untouched.

use anyhow::{Context, Result};
use bench_aggregator::{aggregate, cli::Args, logging::ColorizedFormatter, TaskResult};
use clap::Parser;
use tracing::{info, warn};

fn main() -> Result<()> {
    // Log level is controlled via RUST_LOG, e.g.
    // RUST_LOG=debug bench-aggregator node0.json node1.json
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .event_format(ColorizedFormatter)
        .init();

    let args = Args::parse();

    info!("Starting Bench Aggregator v{}", bench_aggregator::VERSION);
    info!("Aggregating {} node result file(s)", args.inputs.len());

    // Load one finalized task result per participating node. A file that
    // fails to parse aborts the run rather than silently shrinking the input
    // set, which would skew the summary.
    let mut results = Vec::with_capacity(args.inputs.len());
    for path in &args.inputs {
        let result = TaskResult::from_json_file(path)
            .with_context(|| format!("failed to load task result from {:?}", path))?;
        info!(
            "Loaded result from node {} ({} successes, {} errors)",
            result.node_id(),
            result.statistics.num_success,
            result.errors.len()
        );
        results.push(result);
    }

    let summary = aggregate(results).context("aggregation failed")?;

    // Per-node headlines; full detail lives in the summary JSON.
    for (id, node) in &summary.nodes {
        info!(
            "  {}: {} successes over {} method(s), {} error(s)",
            id,
            node.statistics.num_success,
            node.statistics_per_method.len(),
            node.errors.len()
        );
        if args.show_node_errors {
            for error in &node.errors {
                warn!("    {}: {}", id, error);
            }
        }
    }

    if summary.total_error_count() > 0 {
        warn!(
            "{} benchmark error(s) reported across {} node(s)",
            summary.total_error_count(),
            summary.node_count()
        );
    }

    summary
        .write_json_file(&args.output_file)
        .with_context(|| format!("failed to write summary to {:?}", args.output_file))?;

    info!(
        "Cluster total: {} successes across {} node(s)",
        summary.cluster().statistics.num_success,
        summary.node_count()
    );
    Ok(())
}
