use clap::Parser;
use std::path::PathBuf;

/// Bench Aggregator - combine per-node benchmark task results into one summary
#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
pub struct Args {
    /// Task result JSON files, one per participating node
    #[clap(required = true, num_args = 1..)]
    pub inputs: Vec<PathBuf>,

    /// Output file for the cluster summary (JSON format)
    #[clap(short = 'o', long, default_value = crate::defaults::OUTPUT_FILE)]
    pub output_file: PathBuf,

    /// Print each node's error list to the log after aggregation
    #[clap(long, default_value_t = false)]
    pub show_node_errors: bool,

    /// Verbose output
    #[clap(short = 'v', long, default_value_t = false)]
    pub verbose: bool,
}
