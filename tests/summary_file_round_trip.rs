use bench_aggregator::{
    aggregate, BaseParameters, BenchParameters, Summary, TaskResult,
};
use tempfile::tempdir;

fn finalized_result(id: &str, num_success: u64) -> TaskResult {
    let base = BaseParameters {
        id: id.to_string(),
        cluster: true,
        start_ms: 1_700_000_000_000,
        in_process: false,
    };
    let mut result = TaskResult::new(base, BenchParameters::default(), 3);
    result.record_start_ms = 1_700_000_005_000;
    result.end_ms = 1_700_000_065_000;
    result.duration_ms = 60_000;
    result.increment_num_success(num_success);
    result.record_response_time(0, 1_500);
    result.record_response_time(2, 9_000);
    result.method_statistics_mut("GetStatus").num_success += num_success / 2;
    result.add_error(format!("transient failure on {}", id));
    result
}

#[test]
fn task_result_survives_a_file_round_trip() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("node-a.json");

    let original = finalized_result("node-a", 42);
    original.write_json_file(&path).expect("write task result");

    let loaded = TaskResult::from_json_file(&path).expect("load task result");

    // lossless round trip is what makes merging after transport correct
    assert_eq!(loaded, original);
}

#[test]
fn coordinator_flow_from_files_to_summary_file() {
    let dir = tempdir().expect("create temp dir");

    // Workers write their finalized results to disk, one file per node.
    let mut loaded = Vec::new();
    for (id, successes) in [("node-a", 40u64), ("node-b", 60u64)] {
        let path = dir.path().join(format!("{}.json", id));
        finalized_result(id, successes)
            .write_json_file(&path)
            .expect("write node result");
        loaded.push(TaskResult::from_json_file(&path).expect("load node result"));
    }

    let summary = aggregate(loaded).expect("aggregate node results");
    assert_eq!(summary.cluster().statistics.num_success, 100);
    assert_eq!(summary.node_count(), 2);

    let summary_path = dir.path().join("cluster_summary.json");
    summary
        .write_json_file(&summary_path)
        .expect("write summary");

    let contents = std::fs::read_to_string(&summary_path).expect("read summary back");
    let reloaded: Summary = serde_json::from_str(&contents).expect("parse summary");
    assert_eq!(reloaded, summary);
    assert_eq!(reloaded.node("node-b").unwrap().statistics.num_success, 60);
}
