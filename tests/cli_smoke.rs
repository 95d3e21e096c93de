use predicates::str::diff;

#[test]
fn summary_fcfs_is_stable() {
    let expected = concat!(
        "Metadata:\n",
        "algo: fcfs\n",
        "processes: 3\n",
        "Summary:\n",
        "avg_waiting_time: 3.33\n",
        "avg_turnaround_time: 8.67\n",
        "total_time: 16\n",
        "cpu_utilization: 100.00%\n",
        "context_switches: 2\n",
    );

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("cpu-sched-sim");
    cmd.args([
        "--algo",
        "fcfs",
        "--processes",
        "A:0:5,B:1:3,C:2:8",
        "--summary",
    ]);
    cmd.assert().success().stdout(diff(expected));
}

#[test]
fn full_output_round_robin_interleaves_slices() {
    let expected = concat!(
        "Metadata:\n",
        "algo: round-robin\n",
        "quantum: 2\n",
        "processes: 3\n",
        "Timeline:\n",
        "[0, 2) A\n",
        "[2, 4) B\n",
        "[4, 5) C\n",
        "[5, 7) A\n",
        "[7, 8) B\n",
        "[8, 9) A\n",
        "Processes:\n",
        "C: completion 5, turnaround 3, waiting 2\n",
        "B: completion 8, turnaround 7, waiting 4\n",
        "A: completion 9, turnaround 9, waiting 4\n",
        "Summary:\n",
        "avg_waiting_time: 3.33\n",
        "avg_turnaround_time: 6.33\n",
        "total_time: 9\n",
        "cpu_utilization: 100.00%\n",
        "context_switches: 5\n",
    );

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("cpu-sched-sim");
    cmd.args([
        "--format",
        "human",
        "--algo",
        "round-robin",
        "--quantum",
        "2",
        "--process",
        "A:0:5",
        "--process",
        "B:1:3",
        "--process",
        "C:2:1",
    ]);
    cmd.assert().success().stdout(diff(expected));
}

#[test]
fn full_output_sjf_picks_shortest_ready_job() {
    let expected = concat!(
        "Metadata:\n",
        "algo: sjf\n",
        "processes: 4\n",
        "Timeline:\n",
        "[0, 7) A\n",
        "[7, 8) C\n",
        "[8, 12) B\n",
        "[12, 16) D\n",
        "Processes:\n",
        "A: completion 7, turnaround 7, waiting 0\n",
        "C: completion 8, turnaround 4, waiting 3\n",
        "B: completion 12, turnaround 10, waiting 6\n",
        "D: completion 16, turnaround 11, waiting 7\n",
        "Summary:\n",
        "avg_waiting_time: 4.00\n",
        "avg_turnaround_time: 8.00\n",
        "total_time: 16\n",
        "cpu_utilization: 100.00%\n",
        "context_switches: 3\n",
    );

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("cpu-sched-sim");
    cmd.args([
        "run",
        "--algo",
        "sjf",
        "--processes",
        "A:0:7,B:2:4,C:4:1,D:5:4",
    ]);
    cmd.assert().success().stdout(diff(expected));
}

#[test]
fn full_output_priority_runs_urgent_first() {
    let expected = concat!(
        "Metadata:\n",
        "algo: priority\n",
        "processes: 3\n",
        "Timeline:\n",
        "[0, 2) c\n",
        "[2, 6) a\n",
        "[6, 7) b\n",
        "Processes:\n",
        "c: completion 2, turnaround 2, waiting 0\n",
        "a: completion 6, turnaround 6, waiting 2\n",
        "b: completion 7, turnaround 7, waiting 6\n",
        "Summary:\n",
        "avg_waiting_time: 2.67\n",
        "avg_turnaround_time: 5.00\n",
        "total_time: 7\n",
        "cpu_utilization: 100.00%\n",
        "context_switches: 2\n",
    );

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("cpu-sched-sim");
    cmd.args([
        "--algo",
        "priority",
        "--processes",
        "a:0:4:2,b:0:1:2,c:0:2:1",
    ]);
    cmd.assert().success().stdout(diff(expected));
}

#[test]
fn late_arrival_starts_with_idle_gap() {
    for algo in ["fcfs", "sjf", "rr", "priority"] {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("cpu-sched-sim");
        cmd.args(["--algo", algo, "--quantum", "5", "--processes", "A:5:3"]);
        let assert = cmd.assert().success();
        let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
        assert!(
            stdout.contains("Timeline:\n[0, 5) idle\n[5, 8) A\n"),
            "{}: {}",
            algo,
            stdout
        );
        assert!(stdout.contains("cpu_utilization: 37.50%\n"));
    }
}

#[test]
fn json_output_is_an_export_document() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("cpu-sched-sim");
    cmd.args([
        "--algo",
        "rr",
        "--processes",
        "A:0:5,B:1:3,C:2:1",
        "--format",
        "json",
    ]);
    let assert = cmd.assert().success();
    let value: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();

    assert_eq!(value["algorithm"], "round-robin");
    assert_eq!(value["quantum"], 2);
    assert_eq!(value["processes"][0]["id"], 1);
    assert_eq!(value["processes"][0]["name"], "A");
    assert_eq!(value["result"]["timeline"].as_array().unwrap().len(), 6);
    assert_eq!(value["result"]["total_time"], 9);
    assert!(value["timestamp"].as_str().unwrap().contains('T'));
}

#[test]
fn verbose_logging_goes_to_stderr() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("cpu-sched-sim");
    cmd.args(["-v", "--algo", "fcfs", "--processes", "A:2:1", "--summary"]);
    cmd.assert()
        .success()
        .stdout(predicates::str::starts_with("Metadata:\n"))
        .stderr(predicates::str::contains("dispatch"));
}
