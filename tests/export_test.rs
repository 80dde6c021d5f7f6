/*!
 * Export Tests
 * On-disk process table, switch log and summary for complete runs
 */

use cpu_sched_sim::core::errors::ExportError;
use cpu_sched_sim::feed::ProcessFeed;
use cpu_sched_sim::{
    export_outcome, simulate, ExportConfig, FileFeed, ProcessDescriptor, SchedulingPolicy,
    SimulationOutcome, TimeQuantum,
};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

fn workload() -> Vec<ProcessDescriptor> {
    vec![
        ProcessDescriptor::new(1, "P1", 0, 5),
        ProcessDescriptor::new(2, "P2", 1, 3).with_priority(1),
        ProcessDescriptor::new(3, "P3", 2, 1).with_priority(5),
    ]
}

fn fcfs_outcome() -> SimulationOutcome {
    simulate(workload(), SchedulingPolicy::Fcfs, TimeQuantum::default()).unwrap()
}

#[test]
fn test_fcfs_tables_on_disk() {
    let dir = TempDir::new().unwrap();
    let config = ExportConfig::in_dir(dir.path());

    let report = export_outcome(&fcfs_outcome(), &config);
    assert!(report.is_complete());
    assert!(report.summary.is_none());

    let table = fs::read_to_string(&config.process_table).unwrap();
    assert_eq!(
        table,
        "PID,Process Name,Arrival Time,Burst Time,Completion Time,Turnaround Time,Wait Time,Response Time,Priority,State\n\
         1,P1,0,5,5,5,0,0,3,COMPLETED\n\
         2,P2,1,3,8,7,4,4,1,COMPLETED\n\
         3,P3,2,1,9,7,6,6,5,COMPLETED\n"
    );

    let switches = fs::read_to_string(&config.switch_log).unwrap();
    assert_eq!(
        switches,
        "Time,From PID,From Process,To PID,To Process,Reason\n\
         0,-1,IDLE,1,P1,FCFS\n\
         5,1,P1,2,P2,FCFS\n\
         8,2,P2,3,P3,FCFS\n"
    );
}

#[test]
fn test_export_is_repeatable() {
    let dir = TempDir::new().unwrap();
    let config = ExportConfig::in_dir(dir.path()).with_summary(dir.path().join("summary.json"));
    let outcome = simulate(
        workload(),
        SchedulingPolicy::RoundRobin,
        TimeQuantum::new(2).unwrap(),
    )
    .unwrap();

    assert!(export_outcome(&outcome, &config).is_complete());
    let first = (
        fs::read(&config.process_table).unwrap(),
        fs::read(&config.switch_log).unwrap(),
        fs::read(config.summary.as_ref().unwrap()).unwrap(),
    );

    assert!(export_outcome(&outcome, &config).is_complete());
    let second = (
        fs::read(&config.process_table).unwrap(),
        fs::read(&config.switch_log).unwrap(),
        fs::read(config.summary.as_ref().unwrap()).unwrap(),
    );

    assert_eq!(first, second);
}

#[test]
fn test_failed_file_does_not_abort_the_others() {
    let dir = TempDir::new().unwrap();
    let config = ExportConfig {
        process_table: dir.path().join("table.csv"),
        switch_log: dir.path().join("missing").join("switches.csv"),
        summary: Some(dir.path().join("summary.json")),
    };

    let report = export_outcome(&fcfs_outcome(), &config);

    assert!(!report.is_complete());
    assert!(report.process_table.is_ok());
    assert!(report.summary.as_ref().unwrap().is_ok());
    assert!(matches!(
        report.switch_log,
        Err(ExportError::Io { ref path, .. }) if path == &config.switch_log
    ));
    assert_eq!(report.failures().len(), 1);

    assert!(config.process_table.exists());
    assert!(!config.switch_log.exists());
}

#[test]
fn test_summary_document() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("summary.json");
    let config = ExportConfig::in_dir(dir.path()).with_summary(&path);

    let report = export_outcome(&fcfs_outcome(), &config);
    assert!(report.is_complete());

    let doc: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(doc["policy"], "fcfs");
    assert_eq!(doc["final_clock"], 9);
    assert_eq!(doc["statistics"]["context_switches"], 3);
    assert_eq!(doc["switches"][0]["reason"], "FCFS");
    assert!(doc["switches"][0]["from"].is_null());
    assert_eq!(doc["processes"][2]["state"], "COMPLETED");
}

#[test]
fn test_exported_table_feeds_back_in() {
    let dir = TempDir::new().unwrap();
    let config = ExportConfig::in_dir(dir.path());
    assert!(export_outcome(&fcfs_outcome(), &config).is_complete());

    let descriptors = FileFeed::new(&config.process_table)
        .acquire(usize::MAX)
        .unwrap();
    assert_eq!(descriptors, workload());

    let rerun = simulate(descriptors, SchedulingPolicy::Fcfs, TimeQuantum::default()).unwrap();
    assert_eq!(rerun.statistics, fcfs_outcome().statistics);
}
