use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use std::fmt::Write;

use crate::error::{Error, Result};
use crate::models::{AlgoConfig, Process};
use crate::state::{ScheduleResult, SimulationReport};

pub trait Formatter {
    fn write(&self, report: &SimulationReport) -> Result<String>;
}

/// Metadata, timeline with idle gaps, per-process metrics and summary.
pub struct HumanFormatter;

/// Metadata and summary only.
pub struct SummaryFormatter;

/// The export document: algorithm, input processes, result and timestamp.
pub struct JsonFormatter;

impl Formatter for HumanFormatter {
    fn write(&self, report: &SimulationReport) -> Result<String> {
        let mut out = String::new();
        write_metadata(&mut out, report);

        out.push_str("Timeline:\n");
        let mut cursor = 0;
        for segment in &report.result.timeline {
            if segment.start_time > cursor {
                let _ = writeln!(out, "[{}, {}) idle", cursor, segment.start_time);
            }
            let _ = writeln!(
                out,
                "[{}, {}) {}",
                segment.start_time, segment.end_time, segment.name
            );
            cursor = segment.end_time;
        }

        out.push_str("Processes:\n");
        for metric in &report.result.process_metrics {
            let _ = writeln!(
                out,
                "{}: completion {}, turnaround {}, waiting {}",
                metric.name, metric.completion_time, metric.turnaround_time, metric.waiting_time
            );
        }

        write_summary(&mut out, &report.result);
        Ok(out)
    }
}

impl Formatter for SummaryFormatter {
    fn write(&self, report: &SimulationReport) -> Result<String> {
        let mut out = String::new();
        write_metadata(&mut out, report);
        write_summary(&mut out, &report.result);
        Ok(out)
    }
}

#[derive(Serialize)]
struct ExportDocument<'a> {
    algorithm: AlgoConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    quantum: Option<u64>,
    processes: &'a [Process],
    result: &'a ScheduleResult,
    timestamp: String,
}

impl Formatter for JsonFormatter {
    fn write(&self, report: &SimulationReport) -> Result<String> {
        let document = ExportDocument {
            algorithm: report.metadata.algo,
            quantum: report.metadata.quantum,
            processes: &report.processes,
            result: &report.result,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        to_json(&document)
    }
}

#[derive(Serialize)]
struct ComparisonRow {
    algorithm: AlgoConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    quantum: Option<u64>,
    avg_waiting_time: f64,
    avg_turnaround_time: f64,
    total_time: u64,
    context_switches: usize,
}

/// One line per algorithm plus the algorithm with the lowest average wait.
pub fn write_comparison(reports: &[SimulationReport]) -> String {
    let mut out = String::from("Comparison:\n");
    for report in reports {
        let label = match report.metadata.quantum {
            Some(quantum) => format!("{} (quantum {})", report.metadata.algo, quantum),
            None => report.metadata.algo.to_string(),
        };
        let result = &report.result;
        let _ = writeln!(
            out,
            "{}: avg waiting {:.2}, avg turnaround {:.2}, total {}, switches {}",
            label,
            result.avg_waiting_time,
            result.avg_turnaround_time,
            result.total_time,
            result.context_switches
        );
    }

    let best = reports.iter().reduce(|best, report| {
        if report.result.avg_waiting_time < best.result.avg_waiting_time {
            report
        } else {
            best
        }
    });
    if let Some(best) = best {
        let _ = writeln!(out, "Lowest avg waiting time: {}", best.metadata.algo);
    }
    out
}

pub fn write_comparison_json(reports: &[SimulationReport]) -> Result<String> {
    let rows: Vec<ComparisonRow> = reports
        .iter()
        .map(|report| ComparisonRow {
            algorithm: report.metadata.algo,
            quantum: report.metadata.quantum,
            avg_waiting_time: report.result.avg_waiting_time,
            avg_turnaround_time: report.result.avg_turnaround_time,
            total_time: report.result.total_time,
            context_switches: report.result.context_switches,
        })
        .collect();
    to_json(&rows)
}

fn write_metadata(out: &mut String, report: &SimulationReport) {
    out.push_str("Metadata:\n");
    let _ = writeln!(out, "algo: {}", report.metadata.algo);
    if let Some(quantum) = report.metadata.quantum {
        let _ = writeln!(out, "quantum: {}", quantum);
    }
    let _ = writeln!(out, "processes: {}", report.metadata.process_count);
}

fn write_summary(out: &mut String, result: &ScheduleResult) {
    out.push_str("Summary:\n");
    let _ = writeln!(out, "avg_waiting_time: {:.2}", result.avg_waiting_time);
    let _ = writeln!(out, "avg_turnaround_time: {:.2}", result.avg_turnaround_time);
    let _ = writeln!(out, "total_time: {}", result.total_time);
    let _ = writeln!(out, "cpu_utilization: {:.2}%", result.cpu_utilization_pct);
    let _ = writeln!(out, "context_switches: {}", result.context_switches);
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map(|json| json + "\n")
        .map_err(|err| Error::Output(format!("failed to write JSON: {}", err)))
}
