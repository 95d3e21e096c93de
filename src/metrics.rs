use std::collections::HashMap;

use crate::pool::ProcessPool;
use crate::state::{ExecutedSegment, ProcessMetric, ScheduleResult};

/// Reduces a finished timeline into per-process and aggregate metrics.
///
/// A process completes at the end of the segment that exhausts its burst,
/// so `process_metrics` comes out in completion order. Averages are taken
/// over every process in the pool; callers guarantee the pool is non-empty.
pub fn summarize(pool: &ProcessPool, timeline: Vec<ExecutedSegment>) -> ScheduleResult {
    let mut executed = vec![0u64; pool.len()];
    let mut process_metrics = Vec::with_capacity(pool.len());
    let mut busy_time = 0u64;
    let index_by_id: HashMap<usize, usize> =
        pool.iter().map(|(idx, process)| (process.id, idx)).collect();

    for segment in &timeline {
        busy_time += segment.duration();
        let Some(&idx) = index_by_id.get(&segment.process_id) else {
            continue;
        };
        let process = pool.get(idx);
        executed[idx] += segment.duration();
        if executed[idx] == process.burst_time {
            let turnaround_time = segment.end_time - process.arrival_time;
            process_metrics.push(ProcessMetric {
                process_id: process.id,
                name: process.name.clone(),
                completion_time: segment.end_time,
                waiting_time: turnaround_time - process.burst_time,
                turnaround_time,
            });
        }
    }

    let total_time = timeline.last().map_or(0, |segment| segment.end_time);
    let count = pool.len().max(1) as f64;
    let total_waiting: f64 = process_metrics.iter().map(|m| m.waiting_time as f64).sum();
    let total_turnaround: f64 = process_metrics
        .iter()
        .map(|m| m.turnaround_time as f64)
        .sum();
    let cpu_utilization_pct = if total_time == 0 {
        0.0
    } else {
        round_to(busy_time as f64 / total_time as f64 * 100.0, 2)
    };

    ScheduleResult {
        context_switches: context_switches(&timeline),
        timeline,
        process_metrics,
        avg_waiting_time: total_waiting / count,
        avg_turnaround_time: total_turnaround / count,
        total_time,
        cpu_utilization_pct,
    }
}

/// Number of times the CPU moves from one process to a different one.
fn context_switches(timeline: &[ExecutedSegment]) -> usize {
    timeline
        .windows(2)
        .filter(|pair| pair[0].process_id != pair[1].process_id)
        .count()
}

pub(crate) fn round_to(value: f64, decimals: u32) -> f64 {
    if decimals == 0 {
        return value.round();
    }
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}
