use serde::{Deserialize, Serialize};

use crate::models::{AlgoConfig, Process};

/// One contiguous stretch of CPU time given to a single process.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ExecutedSegment {
    pub process_id: usize,
    pub name: String,
    pub color: String,
    pub start_time: u64,
    pub end_time: u64,
}

impl ExecutedSegment {
    pub fn duration(&self) -> u64 {
        self.end_time - self.start_time
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ProcessMetric {
    pub process_id: usize,
    pub name: String,
    pub completion_time: u64,
    pub waiting_time: u64,
    pub turnaround_time: u64,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ScheduleResult {
    pub timeline: Vec<ExecutedSegment>,
    pub process_metrics: Vec<ProcessMetric>,
    pub avg_waiting_time: f64,
    pub avg_turnaround_time: f64,
    pub total_time: u64,
    pub cpu_utilization_pct: f64,
    pub context_switches: usize,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct RunMetadata {
    pub algo: AlgoConfig,
    pub quantum: Option<u64>,
    pub process_count: usize,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct SimulationReport {
    pub metadata: RunMetadata,
    pub processes: Vec<Process>,
    pub result: ScheduleResult,
}
