use serde::{Deserialize, Serialize};
use std::fmt;

/// Time slice used by round-robin when no quantum is configured.
pub const DEFAULT_QUANTUM: u64 = 2;

/// Display colors assigned by input position when a process has none.
pub const PALETTE: [&str; 6] = [
    "hsl(200, 100%, 50%)",
    "hsl(180, 100%, 50%)",
    "hsl(270, 100%, 60%)",
    "hsl(320, 100%, 50%)",
    "hsl(150, 100%, 50%)",
    "hsl(40, 100%, 50%)",
];

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SimConfig {
    pub algo: AlgoConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantum: Option<u64>,
    pub processes: Vec<ProcessConfig>,
    #[serde(default)]
    pub limits: Limits,
}

impl SimConfig {
    /// Quantum that round-robin will actually use for this config.
    pub fn effective_quantum(&self) -> u64 {
        self.quantum.unwrap_or(DEFAULT_QUANTUM)
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ProcessConfig {
    pub name: String,
    pub arrival_time: u64,
    pub burst_time: u64,
    #[serde(default = "default_priority")]
    pub priority: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// A schedulable unit. Never mutated once a simulation starts.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Process {
    pub id: usize,
    pub name: String,
    pub arrival_time: u64,
    pub burst_time: u64,
    pub priority: u32,
    pub color: String,
}

impl Process {
    pub fn new(id: usize, name: &str, arrival_time: u64, burst_time: u64, priority: u32) -> Self {
        Self {
            id,
            name: name.to_string(),
            arrival_time,
            burst_time,
            priority,
            color: palette_color(id.saturating_sub(1)).to_string(),
        }
    }
}

/// Field bounds enforced before any simulation work begins.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Limits {
    pub max_processes: usize,
    pub max_arrival_time: u64,
    pub max_burst_time: u64,
    pub max_priority: u32,
    pub max_name_len: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_processes: 20,
            max_arrival_time: 1000,
            max_burst_time: 1000,
            max_priority: 100,
            max_name_len: 50,
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum AlgoConfig {
    Fcfs,
    Sjf,
    RoundRobin,
    Priority,
}

impl AlgoConfig {
    pub const ALL: [AlgoConfig; 4] = [
        AlgoConfig::Fcfs,
        AlgoConfig::Sjf,
        AlgoConfig::RoundRobin,
        AlgoConfig::Priority,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            AlgoConfig::Fcfs => "First Come First Serve",
            AlgoConfig::Sjf => "Shortest Job First",
            AlgoConfig::RoundRobin => "Round Robin",
            AlgoConfig::Priority => "Priority Scheduling",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AlgoConfig::Fcfs => "runs processes in arrival order",
            AlgoConfig::Sjf => "runs the shortest ready burst next, without preemption",
            AlgoConfig::RoundRobin => "time-slices ready processes with a fixed quantum",
            AlgoConfig::Priority => "runs the most urgent ready process next, without preemption",
        }
    }

    pub fn is_preemptive(&self) -> bool {
        matches!(self, AlgoConfig::RoundRobin)
    }
}

impl fmt::Display for AlgoConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AlgoConfig::Fcfs => "fcfs",
            AlgoConfig::Sjf => "sjf",
            AlgoConfig::RoundRobin => "round-robin",
            AlgoConfig::Priority => "priority",
        };
        write!(f, "{}", label)
    }
}

pub fn palette_color(position: usize) -> &'static str {
    PALETTE[position % PALETTE.len()]
}

fn default_priority() -> u32 {
    1
}
