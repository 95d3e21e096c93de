use std::collections::HashSet;
use tracing::info;

use crate::algorithms::build_strategy;
use crate::error::{Error, Result};
use crate::metrics::summarize;
use crate::models::{
    palette_color, AlgoConfig, Limits, Process, ProcessConfig, SimConfig, DEFAULT_QUANTUM,
};
use crate::pool::ProcessPool;
use crate::state::{RunMetadata, ScheduleResult, SimulationReport};

/// Runs one scheduling policy over `processes`.
///
/// `quantum` only matters for round-robin and defaults to
/// [`DEFAULT_QUANTUM`]. Input is checked against [`Limits::default`] before
/// any simulation work starts; nothing partial is returned on error.
pub fn simulate(
    algo: AlgoConfig,
    processes: &[Process],
    quantum: Option<u64>,
) -> Result<ScheduleResult> {
    simulate_with_limits(algo, processes, quantum, &Limits::default())
}

pub fn simulate_with_limits(
    algo: AlgoConfig,
    processes: &[Process],
    quantum: Option<u64>,
    limits: &Limits,
) -> Result<ScheduleResult> {
    validate_processes(processes, limits)?;
    let quantum = validate_quantum(algo, quantum)?;

    let pool = ProcessPool::new(processes);
    let strategy = build_strategy(algo, quantum);
    let result = summarize(&pool, strategy.schedule(&pool));
    info!(
        algo = %algo,
        processes = processes.len(),
        total_time = result.total_time,
        avg_waiting_time = result.avg_waiting_time,
        "simulation finished"
    );
    Ok(result)
}

pub fn run_simulation(config: &SimConfig) -> Result<SimulationReport> {
    let processes = build_processes(&config.processes);
    run_with_processes(config.algo, processes, config)
}

/// Runs every algorithm against the same process set, in
/// [`AlgoConfig::ALL`] order.
pub fn compare(config: &SimConfig) -> Result<Vec<SimulationReport>> {
    let processes = build_processes(&config.processes);
    AlgoConfig::ALL
        .iter()
        .map(|&algo| run_with_processes(algo, processes.clone(), config))
        .collect()
}

fn run_with_processes(
    algo: AlgoConfig,
    processes: Vec<Process>,
    config: &SimConfig,
) -> Result<SimulationReport> {
    let result = simulate_with_limits(algo, &processes, config.quantum, &config.limits)?;
    Ok(SimulationReport {
        metadata: RunMetadata {
            algo,
            quantum: algo.is_preemptive().then(|| config.effective_quantum()),
            process_count: processes.len(),
        },
        processes,
        result,
    })
}

/// Assigns ids `1..=n` in input order and fills in missing colors.
pub fn build_processes(configs: &[ProcessConfig]) -> Vec<Process> {
    configs
        .iter()
        .enumerate()
        .map(|(idx, process)| Process {
            id: idx + 1,
            name: process.name.trim().to_string(),
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            priority: process.priority,
            color: process
                .color
                .clone()
                .unwrap_or_else(|| palette_color(idx).to_string()),
        })
        .collect()
}

pub fn validate_processes(processes: &[Process], limits: &Limits) -> Result<()> {
    if processes.is_empty() {
        return Err(Error::EmptyProcesses);
    }
    if processes.len() > limits.max_processes {
        return Err(Error::TooManyProcesses {
            count: processes.len(),
            max: limits.max_processes,
        });
    }

    let mut ids = HashSet::new();
    for process in processes {
        if !ids.insert(process.id) {
            return Err(Error::DuplicateProcessId(process.id));
        }
        if process.name.trim().is_empty() {
            return Err(Error::EmptyProcessName);
        }
        if process.name.chars().count() > limits.max_name_len {
            return Err(Error::ProcessNameTooLong {
                name: process.name.clone(),
                max: limits.max_name_len,
            });
        }
        if process.arrival_time > limits.max_arrival_time {
            return Err(Error::ArrivalTimeOutOfRange {
                name: process.name.clone(),
                value: process.arrival_time,
                max: limits.max_arrival_time,
            });
        }
        if process.burst_time == 0 {
            return Err(Error::InvalidBurstTimeValue(process.name.clone()));
        }
        if process.burst_time > limits.max_burst_time {
            return Err(Error::BurstTimeOutOfRange {
                name: process.name.clone(),
                value: process.burst_time,
                max: limits.max_burst_time,
            });
        }
        if process.priority == 0 || process.priority > limits.max_priority {
            return Err(Error::PriorityOutOfRange {
                name: process.name.clone(),
                value: process.priority,
                max: limits.max_priority,
            });
        }
    }

    check_clock_bound(processes)
}

/// Every clock value a schedule can reach is at most the latest arrival plus
/// the sum of all bursts, so that bound has to fit in a `u64`.
fn check_clock_bound(processes: &[Process]) -> Result<()> {
    let total_burst = processes.iter().try_fold(0u64, |total, process| {
        total
            .checked_add(process.burst_time)
            .ok_or_else(|| Error::ClockOverflow {
                name: process.name.clone(),
            })
    })?;
    let Some(latest) = processes.iter().max_by_key(|process| process.arrival_time) else {
        return Ok(());
    };
    match latest.arrival_time.checked_add(total_burst) {
        Some(_) => Ok(()),
        None => Err(Error::ClockOverflow {
            name: latest.name.clone(),
        }),
    }
}

/// Checks a merged config without running it.
pub fn validate_config(config: &SimConfig) -> Result<()> {
    validate_processes(&build_processes(&config.processes), &config.limits)?;
    validate_quantum(config.algo, config.quantum)?;
    Ok(())
}

/// Resolves the quantum for `algo`; only round-robin rejects a zero.
pub fn validate_quantum(algo: AlgoConfig, quantum: Option<u64>) -> Result<u64> {
    let quantum = quantum.unwrap_or(DEFAULT_QUANTUM);
    if algo.is_preemptive() && quantum == 0 {
        return Err(Error::QuantumZero);
    }
    Ok(quantum)
}
