use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{Limits, ProcessConfig};

/// Shape of a randomly generated process set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkloadSpec {
    pub count: usize,
    pub max_arrival_time: u64,
    pub max_burst_time: u64,
    pub max_priority: u32,
}

impl Default for WorkloadSpec {
    fn default() -> Self {
        Self {
            count: 5,
            max_arrival_time: 10,
            max_burst_time: 10,
            max_priority: 5,
        }
    }
}

impl WorkloadSpec {
    /// Limits wide enough to accept anything this workload can produce.
    pub fn limits(&self) -> Limits {
        let defaults = Limits::default();
        Limits {
            max_processes: self.count.max(defaults.max_processes),
            max_arrival_time: self.max_arrival_time.max(defaults.max_arrival_time),
            max_burst_time: self.max_burst_time.max(defaults.max_burst_time),
            max_priority: self.max_priority.max(defaults.max_priority),
            max_name_len: defaults.max_name_len,
        }
    }
}

/// Draws `spec.count` processes named `P1..Pn` from a seeded generator.
///
/// The same workload and seed always produce the same list. Burst times and
/// priorities are at least 1 even when the configured maximum is 0.
pub fn random_processes(spec: &WorkloadSpec, seed: u64) -> Vec<ProcessConfig> {
    let mut rng = StdRng::seed_from_u64(seed);
    (1..=spec.count)
        .map(|n| ProcessConfig {
            name: format!("P{}", n),
            arrival_time: rng.gen_range(0..=spec.max_arrival_time),
            burst_time: rng.gen_range(1..=spec.max_burst_time.max(1)),
            priority: rng.gen_range(1..=spec.max_priority.max(1)),
            color: None,
        })
        .collect()
}
