mod fcfs;
mod priority;
mod round_robin;
mod sjf;

use crate::clock::SimClock;
use crate::models::{AlgoConfig, Process};
use crate::pool::ProcessPool;
use crate::state::ExecutedSegment;

pub use fcfs::FcfsStrategy;
pub use priority::PriorityStrategy;
pub use round_robin::RoundRobinStrategy;
pub use sjf::SjfStrategy;

/// A dispatch policy that runs every process in the pool to completion.
///
/// Implementations return the timeline ordered by start time, with no
/// overlapping segments and the full burst of every process accounted for.
pub trait SchedulingStrategy {
    fn schedule(&self, pool: &ProcessPool) -> Vec<ExecutedSegment>;
}

pub fn build_strategy(algo: AlgoConfig, quantum: u64) -> Box<dyn SchedulingStrategy> {
    match algo {
        AlgoConfig::Fcfs => Box::new(FcfsStrategy),
        AlgoConfig::Sjf => Box::new(SjfStrategy),
        AlgoConfig::RoundRobin => Box::new(RoundRobinStrategy::new(quantum)),
        AlgoConfig::Priority => Box::new(PriorityStrategy),
    }
}

/// Shared loop for the non-preemptive selection policies.
///
/// Among arrived processes the one with the smallest `key` runs to
/// completion; ties go to the earliest arrival, then to input order.
pub(crate) fn dispatch_non_preemptive<K, F>(pool: &ProcessPool, key: F) -> Vec<ExecutedSegment>
where
    K: Ord,
    F: Fn(&Process) -> K,
{
    let mut clock = SimClock::default();
    let mut pending: Vec<usize> = (0..pool.len()).collect();
    let mut timeline = Vec::with_capacity(pool.len());

    while !pending.is_empty() {
        let selected = pending
            .iter()
            .enumerate()
            .filter(|&(_, &idx)| clock.has_arrived(pool.get(idx)))
            .min_by_key(|&(_, &idx)| {
                let process = pool.get(idx);
                (key(process), process.arrival_time, idx)
            })
            .map(|(pos, _)| pos);

        let Some(pos) = selected else {
            let arrivals = pending.iter().map(|&idx| pool.get(idx).arrival_time);
            if clock.skip_idle(arrivals).is_none() {
                break;
            }
            continue;
        };

        let process = pool.get(pending.remove(pos));
        timeline.push(clock.execute(process, process.burst_time));
    }

    timeline
}
