use crate::algorithms::{dispatch_non_preemptive, SchedulingStrategy};
use crate::pool::ProcessPool;
use crate::state::ExecutedSegment;

/// Non-preemptive priority scheduling; a lower number is more urgent.
///
/// Processes with a large priority number can starve while more urgent
/// work keeps arriving.
#[derive(Clone, Copy, Debug, Default)]
pub struct PriorityStrategy;

impl SchedulingStrategy for PriorityStrategy {
    fn schedule(&self, pool: &ProcessPool) -> Vec<ExecutedSegment> {
        dispatch_non_preemptive(pool, |process| process.priority)
    }
}
