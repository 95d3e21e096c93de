use crate::algorithms::{dispatch_non_preemptive, SchedulingStrategy};
use crate::pool::ProcessPool;
use crate::state::ExecutedSegment;

/// Non-preemptive shortest-job-first.
///
/// The choice is only revisited when the running process finishes; a
/// shorter job arriving mid-burst waits.
#[derive(Clone, Copy, Debug, Default)]
pub struct SjfStrategy;

impl SchedulingStrategy for SjfStrategy {
    fn schedule(&self, pool: &ProcessPool) -> Vec<ExecutedSegment> {
        dispatch_non_preemptive(pool, |process| process.burst_time)
    }
}
