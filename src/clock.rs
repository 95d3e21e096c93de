use tracing::debug;

use crate::models::Process;
use crate::state::ExecutedSegment;

/// Simulated single-core clock shared by every scheduling policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SimClock {
    now: u64,
}

impl SimClock {
    pub fn now(&self) -> u64 {
        self.now
    }

    /// A process is eligible once its arrival time has been reached.
    pub fn has_arrived(&self, process: &Process) -> bool {
        process.arrival_time <= self.now
    }

    /// Jumps to the earliest pending arrival when nothing is ready.
    ///
    /// Only arrivals strictly after `now` are considered, so the clock always
    /// moves forward. Returns the new time, or `None` when there is no future
    /// arrival to wait for.
    pub fn skip_idle<I>(&mut self, pending_arrivals: I) -> Option<u64>
    where
        I: IntoIterator<Item = u64>,
    {
        let next = pending_arrivals
            .into_iter()
            .filter(|&arrival| arrival > self.now)
            .min()?;
        debug!(from = self.now, to = next, "cpu idle");
        self.now = next;
        Some(next)
    }

    /// Non-preemptive in-order dispatch: start no earlier than `arrival`.
    pub fn wait_for(&mut self, arrival: u64) {
        if arrival > self.now {
            debug!(from = self.now, to = arrival, "cpu idle");
            self.now = arrival;
        }
    }

    /// Runs `process` for `duration` units starting now.
    ///
    /// Validation bounds every schedule by the latest arrival plus total
    /// burst, so the end time cannot overflow.
    pub fn execute(&mut self, process: &Process, duration: u64) -> ExecutedSegment {
        let start_time = self.now;
        let end_time = start_time + duration;
        debug!(
            process = %process.name,
            start = start_time,
            end = end_time,
            "dispatch"
        );
        self.now = end_time;
        ExecutedSegment {
            process_id: process.id,
            name: process.name.clone(),
            color: process.color.clone(),
            start_time,
            end_time,
        }
    }
}
