use std::collections::VecDeque;
use tracing::trace;

use crate::algorithms::SchedulingStrategy;
use crate::clock::SimClock;
use crate::pool::ProcessPool;
use crate::state::ExecutedSegment;

/// Preemptive round-robin with a fixed time quantum.
#[derive(Clone, Copy, Debug)]
pub struct RoundRobinStrategy {
    quantum: u64,
}

impl RoundRobinStrategy {
    /// `quantum` is validated by the engine; a zero here is clamped to 1.
    pub fn new(quantum: u64) -> Self {
        Self {
            quantum: quantum.max(1),
        }
    }
}

impl SchedulingStrategy for RoundRobinStrategy {
    fn schedule(&self, pool: &ProcessPool) -> Vec<ExecutedSegment> {
        let mut run = RoundRobinRun::new(pool, self.quantum);
        loop {
            match run.step() {
                Step::Idle => {}
                Step::Preempted(idx) => {
                    trace!(
                        process = %pool.get(idx).name,
                        remaining = run.remaining[idx],
                        "preempted"
                    );
                }
                Step::Completed(idx) => {
                    trace!(
                        process = %pool.get(idx).name,
                        at = run.clock.now(),
                        "completed"
                    );
                }
                Step::Finished => break,
            }
        }
        run.timeline
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    /// The CPU sat idle until the next arrival.
    Idle,
    /// The process used its slice and went back to the tail of the queue.
    Preempted(usize),
    /// The process ran out its remaining burst.
    Completed(usize),
    Finished,
}

struct RoundRobinRun<'p, 'a> {
    pool: &'p ProcessPool<'a>,
    quantum: u64,
    clock: SimClock,
    arrivals: Vec<usize>,
    next_arrival: usize,
    ready: VecDeque<usize>,
    remaining: Vec<u64>,
    timeline: Vec<ExecutedSegment>,
}

impl<'p, 'a> RoundRobinRun<'p, 'a> {
    fn new(pool: &'p ProcessPool<'a>, quantum: u64) -> Self {
        Self {
            pool,
            quantum,
            clock: SimClock::default(),
            arrivals: pool.arrival_order(),
            next_arrival: 0,
            ready: VecDeque::with_capacity(pool.len()),
            remaining: pool.iter().map(|(_, process)| process.burst_time).collect(),
            timeline: Vec::new(),
        }
    }

    /// Moves every process that has arrived by now onto the ready queue.
    ///
    /// This is the only place processes enter the queue for the first time.
    /// It runs before each dispatch and again right after a slice ends, so a
    /// process arriving at the instant a slice finishes is queued ahead of
    /// the process that was just preempted.
    fn admit_arrivals(&mut self) {
        while let Some(&idx) = self.arrivals.get(self.next_arrival) {
            if !self.clock.has_arrived(self.pool.get(idx)) {
                break;
            }
            self.ready.push_back(idx);
            self.next_arrival += 1;
        }
    }

    fn step(&mut self) -> Step {
        self.admit_arrivals();

        let Some(idx) = self.ready.pop_front() else {
            let pending = self.arrivals[self.next_arrival..]
                .iter()
                .map(|&idx| self.pool.get(idx).arrival_time);
            return match self.clock.skip_idle(pending) {
                Some(_) => Step::Idle,
                None => Step::Finished,
            };
        };

        let process = self.pool.get(idx);
        let slice = self.quantum.min(self.remaining[idx]);
        self.timeline.push(self.clock.execute(process, slice));
        self.remaining[idx] -= slice;

        self.admit_arrivals();

        if self.remaining[idx] > 0 {
            self.ready.push_back(idx);
            Step::Preempted(idx)
        } else {
            Step::Completed(idx)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::test_support::{processes, spans};

    #[test]
    fn alternates_slices_between_ready_processes() {
        let input = processes(&[("A", 0, 5, 1), ("B", 1, 3, 1), ("C", 2, 1, 1)]);
        let timeline = RoundRobinStrategy::new(2).schedule(&ProcessPool::new(&input));
        assert_eq!(
            spans(&timeline),
            vec![
                ("A", 0, 2),
                ("B", 2, 4),
                ("C", 4, 5),
                ("A", 5, 7),
                ("B", 7, 8),
                ("A", 8, 9),
            ]
        );
    }

    #[test]
    fn arrival_at_slice_end_is_queued_before_preempted_process() {
        let input = processes(&[("A", 0, 4, 1), ("B", 2, 2, 1)]);
        let timeline = RoundRobinStrategy::new(2).schedule(&ProcessPool::new(&input));
        assert_eq!(
            spans(&timeline),
            vec![("A", 0, 2), ("B", 2, 4), ("A", 4, 6)]
        );
    }

    #[test]
    fn lone_process_keeps_cpu_across_slices() {
        let input = processes(&[("A", 0, 5, 1)]);
        let timeline = RoundRobinStrategy::new(2).schedule(&ProcessPool::new(&input));
        assert_eq!(
            spans(&timeline),
            vec![("A", 0, 2), ("A", 2, 4), ("A", 4, 5)]
        );
    }

    #[test]
    fn idles_until_next_arrival() {
        let input = processes(&[("A", 1, 1, 1), ("B", 5, 3, 1)]);
        let timeline = RoundRobinStrategy::new(4).schedule(&ProcessPool::new(&input));
        assert_eq!(spans(&timeline), vec![("A", 1, 2), ("B", 5, 8)]);
    }

    #[test]
    fn step_reports_state_transitions() {
        let input = processes(&[("A", 2, 3, 1)]);
        let pool = ProcessPool::new(&input);
        let mut run = RoundRobinRun::new(&pool, 2);
        assert_eq!(run.step(), Step::Idle);
        assert_eq!(run.step(), Step::Preempted(0));
        assert_eq!(run.step(), Step::Completed(0));
        assert_eq!(run.step(), Step::Finished);
    }

    #[test]
    fn zero_quantum_is_clamped() {
        let input = processes(&[("A", 0, 2, 1), ("B", 0, 1, 1)]);
        let timeline = RoundRobinStrategy::new(0).schedule(&ProcessPool::new(&input));
        assert_eq!(spans(&timeline), vec![("A", 0, 1), ("B", 1, 2), ("A", 2, 3)]);
    }
}
