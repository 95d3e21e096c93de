use crate::algorithms::SchedulingStrategy;
use crate::clock::SimClock;
use crate::pool::ProcessPool;
use crate::state::ExecutedSegment;

/// First-come-first-serve: fixed arrival order, no preemption.
#[derive(Clone, Copy, Debug, Default)]
pub struct FcfsStrategy;

impl SchedulingStrategy for FcfsStrategy {
    fn schedule(&self, pool: &ProcessPool) -> Vec<ExecutedSegment> {
        let mut clock = SimClock::default();
        pool.arrival_order()
            .into_iter()
            .map(|idx| {
                let process = pool.get(idx);
                clock.wait_for(process.arrival_time);
                clock.execute(process, process.burst_time)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::test_support::{processes, spans};

    #[test]
    fn runs_in_arrival_order() {
        let input = processes(&[("A", 0, 5, 1), ("B", 1, 3, 1), ("C", 2, 8, 1)]);
        let timeline = FcfsStrategy.schedule(&ProcessPool::new(&input));
        assert_eq!(
            spans(&timeline),
            vec![("A", 0, 5), ("B", 5, 8), ("C", 8, 16)]
        );
    }

    #[test]
    fn equal_arrivals_keep_input_order() {
        let input = processes(&[("late", 3, 1, 1), ("x", 0, 2, 1), ("y", 0, 1, 1)]);
        let timeline = FcfsStrategy.schedule(&ProcessPool::new(&input));
        assert_eq!(
            spans(&timeline),
            vec![("x", 0, 2), ("y", 2, 3), ("late", 3, 4)]
        );
    }

    #[test]
    fn leaves_gap_when_cpu_runs_dry() {
        let input = processes(&[("a", 0, 2, 1), ("b", 6, 1, 1)]);
        let timeline = FcfsStrategy.schedule(&ProcessPool::new(&input));
        assert_eq!(spans(&timeline), vec![("a", 0, 2), ("b", 6, 7)]);
    }
}
