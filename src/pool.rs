use crate::models::Process;

/// Read-only arena over a validated process list.
///
/// Algorithms refer to processes by their index in the input slice, which
/// doubles as the "original input order" used for tie-breaks. Per-run
/// bookkeeping (pending sets, remaining time, ready queues) lives with the
/// algorithm and is keyed by these indices.
#[derive(Clone, Copy, Debug)]
pub struct ProcessPool<'a> {
    processes: &'a [Process],
}

impl<'a> ProcessPool<'a> {
    pub fn new(processes: &'a [Process]) -> Self {
        Self { processes }
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    pub fn get(&self, idx: usize) -> &'a Process {
        &self.processes[idx]
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &'a Process)> {
        self.processes.iter().enumerate()
    }

    /// Indices ordered by arrival time; equal arrivals keep input order.
    pub fn arrival_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.processes.len()).collect();
        order.sort_by_key(|&idx| self.processes[idx].arrival_time);
        order
    }
}
