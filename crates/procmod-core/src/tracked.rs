use crate::ProcessId;
use std::sync::Mutex;

/// Ordered record of every process id the owning facade launched.
///
/// Entries are appended only by the launcher path, never from enumeration
/// results, and a tracked process exiting on its own does not remove it: the
/// set is not a "still running" view. It is drained exactly once, at module
/// teardown. The mutex serializes access should the host ever call in from
/// more than one thread; entry order beyond launch order carries no meaning.
#[derive(Debug, Default)]
pub struct TrackedProcesses {
    pids: Mutex<Vec<ProcessId>>,
}

impl TrackedProcesses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pid spawned by the owning facade.
    pub fn record(&self, pid: ProcessId) {
        self.pids.lock().unwrap().push(pid);
    }

    /// Point-in-time copy of the tracked pids, in launch order.
    pub fn snapshot(&self) -> Vec<ProcessId> {
        self.pids.lock().unwrap().clone()
    }

    /// Remove and return every tracked pid.
    pub fn drain(&self) -> Vec<ProcessId> {
        std::mem::take(&mut *self.pids.lock().unwrap())
    }

    pub fn contains(&self, pid: ProcessId) -> bool {
        self.pids.lock().unwrap().contains(&pid)
    }

    pub fn len(&self) -> usize {
        self.pids.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_launch_order() {
        let tracked = TrackedProcesses::new();
        tracked.record(ProcessId(30));
        tracked.record(ProcessId(10));
        tracked.record(ProcessId(20));
        assert_eq!(
            tracked.snapshot(),
            vec![ProcessId(30), ProcessId(10), ProcessId(20)]
        );
    }

    #[test]
    fn drain_empties_the_set() {
        let tracked = TrackedProcesses::new();
        tracked.record(ProcessId(1));
        tracked.record(ProcessId(2));
        let drained = tracked.drain();
        assert_eq!(drained, vec![ProcessId(1), ProcessId(2)]);
        assert!(tracked.is_empty());
        assert!(tracked.drain().is_empty());
    }

    #[test]
    fn contains_and_len() {
        let tracked = TrackedProcesses::new();
        assert!(tracked.is_empty());
        tracked.record(ProcessId(7));
        assert!(tracked.contains(ProcessId(7)));
        assert!(!tracked.contains(ProcessId(8)));
        assert_eq!(tracked.len(), 1);
    }

    #[test]
    fn duplicate_pids_are_kept() {
        // The OS may reuse an id between two launches; both entries stay.
        let tracked = TrackedProcesses::new();
        tracked.record(ProcessId(5));
        tracked.record(ProcessId(5));
        assert_eq!(tracked.len(), 2);
    }
}
