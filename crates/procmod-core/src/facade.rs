use crate::{
    FacadeError, LaunchRequest, ModuleConfig, PlatformAdapter, ProcessId, StackPlacement,
    TrackedProcesses,
};
use std::collections::HashMap;
use tracing::{debug, info};

/// Process-management facade exposed to the embedding host.
///
/// Owns the platform adapter and the only piece of cross-call state, the
/// tracked-process set. Every operation is synchronous and completes before
/// returning; none suspends or registers a continuation. Every operation is
/// safe to retry except [`start`](Self::start), which launches a second
/// process.
#[derive(Debug)]
pub struct ProcessFacade<A: PlatformAdapter> {
    adapter: A,
    config: ModuleConfig,
    tracked: TrackedProcesses,
}

impl<A: PlatformAdapter> ProcessFacade<A> {
    pub fn new(adapter: A, config: ModuleConfig) -> Self {
        Self {
            adapter,
            config,
            tracked: TrackedProcesses::new(),
        }
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn tracked(&self) -> &TrackedProcesses {
        &self.tracked
    }

    /// Launch a process through the OS shell. On success the new pid is
    /// recorded for teardown, unless tracking is disabled by configuration.
    pub fn start(&self, request: &LaunchRequest) -> Result<ProcessId, FacadeError> {
        let pid = self.adapter.spawn(request)?;
        if self.config.track_spawned {
            self.tracked.record(pid);
        }
        info!(pid = %pid, path = %request.path, "started process");
        Ok(pid)
    }

    /// Forcibly end `pid`; `exit_code` falls back to the configured default.
    pub fn terminate(&self, pid: ProcessId, exit_code: Option<u32>) -> bool {
        let code = exit_code.unwrap_or(self.config.default_exit_code);
        self.adapter.terminate(pid, code)
    }

    /// Zero-timeout liveness poll; `false` once the process is gone.
    pub fn is_running(&self, pid: ProcessId) -> bool {
        self.adapter.is_running(pid)
    }

    /// All pids whose executable filename matches `name`, in snapshot order.
    pub fn find_pids(&self, name: &str) -> Vec<ProcessId> {
        self.adapter.find_pids_by_name(name)
    }

    /// Parent pid from the current snapshot, `None` when `pid` is absent.
    pub fn parent_pid(&self, pid: ProcessId) -> Option<ProcessId> {
        self.adapter.parent_pid(pid)
    }

    /// Full executable path of `pid`.
    pub fn executable_name(&self, pid: ProcessId) -> Result<String, FacadeError> {
        self.adapter.executable_name(pid)
    }

    /// Whether `pid` was spawned directly by the host process, judged by
    /// comparing its snapshot parent against the host's own pid.
    pub fn is_host_child(&self, pid: ProcessId) -> bool {
        match self.adapter.parent_pid(pid) {
            Some(parent) => parent == self.adapter.current_pid(),
            None => false,
        }
    }

    /// The id of the process hosting this module.
    pub fn host_pid(&self) -> ProcessId {
        self.adapter.current_pid()
    }

    /// Name-to-pid view of tracked processes whose executable name still
    /// resolves. Processes that already exited are silently skipped. Two
    /// tracked processes sharing an executable name collapse to one entry,
    /// last write wins: a lossy convenience view, not a registry.
    pub fn tracked_running(&self) -> HashMap<String, ProcessId> {
        let mut out = HashMap::new();
        for pid in self.tracked.snapshot() {
            match self.adapter.executable_name(pid) {
                Ok(name) => {
                    out.insert(name, pid);
                }
                Err(_) => continue,
            }
        }
        out
    }

    /// Raise the process's main window to the top of the stacking order.
    pub fn bring_to_front(&self, pid: ProcessId) -> bool {
        self.reposition(pid, StackPlacement::Top)
    }

    /// Lower the process's main window to the bottom of the stacking order.
    pub fn bring_to_back(&self, pid: ProcessId) -> bool {
        self.reposition(pid, StackPlacement::Bottom)
    }

    fn reposition(&self, pid: ProcessId, placement: StackPlacement) -> bool {
        match self.adapter.find_main_window(pid) {
            Some(window) => self.adapter.reposition_window(window, placement),
            None => {
                debug!(pid = %pid, "process has no main window");
                false
            }
        }
    }

    /// Terminate every tracked process with the configured default exit
    /// code, ignoring individual failures. Runs once at module unload so
    /// spawned children do not outlive the host.
    pub fn teardown(&self) {
        let pids = self.tracked.drain();
        if pids.is_empty() {
            return;
        }
        info!(count = pids.len(), "terminating tracked processes");
        for pid in pids {
            if !self.adapter.terminate(pid, self.config.default_exit_code) {
                debug!(pid = %pid, "tracked process already gone");
            }
        }
    }
}
