use procmod_core::{
    FacadeError, LaunchRequest, PlatformAdapter, ProcessDirectory, ProcessId, ProcessLauncher,
    ProcessTerminator, StackPlacement, WindowHandle, WindowLocator,
};
use tracing::debug;

/// Adapter whose every operation returns the designated "not available"
/// result: `false`, an empty collection, or pid 0. Host calls never fail;
/// they just report that nothing is there.
#[derive(Debug, Default)]
pub struct InertAdapter;

impl InertAdapter {
    pub fn new() -> Self {
        debug!("process management is inert on this platform");
        Self
    }
}

impl ProcessDirectory for InertAdapter {
    fn find_pids_by_name(&self, _name: &str) -> Vec<ProcessId> {
        Vec::new()
    }

    fn parent_pid(&self, _pid: ProcessId) -> Option<ProcessId> {
        None
    }

    fn executable_name(&self, _pid: ProcessId) -> Result<String, FacadeError> {
        Err(FacadeError::UnsupportedPlatform)
    }

    fn is_running(&self, _pid: ProcessId) -> bool {
        false
    }

    fn current_pid(&self) -> ProcessId {
        ProcessId(0)
    }
}

impl ProcessLauncher for InertAdapter {
    fn spawn(&self, request: &LaunchRequest) -> Result<ProcessId, FacadeError> {
        debug!(path = %request.path, "spawn requested on unsupported platform");
        Err(FacadeError::UnsupportedPlatform)
    }
}

impl ProcessTerminator for InertAdapter {
    fn terminate(&self, _pid: ProcessId, _exit_code: u32) -> bool {
        false
    }
}

impl WindowLocator for InertAdapter {
    fn find_main_window(&self, _pid: ProcessId) -> Option<WindowHandle> {
        None
    }

    fn reposition_window(&self, _window: WindowHandle, _placement: StackPlacement) -> bool {
        false
    }
}

impl PlatformAdapter for InertAdapter {}
