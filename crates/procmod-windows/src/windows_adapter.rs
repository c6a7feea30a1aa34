use crate::handle::{map_os_error, OwnedHandle};
use crate::snapshot::ProcessSnapshot;
use crate::{launch, window};
use procmod_core::{
    FacadeError, LaunchRequest, PlatformAdapter, ProcessDirectory, ProcessId, ProcessLauncher,
    ProcessTerminator, StackPlacement, WindowHandle, WindowLocator,
};
use tracing::{debug, info, warn};
use windows::core::PWSTR;
use windows::Win32::Foundation::WAIT_TIMEOUT;
use windows::Win32::System::Threading::{
    GetCurrentProcessId, QueryFullProcessImageNameW, TerminateProcess, WaitForSingleObject,
    PROCESS_NAME_WIN32, PROCESS_QUERY_LIMITED_INFORMATION, PROCESS_SYNCHRONIZE, PROCESS_TERMINATE,
};

/// Windows process adapter. Stateless: every operation opens, uses and
/// releases its own handles.
#[derive(Debug, Default)]
pub struct WindowsAdapter;

impl WindowsAdapter {
    pub fn new() -> Self {
        info!("initializing Windows process adapter");
        Self
    }
}

impl ProcessDirectory for WindowsAdapter {
    fn find_pids_by_name(&self, name: &str) -> Vec<ProcessId> {
        let snapshot = match ProcessSnapshot::new() {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!(error = %err, "process snapshot unavailable");
                return Vec::new();
            }
        };

        snapshot
            .filter(|entry| entry.exe_matches(name))
            .map(|entry| entry.pid)
            .collect()
    }

    fn parent_pid(&self, pid: ProcessId) -> Option<ProcessId> {
        let mut snapshot = ProcessSnapshot::new().ok()?;
        snapshot
            .find(|entry| entry.pid == pid)
            .map(|entry| entry.parent_pid)
    }

    fn executable_name(&self, pid: ProcessId) -> Result<String, FacadeError> {
        let handle = OwnedHandle::open_process(pid, PROCESS_QUERY_LIMITED_INFORMATION)?;

        let mut buf = [0u16; 1024];
        let mut len = buf.len() as u32;
        unsafe {
            QueryFullProcessImageNameW(
                handle.raw(),
                PROCESS_NAME_WIN32,
                PWSTR::from_raw(buf.as_mut_ptr()),
                &mut len,
            )
        }
        .map_err(|err| map_os_error(&err, pid))?;

        Ok(String::from_utf16_lossy(&buf[..len as usize]))
    }

    fn is_running(&self, pid: ProcessId) -> bool {
        // No synchronization-capable handle means the process is gone.
        let handle = match OwnedHandle::open_process(pid, PROCESS_SYNCHRONIZE) {
            Ok(handle) => handle,
            Err(_) => return false,
        };

        // Zero-timeout poll: still running iff the wait times out.
        unsafe { WaitForSingleObject(handle.raw(), 0) } == WAIT_TIMEOUT
    }

    fn current_pid(&self) -> ProcessId {
        ProcessId(unsafe { GetCurrentProcessId() })
    }
}

impl ProcessLauncher for WindowsAdapter {
    fn spawn(&self, request: &LaunchRequest) -> Result<ProcessId, FacadeError> {
        launch::shell_spawn(request)
    }
}

impl ProcessTerminator for WindowsAdapter {
    fn terminate(&self, pid: ProcessId, exit_code: u32) -> bool {
        let handle = match OwnedHandle::open_process(pid, PROCESS_TERMINATE) {
            Ok(handle) => handle,
            Err(err) => {
                debug!(pid = %pid, error = %err, "no terminate-capable handle");
                return false;
            }
        };

        // Fire-and-forget: no wait for the process to fully exit.
        match unsafe { TerminateProcess(handle.raw(), exit_code) } {
            Ok(()) => {
                info!(pid = %pid, exit_code, "terminated process");
                true
            }
            Err(err) => {
                warn!(pid = %pid, error = %err, "TerminateProcess failed");
                false
            }
        }
    }
}

impl WindowLocator for WindowsAdapter {
    fn find_main_window(&self, pid: ProcessId) -> Option<WindowHandle> {
        window::find_main_window(pid)
    }

    fn reposition_window(&self, target: WindowHandle, placement: StackPlacement) -> bool {
        window::reposition(target, placement)
    }
}

impl PlatformAdapter for WindowsAdapter {}
