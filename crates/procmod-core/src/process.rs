use crate::FacadeError;
use derive_builder::Builder;
use std::fmt;
use std::path::PathBuf;

/// OS-assigned identifier for a process.
///
/// The OS may reuse an id after its process exits. Operations taking a
/// `ProcessId` therefore treat "id no longer refers to a live process" as
/// not-found rather than acting on an unrelated process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProcessId(pub u32);

impl From<u32> for ProcessId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque identifier for a top-level window, resolved transiently per call
/// and never stored across operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowHandle(pub isize);

/// Desired position in the desktop stacking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackPlacement {
    Top,
    Bottom,
}

/// A request to launch a process through the OS shell.
///
/// `args` is a single shell-style parameter string and may be empty;
/// `working_directory` falls back to the OS default when absent.
#[derive(Default, Debug, Clone, PartialEq, Builder)]
#[builder(setter(into, strip_option))]
pub struct LaunchRequest {
    pub path: String,
    #[builder(default)]
    pub args: String,
    #[builder(default)]
    pub working_directory: Option<PathBuf>,
}

impl LaunchRequest {
    pub fn builder() -> LaunchRequestBuilder {
        LaunchRequestBuilder::default()
    }
}

/// Queries the OS's live process table.
pub trait ProcessDirectory: Send + Sync {
    /// All pids whose executable filename matches `name`, in snapshot order.
    /// Empty (never an error) when nothing matches or enumeration is
    /// unsupported on this platform.
    fn find_pids_by_name(&self, name: &str) -> Vec<ProcessId>;

    /// Parent pid recorded in the snapshot, `None` when `pid` is absent.
    fn parent_pid(&self, pid: ProcessId) -> Option<ProcessId>;

    /// Full executable path of `pid`, via a query-only handle.
    fn executable_name(&self, pid: ProcessId) -> Result<String, FacadeError>;

    /// Zero-timeout liveness poll. `false` (not an error) when no handle can
    /// be opened because the process is already gone.
    fn is_running(&self, pid: ProcessId) -> bool;

    /// The id of the process hosting this module.
    fn current_pid(&self) -> ProcessId;
}

/// Starts new processes.
pub trait ProcessLauncher: Send + Sync {
    /// Ask the OS shell to open the request's path. Launch failure is an
    /// expected outcome (missing file, unassociated extension) and is
    /// reported as `LaunchFailed` carrying the OS error code.
    fn spawn(&self, request: &LaunchRequest) -> Result<ProcessId, FacadeError>;
}

/// Forcibly ends processes.
pub trait ProcessTerminator: Send + Sync {
    /// Forced termination with `exit_code`, fire-and-forget: does not wait
    /// for the process to fully exit. `false` when no terminate-capable
    /// handle could be opened or the OS refused.
    fn terminate(&self, pid: ProcessId, exit_code: u32) -> bool;
}

/// Locates and repositions a process's main window.
pub trait WindowLocator: Send + Sync {
    /// First visible, owner-less top-level window belonging to `pid`, in
    /// OS enumeration order. No further tie-break is applied.
    fn find_main_window(&self, pid: ProcessId) -> Option<WindowHandle>;

    /// Move the window to the top or bottom of the stacking order without
    /// moving or resizing it.
    fn reposition_window(&self, window: WindowHandle, placement: StackPlacement) -> bool;
}

/// Complete platform adapter combining the four component traits.
pub trait PlatformAdapter:
    ProcessDirectory + ProcessLauncher + ProcessTerminator + WindowLocator
{
}

/// Factory trait for creating the platform adapter compiled into a build.
pub trait AdapterFactory {
    /// The type of adapter this factory creates.
    type Adapter: PlatformAdapter;

    /// Create an adapter for the current platform.
    fn create_adapter() -> Self::Adapter;

    /// Get the platform name for logging and debugging.
    fn platform_name() -> &'static str;
}
