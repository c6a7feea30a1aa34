use crate::{HostRealm, ProcessId};
use thiserror::Error;

/// Error taxonomy for facade operations.
#[derive(Error, Debug)]
pub enum FacadeError {
    #[error("process {0} not found")]
    NotFound(ProcessId),

    #[error("access denied to process {0}")]
    AccessDenied(ProcessId),

    #[error("operation is not supported on this platform")]
    UnsupportedPlatform,

    #[error("launch failed with OS error {code}")]
    LaunchFailed { code: i32 },

    #[error("module loaded into unsupported host realm: {0}")]
    UnsupportedHostContext(HostRealm),

    #[error("other error: {0}")]
    Other(#[from] anyhow::Error),
}

impl FacadeError {
    /// Whether this error must abort module initialization.
    ///
    /// Only a structural precondition violation at load time (wrong host
    /// realm) is fatal; every other variant is recovered locally and
    /// converted to a sentinel result for the host.
    pub fn is_fatal(&self) -> bool {
        matches!(self, FacadeError::UnsupportedHostContext(_))
    }

    /// OS error code carried by launch failures.
    pub fn os_code(&self) -> Option<i32> {
        match self {
            FacadeError::LaunchFailed { code } => Some(*code),
            _ => None,
        }
    }
}
