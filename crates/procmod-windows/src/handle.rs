use procmod_core::{FacadeError, ProcessId};
use windows::Win32::Foundation::{CloseHandle, ERROR_ACCESS_DENIED, HANDLE};
use windows::Win32::System::Threading::{OpenProcess, PROCESS_ACCESS_RIGHTS};

/// Scoped OS handle, released on every exit path.
pub struct OwnedHandle(HANDLE);

impl OwnedHandle {
    /// Open a process handle to `pid` with `rights`, mapping the OS error
    /// into the facade taxonomy.
    pub fn open_process(pid: ProcessId, rights: PROCESS_ACCESS_RIGHTS) -> Result<Self, FacadeError> {
        match unsafe { OpenProcess(rights, false, pid.0) } {
            Ok(handle) => Ok(Self(handle)),
            Err(err) => Err(map_os_error(&err, pid)),
        }
    }

    pub fn raw(&self) -> HANDLE {
        self.0
    }
}

impl From<HANDLE> for OwnedHandle {
    fn from(handle: HANDLE) -> Self {
        Self(handle)
    }
}

impl Drop for OwnedHandle {
    fn drop(&mut self) {
        if !self.0.is_invalid() {
            // Nothing actionable on a close failure.
            let _ = unsafe { CloseHandle(self.0) };
        }
    }
}

/// Translate a Win32 error for an operation on `pid`: permission failures
/// become `AccessDenied`, everything else means the process is gone.
pub fn map_os_error(err: &windows::core::Error, pid: ProcessId) -> FacadeError {
    if err.code() == ERROR_ACCESS_DENIED.to_hresult() {
        FacadeError::AccessDenied(pid)
    } else {
        FacadeError::NotFound(pid)
    }
}
