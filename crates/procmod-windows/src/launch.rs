use crate::handle::OwnedHandle;
use crate::wide::to_wide;
use procmod_core::{FacadeError, LaunchRequest, ProcessId};
use tracing::info;
use windows::core::PCWSTR;
use windows::Win32::System::Threading::GetProcessId;
use windows::Win32::UI::Shell::{ShellExecuteExW, SEE_MASK_NOCLOSEPROCESS, SHELLEXECUTEINFOW};
use windows::Win32::UI::WindowsAndMessaging::SW_SHOWNORMAL;

/// Launch the request's path through the shell's "open" verb, retaining a
/// handle to the new process so its pid can be read.
pub fn shell_spawn(request: &LaunchRequest) -> Result<ProcessId, FacadeError> {
    let verb = to_wide("open");
    let file = to_wide(&request.path);
    let params = to_wide(&request.args);
    let directory = request
        .working_directory
        .as_ref()
        .map(|dir| to_wide(&dir.to_string_lossy()));

    // The wide buffers above must stay alive for the duration of the call.
    let mut exec_info = SHELLEXECUTEINFOW {
        cbSize: size_of::<SHELLEXECUTEINFOW>() as u32,
        fMask: SEE_MASK_NOCLOSEPROCESS,
        lpVerb: PCWSTR::from_raw(verb.as_ptr()),
        lpFile: PCWSTR::from_raw(file.as_ptr()),
        lpParameters: PCWSTR::from_raw(params.as_ptr()),
        lpDirectory: directory
            .as_ref()
            .map_or(PCWSTR::null(), |dir| PCWSTR::from_raw(dir.as_ptr())),
        nShow: SW_SHOWNORMAL.0,
        ..Default::default()
    };

    unsafe { ShellExecuteExW(&mut exec_info) }
        .map_err(|err| FacadeError::LaunchFailed { code: err.code().0 })?;

    if exec_info.hProcess.is_invalid() {
        // The shell handled the request without creating a waitable process
        // (for example a DDE hand-off); there is no pid to report.
        return Err(FacadeError::LaunchFailed { code: 0 });
    }

    let handle = OwnedHandle::from(exec_info.hProcess);
    let pid = ProcessId(unsafe { GetProcessId(handle.raw()) });
    info!(pid = %pid, path = %request.path, "shell launch succeeded");
    Ok(pid)
}
