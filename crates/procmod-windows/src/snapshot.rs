use crate::handle::OwnedHandle;
use crate::wide::wide_buf_eq;
use anyhow::anyhow;
use procmod_core::{FacadeError, ProcessId};
use windows::Win32::System::Diagnostics::ToolHelp::{
    CreateToolhelp32Snapshot, Process32FirstW, Process32NextW, PROCESSENTRY32W, TH32CS_SNAPPROCESS,
};

/// One entry of a point-in-time process snapshot. Constructed on demand and
/// never cached; pids may be stale by the time the caller acts on them.
pub struct ProcessEntry {
    pub pid: ProcessId,
    pub parent_pid: ProcessId,
    exe_file: [u16; 260],
}

impl ProcessEntry {
    /// Wide-string exact comparison of the entry's executable filename.
    pub fn exe_matches(&self, name: &str) -> bool {
        wide_buf_eq(&self.exe_file, name)
    }
}

/// Iterator over a toolhelp snapshot of all live processes, in snapshot
/// order. The underlying snapshot handle is released when the iterator is
/// dropped, on every path.
pub struct ProcessSnapshot {
    handle: OwnedHandle,
    started: bool,
}

impl ProcessSnapshot {
    pub fn new() -> Result<Self, FacadeError> {
        match unsafe { CreateToolhelp32Snapshot(TH32CS_SNAPPROCESS, 0) } {
            Ok(handle) => Ok(Self {
                handle: OwnedHandle::from(handle),
                started: false,
            }),
            Err(err) => Err(FacadeError::Other(anyhow!(
                "process snapshot failed: {err}"
            ))),
        }
    }
}

impl Iterator for ProcessSnapshot {
    type Item = ProcessEntry;

    fn next(&mut self) -> Option<ProcessEntry> {
        let mut entry = PROCESSENTRY32W {
            dwSize: size_of::<PROCESSENTRY32W>() as u32,
            ..Default::default()
        };

        let step = if self.started {
            unsafe { Process32NextW(self.handle.raw(), &mut entry) }
        } else {
            self.started = true;
            unsafe { Process32FirstW(self.handle.raw(), &mut entry) }
        };
        // Both calls fail with ERROR_NO_MORE_FILES at the end of the
        // snapshot; either way the walk is over.
        step.ok()?;

        Some(ProcessEntry {
            pid: ProcessId(entry.th32ProcessID),
            parent_pid: ProcessId(entry.th32ParentProcessID),
            exe_file: entry.szExeFile,
        })
    }
}
