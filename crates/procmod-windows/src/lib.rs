//! Windows-specific process adapter built on raw Win32 calls.
//!
//! Process handles and toolhelp snapshots are scoped-acquired through
//! [`handle::OwnedHandle`] so every exit path, including early error
//! returns, releases them.

#[cfg(windows)]
mod handle;
#[cfg(windows)]
mod launch;
#[cfg(windows)]
mod snapshot;
#[cfg(windows)]
mod window;
#[cfg(windows)]
mod windows_adapter;

mod wide;

pub use wide::{to_wide, wide_buf_eq};

#[cfg(windows)]
pub use windows_adapter::WindowsAdapter;

#[cfg(windows)]
use procmod_core::AdapterFactory;

/// Windows-specific adapter factory.
#[cfg(windows)]
pub struct WindowsAdapterFactory;

#[cfg(windows)]
impl AdapterFactory for WindowsAdapterFactory {
    type Adapter = WindowsAdapter;

    fn create_adapter() -> WindowsAdapter {
        WindowsAdapter::new()
    }

    fn platform_name() -> &'static str {
        "Windows"
    }
}

// Provide stub types for non-Windows systems so the workspace builds
// everywhere; the adapter is only wired up on Windows targets.
#[cfg(not(windows))]
pub struct WindowsAdapter;

#[cfg(not(windows))]
impl WindowsAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(not(windows))]
impl Default for WindowsAdapter {
    fn default() -> Self {
        Self::new()
    }
}
