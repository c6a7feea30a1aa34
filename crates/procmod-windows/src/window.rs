use procmod_core::{ProcessId, StackPlacement, WindowHandle};
use std::ffi::c_void;
use windows::core::BOOL;
use windows::Win32::Foundation::{HWND, LPARAM};
use windows::Win32::UI::WindowsAndMessaging::{
    EnumWindows, GetWindow, GetWindowThreadProcessId, IsWindowVisible, SetWindowPos, ShowWindow,
    GW_OWNER, HWND_BOTTOM, HWND_TOP, SWP_NOMOVE, SWP_NOSIZE, SW_SHOWNORMAL,
};

struct EnumState {
    pid: u32,
    found: Option<HWND>,
}

/// A process's main window: visible, top-level, and with no owner window.
unsafe fn is_main_window(hwnd: HWND) -> bool {
    // GetWindow reports an error when the window has no owner.
    unsafe { GetWindow(hwnd, GW_OWNER).is_err() && IsWindowVisible(hwnd).as_bool() }
}

unsafe extern "system" fn enum_windows_callback(hwnd: HWND, lparam: LPARAM) -> BOOL {
    let state = unsafe { &mut *(lparam.0 as *mut EnumState) };
    let mut pid = 0u32;
    unsafe { GetWindowThreadProcessId(hwnd, Some(&mut pid)) };
    if pid != state.pid || !unsafe { is_main_window(hwnd) } {
        return true.into();
    }

    state.found = Some(hwnd);
    false.into()
}

/// First qualifying main window of `pid` in OS enumeration order.
pub fn find_main_window(pid: ProcessId) -> Option<WindowHandle> {
    let mut state = EnumState {
        pid: pid.0,
        found: None,
    };

    // EnumWindows reports an error when the callback stops it early; that is
    // the found case, not a failure.
    let _ = unsafe {
        EnumWindows(
            Some(enum_windows_callback),
            LPARAM(&raw mut state as isize),
        )
    };

    state.found.map(|hwnd| WindowHandle(hwnd.0 as isize))
}

/// Reposition the window in the desktop stacking order without moving or
/// resizing it. Raising also restores the window in case it is minimized,
/// otherwise the raise would not be visible.
pub fn reposition(window: WindowHandle, placement: StackPlacement) -> bool {
    let hwnd = HWND(window.0 as *mut c_void);
    let insert_after = match placement {
        StackPlacement::Top => HWND_TOP,
        StackPlacement::Bottom => HWND_BOTTOM,
    };

    let repositioned =
        unsafe { SetWindowPos(hwnd, Some(insert_after), 0, 0, 0, 0, SWP_NOMOVE | SWP_NOSIZE) }
            .is_ok();

    if placement == StackPlacement::Top {
        let shown = unsafe { ShowWindow(hwnd, SW_SHOWNORMAL) }.as_bool();
        return repositioned || shown;
    }

    repositioned
}
