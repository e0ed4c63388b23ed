//! Win32 implementation of the taskbar capability.
//!
//! Taskbar presence is controlled through the WS_EX_APPWINDOW and
//! WS_EX_TOOLWINDOW extended style bits; the shell only re-reads them after
//! the window is hidden and shown again, so every mutation ends with a
//! hide/show pair.

use log::{debug, trace, warn};
use windows::Win32::Foundation::*;
use windows::Win32::System::Threading::GetCurrentProcessId;
use windows::Win32::UI::WindowsAndMessaging::*;

use crate::platform::{WindowTaskbarControl, apply_taskbar_bits, taskbar_visible_from_bits};
use crate::types::{NativeHandle, TaskbarError, TaskbarState};

pub(crate) struct PlatformControl;

fn hwnd_from(handle: NativeHandle) -> HWND {
    HWND(handle.0 as *mut core::ffi::c_void)
}

impl WindowTaskbarControl for PlatformControl {
    fn is_supported(&self) -> bool {
        true
    }

    fn is_live(&self, handle: NativeHandle) -> bool {
        if handle.is_null() {
            return false;
        }
        unsafe { IsWindow(hwnd_from(handle)).as_bool() }
    }

    fn set_taskbar_visible(
        &self,
        handle: NativeHandle,
        visible: bool,
    ) -> Result<(), TaskbarError> {
        if !self.is_live(handle) {
            return Err(TaskbarError::StaleHandle(handle.0));
        }
        let hwnd = hwnd_from(handle);

        let ex_style = unsafe { GetWindowLongW(hwnd, GWL_EXSTYLE) } as u32;
        if ex_style == 0 {
            return Err(TaskbarError::StyleReadFailed(handle.0));
        }

        let new_style = apply_taskbar_bits(ex_style, visible);
        trace!(
            "ex-style for {:#x}: {:#x} -> {:#x}",
            handle.0, ex_style, new_style
        );

        unsafe {
            SetWindowLongW(hwnd, GWL_EXSTYLE, new_style as i32);
            let _ = ShowWindow(hwnd, SW_HIDE);
            let _ = ShowWindow(hwnd, SW_SHOW);
        }

        Ok(())
    }

    fn taskbar_state(&self, handle: NativeHandle) -> Result<TaskbarState, TaskbarError> {
        if !self.is_live(handle) {
            return Err(TaskbarError::StaleHandle(handle.0));
        }

        // Unlike the mutation path, a zero style is a valid answer here:
        // both flags clear means the window is not on the taskbar.
        let ex_style = unsafe { GetWindowLongW(hwnd_from(handle), GWL_EXSTYLE) } as u32;
        Ok(if taskbar_visible_from_bits(ex_style) {
            TaskbarState::OnTaskbar
        } else {
            TaskbarState::Excluded
        })
    }

    fn find_main_window(&self) -> Option<NativeHandle> {
        let mut search = MainWindowSearch {
            pid: unsafe { GetCurrentProcessId() },
            found: 0,
        };

        // EnumWindows reports failure when the callback stops it early, so
        // the return value alone cannot distinguish a hit from an error.
        let enum_res = unsafe {
            EnumWindows(
                Some(enum_main_window_candidate),
                LPARAM(&mut search as *mut _ as isize),
            )
        };

        if search.found == 0 {
            if enum_res.is_err() {
                warn!("EnumWindows failed while searching for the main window");
            }
            return None;
        }

        let handle = NativeHandle(search.found);
        if self.is_live(handle) {
            debug!("main window located by enumeration: {:#x}", handle.0);
            Some(handle)
        } else {
            None
        }
    }
}

struct MainWindowSearch {
    pid: u32,
    found: i64,
}

/// Enumeration callback keeping the first shown, parentless window of the
/// current process whose basic style carries a caption and a system menu.
extern "system" fn enum_main_window_candidate(hwnd: HWND, lparam: LPARAM) -> BOOL {
    let search = unsafe { &mut *(lparam.0 as *mut MainWindowSearch) };

    let mut pid: u32 = 0;
    unsafe {
        let _ = GetWindowThreadProcessId(hwnd, Some(&mut pid));
    }
    if pid != search.pid {
        return TRUE;
    }

    let is_visible = unsafe { IsWindowVisible(hwnd).as_bool() };
    let parent = unsafe { GetParent(hwnd).unwrap_or_default() };
    if !is_visible || !parent.is_invalid() {
        trace!("skipping hidden or owned window {:?}", hwnd);
        return TRUE;
    }

    let style = unsafe { GetWindowLongW(hwnd, GWL_STYLE) } as u32;
    if (style & WS_CAPTION.0) != 0 && (style & WS_SYSMENU.0) != 0 {
        search.found = hwnd.0 as i64;
        return FALSE;
    }

    TRUE
}
