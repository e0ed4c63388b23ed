//! Platform capability layer for taskbar control.
//!
//! The extended-style bit arithmetic is kept in pure functions here so the
//! invariants can be exercised on every platform; the Win32 implementation
//! applies them to real windows, and every other target gets a no-op
//! implementation that reports the capability as absent.

use crate::types::{NativeHandle, TaskbarError, TaskbarState};

#[cfg(windows)]
mod win;
#[cfg(not(windows))]
mod unsupported;

#[cfg(windows)]
pub(crate) use win::PlatformControl;
#[cfg(not(windows))]
pub(crate) use unsupported::PlatformControl;

/// Capability interface over a platform's taskbar-presentation control.
///
/// One implementation per supported platform, selected at compile time.
pub trait WindowTaskbarControl: Send + Sync {
    /// Whether this build can manipulate taskbar presentation at all.
    fn is_supported(&self) -> bool;

    /// Whether the handle currently names a live top-level window.
    fn is_live(&self, handle: NativeHandle) -> bool;

    /// Rewrite the mutually-exclusive application-window / tool-window
    /// style bits and force a chrome refresh.
    fn set_taskbar_visible(
        &self,
        handle: NativeHandle,
        visible: bool,
    ) -> Result<(), TaskbarError>;

    /// Read the current taskbar membership. Read-only.
    fn taskbar_state(&self, handle: NativeHandle) -> Result<TaskbarState, TaskbarError>;

    /// Enumeration fallback for locating the current process's main window.
    fn find_main_window(&self) -> Option<NativeHandle>;
}

/// The compile-time selected control for this build.
pub(crate) fn control() -> &'static dyn WindowTaskbarControl {
    static CONTROL: PlatformControl = PlatformControl;
    &CONTROL
}

// WS_EX_APPWINDOW / WS_EX_TOOLWINDOW, mirrored here so the bit logic stays
// testable off-Windows.
pub(crate) const EX_APPWINDOW: u32 = 0x0004_0000;
pub(crate) const EX_TOOLWINDOW: u32 = 0x0000_0080;

/// Compute the full new extended-style bit-set for the requested taskbar
/// visibility. The two flags are never left asserted together.
pub(crate) fn apply_taskbar_bits(ex_style: u32, visible: bool) -> u32 {
    if visible {
        (ex_style | EX_APPWINDOW) & !EX_TOOLWINDOW
    } else {
        (ex_style & !EX_APPWINDOW) | EX_TOOLWINDOW
    }
}

/// Derived taskbar-visibility boolean: application-window flag set and
/// tool-window flag clear.
pub(crate) fn taskbar_visible_from_bits(ex_style: u32) -> bool {
    (ex_style & EX_APPWINDOW) != 0 && (ex_style & EX_TOOLWINDOW) == 0
}
