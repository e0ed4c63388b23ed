//! Shared types for libtaskbarvis.

use std::ffi::c_void;

use thiserror::Error;

/// Host-assigned window identifier. Id 0 names the primary window slot.
pub type WindowId = u32;

/// Kind of native handle requested from the host's display subsystem.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleKind {
    Display = 0,
    Window = 1,
}

/// Borrowed, non-owning native window handle. Zero is the null handle.
///
/// A handle is only trusted for the duration of a single call; liveness is
/// re-checked immediately before every read or mutation.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeHandle(pub i64);

impl NativeHandle {
    pub const NULL: NativeHandle = NativeHandle(0);

    pub fn is_null(self) -> bool {
        self.0 == 0
    }
}

/// Taskbar membership as read from the extended window style bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskbarState {
    /// Application-window flag set and tool-window flag clear.
    OnTaskbar,
    /// Any other flag combination.
    Excluded,
}

impl TaskbarState {
    pub fn is_on_taskbar(self) -> bool {
        matches!(self, TaskbarState::OnTaskbar)
    }
}

#[derive(Debug, Error)]
pub enum TaskbarError {
    #[error("no window reference was supplied")]
    MissingWindow,
    #[error("no live native handle for window id {0}")]
    Unresolved(WindowId),
    #[error("no live native handle for the main window")]
    MainWindowUnresolved,
    #[error("window handle {0:#x} does not name a live window")]
    StaleHandle(i64),
    #[error("extended style read failed for window handle {0:#x}")]
    StyleReadFailed(i64),
    #[error("taskbar control is not supported on this platform")]
    Unsupported,
}

/// Host-supplied lookup mapping a window id to a native handle, the display
/// subsystem's native-handle query. Returns the null handle when the host
/// has no window for the id.
pub type HandleResolver =
    Box<dyn Fn(WindowId, HandleKind) -> NativeHandle + Send + Sync + 'static>;

#[repr(transparent)]
pub struct SendablePtr(pub *mut c_void);

unsafe impl Send for SendablePtr {}
unsafe impl Sync for SendablePtr {}
