//! libtaskbarvis — toggle and query the taskbar presence of native windows
//! on behalf of a host engine.
//!
//! The host constructs a [`TaskbarVisInstance`] (directly, or through the C
//! ABI exports in `ffi`), optionally registering its display subsystem's
//! native-handle lookup, and calls the hide/show/query operations. On
//! Windows these flip the mutually-exclusive WS_EX_APPWINDOW /
//! WS_EX_TOOLWINDOW extended style bits and force a chrome refresh; on
//! every other platform they are logged no-ops that report failure.
//!
//! Set `TASKBARVIS_LOG_LEVEL` to control logging, and `TASKBARVIS_LOG_FILE`
//! to redirect it to a file.

mod ffi;
mod instance;
mod platform;
mod resolver;
mod types;

pub use crate::ffi::ResolverCallback;
pub use crate::instance::TaskbarVisInstance;
pub use crate::platform::WindowTaskbarControl;
pub use crate::resolver::fallback_lookups;
pub use crate::types::{
    HandleKind, HandleResolver, NativeHandle, TaskbarError, TaskbarState, WindowId,
};
