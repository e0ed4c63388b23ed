//! No-op taskbar capability for platforms without a taskbar to control.
//!
//! Every operation fails uniformly with [`TaskbarError::Unsupported`] and
//! never touches platform state.

use log::warn;

use crate::platform::WindowTaskbarControl;
use crate::types::{NativeHandle, TaskbarError, TaskbarState};

pub(crate) struct PlatformControl;

impl WindowTaskbarControl for PlatformControl {
    fn is_supported(&self) -> bool {
        false
    }

    fn is_live(&self, _handle: NativeHandle) -> bool {
        false
    }

    fn set_taskbar_visible(
        &self,
        _handle: NativeHandle,
        _visible: bool,
    ) -> Result<(), TaskbarError> {
        warn!("taskbar control is not available on this platform");
        Err(TaskbarError::Unsupported)
    }

    fn taskbar_state(&self, _handle: NativeHandle) -> Result<TaskbarState, TaskbarError> {
        warn!("taskbar state is not available on this platform");
        Err(TaskbarError::Unsupported)
    }

    fn find_main_window(&self) -> Option<NativeHandle> {
        None
    }
}
