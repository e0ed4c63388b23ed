//! Window handle resolution.
//!
//! Explicit windows resolve through the host-registered display-subsystem
//! lookup only. The main window additionally has an enumeration fallback,
//! because the primary lookup can legitimately return a stale or zero
//! handle before the host's primary window is fully realized.

use std::sync::atomic::{AtomicU64, Ordering};

use log::{debug, warn};

use crate::platform::WindowTaskbarControl;
use crate::types::{HandleKind, HandleResolver, NativeHandle, TaskbarError, WindowId};

/// The implicit primary window slot maintained by the host.
pub(crate) const MAIN_WINDOW_ID: WindowId = 0;

static FALLBACK_LOOKUPS: AtomicU64 = AtomicU64::new(0);

/// Number of times main-window resolution fell back to desktop enumeration.
/// The count is process-wide and only ever grows.
pub fn fallback_lookups() -> u64 {
    FALLBACK_LOOKUPS.load(Ordering::Relaxed)
}

/// Resolve an explicit window id to a live native handle through the host
/// lookup. No enumeration fallback here.
pub(crate) fn resolve_window(
    resolver: Option<&HandleResolver>,
    control: &dyn WindowTaskbarControl,
    window: WindowId,
) -> Result<NativeHandle, TaskbarError> {
    let Some(resolver) = resolver else {
        debug!("no handle resolver registered, cannot resolve window {window}");
        return Err(TaskbarError::Unresolved(window));
    };

    let handle = resolver(window, HandleKind::Window);
    if handle.is_null() {
        return Err(TaskbarError::Unresolved(window));
    }
    if !control.is_live(handle) {
        return Err(TaskbarError::StaleHandle(handle.0));
    }

    debug!("resolved window {} to native handle {:#x}", window, handle.0);
    Ok(handle)
}

/// Resolve the main window: host lookup for slot 0 first, enumeration
/// fallback second, first success wins.
pub(crate) fn resolve_main_window(
    resolver: Option<&HandleResolver>,
    control: &dyn WindowTaskbarControl,
) -> Result<NativeHandle, TaskbarError> {
    match resolve_window(resolver, control, MAIN_WINDOW_ID) {
        Ok(handle) => return Ok(handle),
        Err(err) => debug!("primary main-window lookup failed: {err}"),
    }

    FALLBACK_LOOKUPS.fetch_add(1, Ordering::Relaxed);
    match control.find_main_window() {
        Some(handle) => Ok(handle),
        None => {
            warn!("main window could not be resolved");
            Err(TaskbarError::MainWindowUnresolved)
        }
    }
}
