//! C ABI surface consumed by the host engine.
//!
//! The host constructs an instance with [`taskbarvis_init`], passing its
//! display-subsystem handle lookup as a callback, and tears it down with
//! [`taskbarvis_destroy`]. Operations return 1 on success and 0 on any
//! failure, matching the library's soft-failure contract.

use std::ffi::c_void;

use crate::TaskbarVisInstance;
use crate::types::{HandleKind, HandleResolver, NativeHandle, SendablePtr, WindowId};

/// Host callback resolving a window id to a native handle. `kind` carries
/// the [`HandleKind`] discriminant; a zero return means no handle.
pub type ResolverCallback =
    extern "C" fn(window_id: u32, kind: i32, user_data: *mut c_void) -> i64;

fn window_id_from(raw: i64) -> Option<WindowId> {
    // Negative ids encode the null window reference.
    u32::try_from(raw).ok()
}

#[unsafe(no_mangle)]
pub extern "C" fn taskbarvis_init(
    resolver: Option<ResolverCallback>,
    user_data: *mut c_void,
) -> *mut TaskbarVisInstance {
    let resolver = resolver.map(|cb| {
        let user_data = SendablePtr(user_data);
        Box::new(move |window: WindowId, kind: HandleKind| {
            // Capture the whole SendablePtr (not just the raw field) so the
            // closure stays Send + Sync under disjoint closure captures.
            let user_data = &user_data;
            NativeHandle(cb(window, kind as i32, user_data.0))
        }) as HandleResolver
    });

    Box::into_raw(Box::new(TaskbarVisInstance::with_resolver(resolver)))
}

#[unsafe(no_mangle)]
pub extern "C" fn taskbarvis_destroy(handle: *mut TaskbarVisInstance) {
    if handle.is_null() {
        return;
    }

    let mut instance = unsafe { Box::from_raw(handle) };
    instance.deinit();
}

#[unsafe(no_mangle)]
pub extern "C" fn taskbarvis_hide(handle: *const TaskbarVisInstance, window_id: i64) -> i32 {
    if handle.is_null() {
        return 0;
    }

    let instance = unsafe { &*handle };
    if instance.hide(window_id_from(window_id)) { 1 } else { 0 }
}

#[unsafe(no_mangle)]
pub extern "C" fn taskbarvis_show(handle: *const TaskbarVisInstance, window_id: i64) -> i32 {
    if handle.is_null() {
        return 0;
    }

    let instance = unsafe { &*handle };
    if instance.show(window_id_from(window_id)) { 1 } else { 0 }
}

#[unsafe(no_mangle)]
pub extern "C" fn taskbarvis_is_visible(
    handle: *const TaskbarVisInstance,
    window_id: i64,
) -> i32 {
    if handle.is_null() {
        return 0;
    }

    let instance = unsafe { &*handle };
    if instance.is_visible(window_id_from(window_id)) { 1 } else { 0 }
}

#[unsafe(no_mangle)]
pub extern "C" fn taskbarvis_hide_main_window(handle: *const TaskbarVisInstance) -> i32 {
    if handle.is_null() {
        return 0;
    }

    let instance = unsafe { &*handle };
    if instance.hide_main_window() { 1 } else { 0 }
}

#[unsafe(no_mangle)]
pub extern "C" fn taskbarvis_show_main_window(handle: *const TaskbarVisInstance) -> i32 {
    if handle.is_null() {
        return 0;
    }

    let instance = unsafe { &*handle };
    if instance.show_main_window() { 1 } else { 0 }
}

#[unsafe(no_mangle)]
pub extern "C" fn taskbarvis_is_main_window_visible(handle: *const TaskbarVisInstance) -> i32 {
    if handle.is_null() {
        return 0;
    }

    let instance = unsafe { &*handle };
    if instance.is_main_window_visible() { 1 } else { 0 }
}

#[unsafe(no_mangle)]
pub extern "C" fn taskbarvis_hide_by_handle(
    handle: *const TaskbarVisInstance,
    native: i64,
) -> i32 {
    if handle.is_null() {
        return 0;
    }

    let instance = unsafe { &*handle };
    if instance.hide_window_by_handle(NativeHandle(native)) { 1 } else { 0 }
}

#[unsafe(no_mangle)]
pub extern "C" fn taskbarvis_show_by_handle(
    handle: *const TaskbarVisInstance,
    native: i64,
) -> i32 {
    if handle.is_null() {
        return 0;
    }

    let instance = unsafe { &*handle };
    if instance.show_window_by_handle(NativeHandle(native)) { 1 } else { 0 }
}

#[unsafe(no_mangle)]
pub extern "C" fn taskbarvis_is_visible_by_handle(
    handle: *const TaskbarVisInstance,
    native: i64,
) -> i32 {
    if handle.is_null() {
        return 0;
    }

    let instance = unsafe { &*handle };
    if instance.is_window_visible_by_handle(NativeHandle(native)) { 1 } else { 0 }
}

#[unsafe(no_mangle)]
pub extern "C" fn taskbarvis_fallback_lookups() -> u64 {
    crate::resolver::fallback_lookups()
}
