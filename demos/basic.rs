use taskbarvis::{HandleKind, NativeHandle, TaskbarVisInstance, WindowId};

fn main() {
    // A real host would hand back the native handle its display subsystem
    // tracks for the window id; with no handle to offer, main-window
    // operations exercise the enumeration fallback instead.
    let resolver = Box::new(|_window: WindowId, _kind: HandleKind| NativeHandle::NULL);

    let mut instance = TaskbarVisInstance::with_resolver(Some(resolver));
    println!("Initialized TaskbarVisInstance");

    println!(
        "Main window on taskbar: {}",
        instance.is_main_window_visible()
    );

    if instance.hide_main_window() {
        println!("Removed the main window from the taskbar");
        println!(
            "Main window on taskbar: {}",
            instance.is_main_window_visible()
        );
    } else {
        println!("Could not remove the main window from the taskbar");
    }

    if instance.show_main_window() {
        println!("Restored the main window to the taskbar");
    }

    println!(
        "Enumeration fallbacks used: {}",
        taskbarvis::fallback_lookups()
    );

    instance.deinit();
    println!("Deinitialized TaskbarVisInstance");
}
