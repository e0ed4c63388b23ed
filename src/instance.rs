//! Core TaskbarVisInstance implementation.
//!
//! This is the object the host engine constructs and calls. Every operation
//! is synchronous and self-contained: resolve a handle, re-check liveness,
//! apply or read the style bits, return. Failures never cross the boundary
//! as anything other than `false` plus a log line; the `try_*` variants
//! expose the underlying error for callers that want to tell "not on the
//! taskbar" apart from "could not determine".

use std::env;
use std::fs::File;

use env_logger::{Builder, Target};
use log::{LevelFilter, debug, info, warn};

use crate::platform::{self, WindowTaskbarControl};
use crate::resolver;
use crate::types::{HandleResolver, NativeHandle, TaskbarError, TaskbarState, WindowId};

pub struct TaskbarVisInstance {
    resolver: Option<HandleResolver>,
    control: &'static dyn WindowTaskbarControl,
}

impl TaskbarVisInstance {
    pub fn new() -> Self {
        Self::with_resolver(None)
    }

    /// Create an instance with the host's display-subsystem handle lookup
    /// already registered.
    pub fn with_resolver(resolver: Option<HandleResolver>) -> Self {
        init_logging();
        info!("Created new TaskbarVisInstance");
        Self {
            resolver,
            control: platform::control(),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_control(
        control: &'static dyn WindowTaskbarControl,
        resolver: Option<HandleResolver>,
    ) -> Self {
        Self { resolver, control }
    }

    pub fn set_resolver(&mut self, resolver: Option<HandleResolver>) {
        self.resolver = resolver;
    }

    pub fn deinit(&mut self) {
        self.resolver = None;
    }

    // Explicit-window operations, resolved through the host lookup.

    pub fn hide(&self, window: Option<WindowId>) -> bool {
        report("hide window from taskbar", self.try_hide(window))
    }

    pub fn show(&self, window: Option<WindowId>) -> bool {
        report("show window on taskbar", self.try_show(window))
    }

    pub fn is_visible(&self, window: Option<WindowId>) -> bool {
        report_state("window taskbar state", self.try_is_visible(window))
    }

    pub fn try_hide(&self, window: Option<WindowId>) -> Result<(), TaskbarError> {
        self.try_set_visible(window, false)
    }

    pub fn try_show(&self, window: Option<WindowId>) -> Result<(), TaskbarError> {
        self.try_set_visible(window, true)
    }

    pub fn try_is_visible(&self, window: Option<WindowId>) -> Result<TaskbarState, TaskbarError> {
        self.check_supported()?;
        let window = window.ok_or(TaskbarError::MissingWindow)?;
        let handle = resolver::resolve_window(self.resolver.as_ref(), self.control, window)?;
        self.control.taskbar_state(handle)
    }

    // Main-window operations, resolved via the primary slot with the
    // enumeration fallback.

    pub fn hide_main_window(&self) -> bool {
        report("hide main window from taskbar", self.try_hide_main_window())
    }

    pub fn show_main_window(&self) -> bool {
        report("show main window on taskbar", self.try_show_main_window())
    }

    pub fn is_main_window_visible(&self) -> bool {
        report_state("main window taskbar state", self.try_main_window_state())
    }

    pub fn try_hide_main_window(&self) -> Result<(), TaskbarError> {
        self.try_set_main_visible(false)
    }

    pub fn try_show_main_window(&self) -> Result<(), TaskbarError> {
        self.try_set_main_visible(true)
    }

    pub fn try_main_window_state(&self) -> Result<TaskbarState, TaskbarError> {
        self.check_supported()?;
        let handle = resolver::resolve_main_window(self.resolver.as_ref(), self.control)?;
        self.control.taskbar_state(handle)
    }

    // By-handle operations: the caller already holds a concrete native
    // handle, so no resolver and no fallback are involved.

    pub fn hide_window_by_handle(&self, handle: NativeHandle) -> bool {
        report(
            "hide window (by handle) from taskbar",
            self.try_hide_window_by_handle(handle),
        )
    }

    pub fn show_window_by_handle(&self, handle: NativeHandle) -> bool {
        report(
            "show window (by handle) on taskbar",
            self.try_show_window_by_handle(handle),
        )
    }

    pub fn is_window_visible_by_handle(&self, handle: NativeHandle) -> bool {
        report_state(
            "window (by handle) taskbar state",
            self.try_window_state_by_handle(handle),
        )
    }

    pub fn try_hide_window_by_handle(&self, handle: NativeHandle) -> Result<(), TaskbarError> {
        self.try_set_visible_by_handle(handle, false)
    }

    pub fn try_show_window_by_handle(&self, handle: NativeHandle) -> Result<(), TaskbarError> {
        self.try_set_visible_by_handle(handle, true)
    }

    pub fn try_window_state_by_handle(
        &self,
        handle: NativeHandle,
    ) -> Result<TaskbarState, TaskbarError> {
        self.check_supported()?;
        if handle.is_null() {
            return Err(TaskbarError::MissingWindow);
        }
        self.control.taskbar_state(handle)
    }

    fn check_supported(&self) -> Result<(), TaskbarError> {
        if self.control.is_supported() {
            Ok(())
        } else {
            Err(TaskbarError::Unsupported)
        }
    }

    fn try_set_visible(
        &self,
        window: Option<WindowId>,
        visible: bool,
    ) -> Result<(), TaskbarError> {
        self.check_supported()?;
        let window = window.ok_or(TaskbarError::MissingWindow)?;
        let handle = resolver::resolve_window(self.resolver.as_ref(), self.control, window)?;
        self.control.set_taskbar_visible(handle, visible)
    }

    fn try_set_main_visible(&self, visible: bool) -> Result<(), TaskbarError> {
        self.check_supported()?;
        let handle = resolver::resolve_main_window(self.resolver.as_ref(), self.control)?;
        self.control.set_taskbar_visible(handle, visible)
    }

    fn try_set_visible_by_handle(
        &self,
        handle: NativeHandle,
        visible: bool,
    ) -> Result<(), TaskbarError> {
        self.check_supported()?;
        if handle.is_null() {
            return Err(TaskbarError::MissingWindow);
        }
        self.control.set_taskbar_visible(handle, visible)
    }
}

impl Default for TaskbarVisInstance {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TaskbarVisInstance {
    fn drop(&mut self) {
        info!("TaskbarVisInstance destroyed");
    }
}

fn report(action: &str, result: Result<(), TaskbarError>) -> bool {
    match result {
        Ok(()) => {
            debug!("{action}: ok");
            true
        }
        Err(err) => {
            warn!("{action} failed: {err}");
            false
        }
    }
}

fn report_state(action: &str, result: Result<TaskbarState, TaskbarError>) -> bool {
    match result {
        Ok(state) => {
            debug!("{action}: {state:?}");
            state.is_on_taskbar()
        }
        Err(err) => {
            warn!("{action} could not be determined: {err}");
            false
        }
    }
}

fn init_logging() {
    let mut builder = Builder::new();
    builder.filter_level(LevelFilter::Error);

    if let Ok(level_str) = env::var("TASKBARVIS_LOG_LEVEL") {
        builder.parse_filters(&level_str);
    }

    if let Ok(path) = env::var("TASKBARVIS_LOG_FILE") {
        if let Ok(file) = File::create(&path) {
            builder.target(Target::Pipe(Box::new(file)));
        } else {
            eprintln!("Failed to create log file: {path}");
        }
    }

    let _ = builder.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{EX_APPWINDOW, EX_TOOLWINDOW, testing::MockControl};
    use crate::types::HandleKind;

    const MAIN: i64 = 0x100;
    const OTHER: i64 = 0x200;

    fn leaked(control: MockControl) -> &'static MockControl {
        Box::leak(Box::new(control))
    }

    fn test_resolver() -> HandleResolver {
        Box::new(|window, _kind| match window {
            0 => NativeHandle(MAIN),
            1 => NativeHandle(OTHER),
            _ => NativeHandle::NULL,
        })
    }

    fn instance_with_two_windows() -> (&'static MockControl, TaskbarVisInstance) {
        let control = MockControl::new();
        control.add_window(MAIN, EX_APPWINDOW);
        control.add_window(OTHER, EX_APPWINDOW);
        let control = leaked(control);
        (
            control,
            TaskbarVisInstance::with_control(control, Some(test_resolver())),
        )
    }

    #[test]
    fn fresh_window_show_hide_show_scenario() {
        let (_, instance) = instance_with_two_windows();

        assert!(instance.is_visible(Some(1)));
        assert!(instance.hide(Some(1)));
        assert!(!instance.is_visible(Some(1)));
        assert!(instance.show(Some(1)));
        assert!(instance.is_visible(Some(1)));
    }

    #[test]
    fn hide_is_idempotent_on_style_bits() {
        let (control, instance) = instance_with_two_windows();

        assert!(instance.hide(Some(1)));
        let once = control.ex_style(OTHER).unwrap();
        assert!(instance.hide(Some(1)));
        assert_eq!(control.ex_style(OTHER).unwrap(), once);
        assert_eq!(once & EX_TOOLWINDOW, EX_TOOLWINDOW);
    }

    #[test]
    fn null_window_reference_is_rejected() {
        let (control, instance) = instance_with_two_windows();

        assert!(!instance.hide(None));
        assert!(!instance.show(None));
        assert!(!instance.is_visible(None));
        // no mutation happened
        assert_eq!(control.ex_style(MAIN).unwrap(), EX_APPWINDOW);
        assert_eq!(control.ex_style(OTHER).unwrap(), EX_APPWINDOW);
    }

    #[test]
    fn unknown_window_id_fails_soft() {
        let (_, instance) = instance_with_two_windows();

        assert!(!instance.hide(Some(9)));
        assert!(matches!(
            instance.try_hide(Some(9)),
            Err(TaskbarError::Unresolved(9))
        ));
    }

    #[test]
    fn main_window_round_trip() {
        let (control, instance) = instance_with_two_windows();

        assert!(instance.is_main_window_visible());
        assert!(instance.hide_main_window());
        assert!(!instance.is_main_window_visible());
        assert!(instance.show_main_window());
        assert!(instance.is_main_window_visible());
        // primary lookup succeeded every time
        assert_eq!(control.enumerations(), 0);
    }

    #[test]
    fn main_window_ops_fall_back_without_resolver() {
        let mut control = MockControl::with_window(MAIN, EX_APPWINDOW);
        control.set_main_window(Some(MAIN));
        let control = leaked(control);
        let instance = TaskbarVisInstance::with_control(control, None);

        assert!(instance.hide_main_window());
        assert_eq!(control.enumerations(), 1);
        assert_eq!(
            control.ex_style(MAIN).unwrap() & EX_TOOLWINDOW,
            EX_TOOLWINDOW
        );
    }

    #[test]
    fn by_handle_ops_bypass_the_resolver() {
        let control = leaked(MockControl::with_window(OTHER, EX_APPWINDOW));
        // A resolver that would panic if consulted.
        let resolver: HandleResolver = Box::new(|_, _| panic!("resolver must not be called"));
        let instance = TaskbarVisInstance::with_control(control, Some(resolver));

        assert!(instance.is_window_visible_by_handle(NativeHandle(OTHER)));
        assert!(instance.hide_window_by_handle(NativeHandle(OTHER)));
        assert!(!instance.is_window_visible_by_handle(NativeHandle(OTHER)));
        assert!(instance.show_window_by_handle(NativeHandle(OTHER)));
        assert!(instance.is_window_visible_by_handle(NativeHandle(OTHER)));
    }

    #[test]
    fn by_handle_ops_reject_null_and_stale_handles() {
        let control = leaked(MockControl::new());
        let instance = TaskbarVisInstance::with_control(control, None);

        assert!(!instance.hide_window_by_handle(NativeHandle::NULL));
        assert!(matches!(
            instance.try_hide_window_by_handle(NativeHandle::NULL),
            Err(TaskbarError::MissingWindow)
        ));
        assert!(matches!(
            instance.try_show_window_by_handle(NativeHandle(0xdead)),
            Err(TaskbarError::StaleHandle(0xdead))
        ));
    }

    #[test]
    fn tri_state_distinguishes_excluded_from_unknown() {
        let (_, instance) = instance_with_two_windows();

        assert!(instance.hide(Some(1)));
        // boolean surface conflates the two...
        assert!(!instance.is_visible(Some(1)));
        assert!(!instance.is_visible(Some(9)));
        // ...the try_ surface does not
        assert!(matches!(
            instance.try_is_visible(Some(1)),
            Ok(TaskbarState::Excluded)
        ));
        assert!(matches!(
            instance.try_is_visible(Some(9)),
            Err(TaskbarError::Unresolved(9))
        ));
    }

    #[test]
    fn resolver_receives_window_handle_kind() {
        let control = leaked(MockControl::with_window(MAIN, EX_APPWINDOW));
        let resolver: HandleResolver = Box::new(|window, kind| {
            assert_eq!(kind, HandleKind::Window);
            assert_eq!(window, 0);
            NativeHandle(MAIN)
        });
        let instance = TaskbarVisInstance::with_control(control, Some(resolver));

        assert!(instance.is_main_window_visible());
    }

    #[cfg(not(windows))]
    mod unsupported_platform {
        use super::*;

        #[test]
        fn all_nine_operations_report_failure() {
            // A resolver that must never be consulted on an unsupported
            // platform; operations bail out before touching anything.
            let resolver: HandleResolver =
                Box::new(|_, _| panic!("resolver must not be called"));
            let instance = TaskbarVisInstance::with_resolver(Some(resolver));
            let handle = NativeHandle(0x42);

            assert!(!instance.hide(Some(1)));
            assert!(!instance.show(Some(1)));
            assert!(!instance.is_visible(Some(1)));
            assert!(!instance.hide_main_window());
            assert!(!instance.show_main_window());
            assert!(!instance.is_main_window_visible());
            assert!(!instance.hide_window_by_handle(handle));
            assert!(!instance.show_window_by_handle(handle));
            assert!(!instance.is_window_visible_by_handle(handle));

            assert!(matches!(
                instance.try_hide(Some(1)),
                Err(TaskbarError::Unsupported)
            ));
        }
    }
}
