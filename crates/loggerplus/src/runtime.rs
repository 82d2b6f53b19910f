//! Runtime introspection: debug-mode detection
//!
//! Debug mode is a process-wide flag derived from environment variables and
//! from whether a debugger is attached. A packaged build (AppImage, Snap) is
//! never in debug mode, no matter what the environment says.

use std::env;

/// Set to anything non-empty to force debug mode
pub const DEBUG_ENV: &str = "LOGGERPLUS_DEBUG";

/// Forces debug mode when set to exactly `1`
pub const DEBUG_MODE_ENV: &str = "DEBUG_MODE";

/// Environment markers left by bundled-runtime launchers
const PACKAGED_MARKERS: &[&str] = &["APPIMAGE", "SNAP"];

/// Whether the process should behave as if under active development
///
/// True when [`DEBUG_ENV`] is set non-empty, [`DEBUG_MODE_ENV`] equals `1`,
/// or a debugger is attached. Always false in a packaged runtime.
pub fn is_debug_mode() -> bool {
    debug_mode_from(env_lookup, debugger_attached())
}

/// Whether the process runs from a bundled build such as an AppImage or Snap
pub fn is_packaged_runtime() -> bool {
    packaged_from(env_lookup)
}

fn env_lookup(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn debug_mode_from(lookup: impl Fn(&str) -> Option<String>, tracer: bool) -> bool {
    if packaged_from(&lookup) {
        return false;
    }
    if lookup(DEBUG_ENV).map_or(false, |v| !v.is_empty()) {
        return true;
    }
    if lookup(DEBUG_MODE_ENV).as_deref() == Some("1") {
        return true;
    }
    tracer
}

fn packaged_from(lookup: impl Fn(&str) -> Option<String>) -> bool {
    PACKAGED_MARKERS
        .iter()
        .any(|key| lookup(key).map_or(false, |v| !v.is_empty()))
}

/// Whether a debugger is attached to this process
///
/// On Linux the kernel exposes the tracer's pid in `/proc/self/status`.
/// Other platforms report false.
#[cfg(target_os = "linux")]
pub fn debugger_attached() -> bool {
    match std::fs::read_to_string("/proc/self/status") {
        Ok(status) => tracer_pid(&status).map_or(false, |pid| pid != 0),
        Err(_) => false,
    }
}

#[cfg(not(target_os = "linux"))]
pub fn debugger_attached() -> bool {
    false
}

#[cfg(target_os = "linux")]
fn tracer_pid(status: &str) -> Option<u32> {
    status
        .lines()
        .find_map(|line| line.strip_prefix("TracerPid:"))
        .and_then(|rest| rest.trim().parse().ok())
}
