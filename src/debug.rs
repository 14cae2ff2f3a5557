//! Trace logging behind the global `--debug` flag
//!
//! The resolver emits `[DEBUG]` lines on stderr while walking the
//! compatibility expansion and scanning rules. The flag latches on first
//! initialization and the macro compiles to a single branch when it is off.

use std::sync::OnceLock;

static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

/// Latch debug mode from the command-line flag or environment.
///
/// Later calls are ignored; the first initialization wins.
pub fn init_debug(enabled: bool) {
    let _ = DEBUG_ENABLED.set(enabled);
}

/// Whether debug tracing is on. False until [`init_debug`] runs.
pub fn is_debug_enabled() -> bool {
    DEBUG_ENABLED.get().copied().unwrap_or(false)
}

/// Print a `[DEBUG]` line on stderr when tracing is on.
///
/// Usage: `debug!("message with {}", variable)`
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        if $crate::debug::is_debug_enabled() {
            eprintln!("[DEBUG] {}", format_args!($($arg)*));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latches_the_first_initialization() {
        assert!(!is_debug_enabled());
        init_debug(true);
        assert!(is_debug_enabled());
        init_debug(false);
        assert!(is_debug_enabled());
    }
}
