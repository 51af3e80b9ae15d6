//! Emit/suppress decision
//!
//! A record is emitted when the process-wide debug flag is set, or else when
//! the sink itself accepts its severity. The flag lets a host force full
//! verbosity during development without reconfiguring the sink.

use super::Severity;
use std::sync::atomic::{AtomicBool, Ordering};

/// Process-wide debug override. Defaults to off.
///
/// Reads and writes are `Relaxed`: a decision made with a momentarily stale
/// value is acceptable. Hosts that need a strict ordering must set the flag
/// before spawning log-producing threads.
static DEBUG: AtomicBool = AtomicBool::new(false);

/// Set the debug override
pub fn set_debug(enabled: bool) {
    DEBUG.store(enabled, Ordering::Relaxed);
}

/// Current value of the debug override
pub fn debug_enabled() -> bool {
    DEBUG.load(Ordering::Relaxed)
}

/// Decide whether a record of `severity` should be emitted
///
/// `sink_threshold_check` is only called when the debug override is off, and
/// its answer is returned unchanged.
pub fn should_emit(severity: Severity, sink_threshold_check: impl FnOnce(Severity) -> bool) -> bool {
    debug_enabled() || sink_threshold_check(severity)
}

/// Serializes unit tests that flip the process-wide flag
#[cfg(test)]
pub(crate) static TEST_FLAG_LOCK: parking_lot::Mutex<()> = parking_lot::const_mutex(());

/// Holds `TEST_FLAG_LOCK` with the flag set; clears the flag on drop, even
/// when the test panics
#[cfg(test)]
pub(crate) struct DebugFlagGuard {
    _lock: parking_lot::MutexGuard<'static, ()>,
}

#[cfg(test)]
impl DebugFlagGuard {
    pub(crate) fn set(enabled: bool) -> Self {
        let lock = TEST_FLAG_LOCK.lock();
        set_debug(enabled);
        Self { _lock: lock }
    }
}

#[cfg(test)]
impl Drop for DebugFlagGuard {
    fn drop(&mut self) {
        set_debug(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::Cell;

    fn severity() -> impl Strategy<Value = Severity> {
        proptest::sample::select(Severity::ALL.to_vec())
    }

    #[test]
    fn test_debug_on_skips_sink_check() {
        let _guard = DebugFlagGuard::set(true);

        let called = Cell::new(false);
        let decision = should_emit(Severity::Trace, |_| {
            called.set(true);
            false
        });

        assert!(decision);
        assert!(!called.get());
    }

    #[test]
    fn test_debug_off_passes_severity_to_check() {
        let _guard = DebugFlagGuard::set(false);

        let seen = Cell::new(None);
        should_emit(Severity::Warn, |s| {
            seen.set(Some(s));
            true
        });
        assert_eq!(seen.get(), Some(Severity::Warn));
    }

    #[test]
    fn test_flag_round_trip() {
        let _guard = DebugFlagGuard::set(true);
        assert!(debug_enabled());
        set_debug(false);
        assert!(!debug_enabled());
    }

    #[test]
    fn test_guard_clears_flag_after_panic() {
        let outcome = std::panic::catch_unwind(|| {
            let _guard = DebugFlagGuard::set(true);
            panic!("test body failed");
        });
        assert!(outcome.is_err());

        let _guard = TEST_FLAG_LOCK.lock();
        assert!(!debug_enabled());
    }

    proptest! {
        #[test]
        fn prop_debug_on_always_emits(sev in severity(), answer in any::<bool>()) {
            let _guard = DebugFlagGuard::set(true);
            prop_assert!(should_emit(sev, |_| answer));
        }

        #[test]
        fn prop_debug_off_equals_sink(sev in severity(), threshold in severity()) {
            let _guard = DebugFlagGuard::set(false);
            prop_assert_eq!(should_emit(sev, |s| s >= threshold), sev >= threshold);
        }
    }
}
