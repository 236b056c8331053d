use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Session-wide console state: the two advisory in-flight flags and the
/// shared error-display slot.
///
/// The flags gate *new* mutating actions only; they cannot abort a call that
/// has already been issued. All mutation goes through the setters here, so
/// no component touches the atomics directly.
#[derive(Debug, Default)]
pub struct ConsoleState {
    call_in_flight: AtomicBool,
    refresh_in_flight: AtomicBool,
    last_error: Mutex<Option<String>>,
}

impl ConsoleState {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// True while a mutating call or a refresh is in flight.
    pub fn is_busy(&self) -> bool {
        self.call_in_flight.load(Ordering::SeqCst) || self.refresh_in_flight.load(Ordering::SeqCst)
    }

    pub fn call_in_flight(&self) -> bool {
        self.call_in_flight.load(Ordering::SeqCst)
    }

    pub fn refresh_in_flight(&self) -> bool {
        self.refresh_in_flight.load(Ordering::SeqCst)
    }

    /// Open the mutating-call gate. Fails when either flag is already set.
    /// The returned guard clears the flag on drop, error paths included.
    pub fn try_begin_call(self: &Arc<Self>) -> Option<CallGuard> {
        if self.refresh_in_flight.load(Ordering::SeqCst) {
            return None;
        }
        if self
            .call_in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return None;
        }
        Some(CallGuard {
            state: Arc::clone(self),
        })
    }

    /// Open the refresh gate. A refresh only excludes a concurrent refresh;
    /// it does not wait out a mutating call.
    pub fn try_begin_refresh(self: &Arc<Self>) -> Option<RefreshGuard> {
        if self
            .refresh_in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return None;
        }
        Some(RefreshGuard {
            state: Arc::clone(self),
        })
    }

    pub fn set_error(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(%message, "console error");
        *self.last_error.lock().expect("error slot poisoned") = Some(message);
    }

    /// Take the pending error message, clearing the slot.
    pub fn take_error(&self) -> Option<String> {
        self.last_error.lock().expect("error slot poisoned").take()
    }
}

/// RAII guard for the mutating-call flag.
#[derive(Debug)]
pub struct CallGuard {
    state: Arc<ConsoleState>,
}

impl Drop for CallGuard {
    fn drop(&mut self) {
        self.state.call_in_flight.store(false, Ordering::SeqCst);
    }
}

/// RAII guard for the refresh flag.
#[derive(Debug)]
pub struct RefreshGuard {
    state: Arc<ConsoleState>,
}

impl Drop for RefreshGuard {
    fn drop(&mut self) {
        self.state.refresh_in_flight.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_gate_is_exclusive() {
        let state = ConsoleState::new();
        let guard = state.try_begin_call().unwrap();
        assert!(state.is_busy());
        assert!(state.try_begin_call().is_none());
        drop(guard);
        assert!(!state.is_busy());
        assert!(state.try_begin_call().is_some());
    }

    #[test]
    fn refresh_blocks_calls_but_not_vice_versa() {
        let state = ConsoleState::new();
        let refresh = state.try_begin_refresh().unwrap();
        assert!(state.try_begin_call().is_none());
        // A second refresh is rejected while one is running.
        assert!(state.try_begin_refresh().is_none());
        drop(refresh);

        // A mutating call does not exclude a refresh.
        let _call = state.try_begin_call().unwrap();
        assert!(state.try_begin_refresh().is_some());
    }

    #[test]
    fn error_slot_is_take_once() {
        let state = ConsoleState::new();
        state.set_error("launch failed");
        assert_eq!(state.take_error().as_deref(), Some("launch failed"));
        assert_eq!(state.take_error(), None);
    }
}
