//! Reference-counted input-block sessions.
//!
//! While at least one session is open the home button is blocked so a long
//! running operation (an install) cannot be interrupted. Sessions nest; the
//! block is taken when the first one opens and released when the last one
//! closes. Closing happens in `SessionGuard::drop`, so every exit path,
//! early returns and panics included, releases its session exactly once.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// How much of the home button is blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockMode {
    /// Both short and long presses.
    ShortAndLong,
    /// Short presses only, for systems that refuse the full block.
    ShortOnly,
}

/// Platform hook that actually blocks the button.
pub trait HomeButtonControl {
    /// Try to start blocking; `false` when the platform refuses.
    fn begin_block(&self, mode: BlockMode) -> bool;
    fn end_block(&self, mode: BlockMode);
}

#[derive(Debug, Default)]
struct SessionState {
    depth: usize,
    /// Block currently held, if any.
    block: Option<BlockMode>,
}

/// Tracks open sessions and the block they hold.
pub struct SessionControl<C> {
    control: C,
    state: Mutex<SessionState>,
    active: AtomicBool,
}

impl<C: HomeButtonControl> SessionControl<C> {
    pub fn new(control: C) -> Self {
        Self {
            control,
            state: Mutex::new(SessionState::default()),
            active: AtomicBool::new(false),
        }
    }

    /// Open a session; it stays open until the guard is dropped.
    pub fn begin(&self) -> SessionGuard<'_, C> {
        let mut state = self.lock();
        if state.block.is_none() {
            state.block = [BlockMode::ShortAndLong, BlockMode::ShortOnly]
                .into_iter()
                .find(|&mode| self.control.begin_block(mode));
            if state.block.is_none() {
                tracing::warn!("home button block refused; session continues unblocked");
            }
        }
        state.depth += 1;
        self.active.store(true, Ordering::Relaxed);
        tracing::debug!(depth = state.depth, block = ?state.block, "session opened");
        SessionGuard { sessions: self }
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Relaxed)
    }

    /// Number of open sessions.
    pub fn depth(&self) -> usize {
        self.lock().depth
    }

    pub fn control(&self) -> &C {
        &self.control
    }

    fn end(&self) {
        let mut state = self.lock();
        state.depth = state.depth.saturating_sub(1);
        if state.depth == 0 {
            if let Some(mode) = state.block.take() {
                self.control.end_block(mode);
            }
            self.active.store(false, Ordering::Relaxed);
        }
        tracing::debug!(depth = state.depth, "session closed");
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SessionState> {
        // The state stays consistent even if a holder panicked.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Open session; dropping it closes the session.
#[must_use = "the session closes as soon as the guard is dropped"]
pub struct SessionGuard<'a, C: HomeButtonControl> {
    sessions: &'a SessionControl<C>,
}

impl<C: HomeButtonControl> Drop for SessionGuard<'_, C> {
    fn drop(&mut self) {
        self.sessions.end();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        refuse: Vec<BlockMode>,
        calls: RefCell<Vec<String>>,
    }

    impl HomeButtonControl for Recorder {
        fn begin_block(&self, mode: BlockMode) -> bool {
            self.calls.borrow_mut().push(format!("begin {mode:?}"));
            !self.refuse.contains(&mode)
        }

        fn end_block(&self, mode: BlockMode) {
            self.calls.borrow_mut().push(format!("end {mode:?}"));
        }
    }

    fn calls(sessions: &SessionControl<Recorder>) -> Vec<String> {
        sessions.control().calls.borrow().clone()
    }

    #[test]
    fn nested_sessions_block_once() {
        let sessions = SessionControl::new(Recorder::default());
        assert!(!sessions.is_active());
        {
            let _outer = sessions.begin();
            {
                let _inner = sessions.begin();
                assert_eq!(sessions.depth(), 2);
            }
            assert!(sessions.is_active());
            assert_eq!(calls(&sessions), ["begin ShortAndLong"]);
        }
        assert!(!sessions.is_active());
        assert_eq!(sessions.depth(), 0);
        assert_eq!(calls(&sessions), ["begin ShortAndLong", "end ShortAndLong"]);
    }

    #[test]
    fn falls_back_to_short_only() {
        let recorder = Recorder { refuse: vec![BlockMode::ShortAndLong], ..Recorder::default() };
        let sessions = SessionControl::new(recorder);
        drop(sessions.begin());
        assert_eq!(
            calls(&sessions),
            ["begin ShortAndLong", "begin ShortOnly", "end ShortOnly"]
        );
    }

    #[test]
    fn refused_block_still_tracks_session() {
        let recorder = Recorder {
            refuse: vec![BlockMode::ShortAndLong, BlockMode::ShortOnly],
            ..Recorder::default()
        };
        let sessions = SessionControl::new(recorder);
        let guard = sessions.begin();
        assert!(sessions.is_active());
        drop(guard);
        assert!(!sessions.is_active());
        // Nothing was blocked, so nothing is released.
        assert_eq!(calls(&sessions), ["begin ShortAndLong", "begin ShortOnly"]);
    }

    #[test]
    fn early_return_releases_session() {
        fn install(sessions: &SessionControl<Recorder>, fail: bool) -> Result<(), &'static str> {
            let _session = sessions.begin();
            if fail {
                return Err("write failed");
            }
            Ok(())
        }

        let sessions = SessionControl::new(Recorder::default());
        assert!(install(&sessions, true).is_err());
        assert!(!sessions.is_active());
        assert!(install(&sessions, false).is_ok());
        assert_eq!(sessions.depth(), 0);
    }
}
