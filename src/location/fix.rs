// src/location/fix.rs
//! Single-shot location fix handle
//!
//! A one-shot location request resolves at most once. The handle is a
//! single-assignment result cell: the platform callback side holds a
//! [`FixResolver`], the waiting side blocks on [`PendingFix::wait`]. The
//! first resolution wins; cancellation is cooperative and only stops the
//! wait, it does not tear down the underlying platform listener.

use crate::error::{GeoError, Result};
use crate::location::sample::LocationSample;
use std::sync::{Arc, Condvar, Mutex};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
enum FixState {
    Pending,
    Resolved(LocationSample),
    Cancelled,
}

#[derive(Debug)]
struct FixCell {
    state: Mutex<FixState>,
    cond: Condvar,
}

/// Waitable handle for an in-flight one-shot location request.
///
/// Terminal once resolved or cancelled; a new request always creates a
/// new handle.
#[derive(Debug, Clone)]
pub struct PendingFix {
    cell: Arc<FixCell>,
}

/// Callback-side writer for a [`PendingFix`]. Clone it into whatever
/// thread or task delivers the location update.
#[derive(Debug, Clone)]
pub struct FixResolver {
    cell: Arc<FixCell>,
}

impl PendingFix {
    /// Create a fresh pending handle and its resolver.
    pub fn new() -> (PendingFix, FixResolver) {
        let cell = Arc::new(FixCell {
            state: Mutex::new(FixState::Pending),
            cond: Condvar::new(),
        });

        (
            PendingFix { cell: Arc::clone(&cell) },
            FixResolver { cell },
        )
    }

    /// Block until the fix resolves, the handle is cancelled, or the
    /// timeout elapses.
    ///
    /// Timeout leaves the handle pending; calling `wait` again with a
    /// fresh timeout is legal. Cancellation is observed promptly even if
    /// it happens mid-wait.
    pub fn wait(&self, timeout: Duration) -> Result<LocationSample> {
        let deadline = Instant::now() + timeout;
        let mut state = self.cell.state.lock().unwrap();

        loop {
            match &*state {
                FixState::Resolved(sample) => return Ok(sample.clone()),
                FixState::Cancelled => return Err(GeoError::FixCancelled),
                FixState::Pending => {}
            }

            let now = Instant::now();
            if now >= deadline {
                return Err(GeoError::FixTimedOut);
            }

            let (guard, _) = self
                .cell
                .cond
                .wait_timeout(state, deadline - now)
                .unwrap();
            state = guard;
        }
    }

    /// Cooperatively cancel the request. Only a pending handle moves to
    /// cancelled; a resolved handle keeps its value. The caller is still
    /// responsible for removing any platform listener.
    pub fn cancel(&self) {
        let mut state = self.cell.state.lock().unwrap();
        if matches!(*state, FixState::Pending) {
            *state = FixState::Cancelled;
            self.cell.cond.notify_all();
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(*self.cell.state.lock().unwrap(), FixState::Resolved(_))
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(*self.cell.state.lock().unwrap(), FixState::Cancelled)
    }
}

impl FixResolver {
    /// Deliver the fix. The first call on a pending handle wins and
    /// returns `true`; later calls, or calls after cancellation, are
    /// ignored and return `false`.
    pub fn resolve(&self, sample: LocationSample) -> bool {
        let mut state = self.cell.state.lock().unwrap();
        if matches!(*state, FixState::Pending) {
            *state = FixState::Resolved(sample);
            self.cell.cond.notify_all();
            true
        } else {
            false
        }
    }
}
