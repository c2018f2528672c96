//! Single-flight guard for user-triggered actions.
//!
//! A screen action (submit, download, benchmark run) holds a token for its
//! whole duration. A second trigger while the token is alive is rejected
//! immediately rather than queued.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode};

#[derive(Debug, Clone, Default)]
pub struct InFlightGuard {
    busy: Arc<AtomicBool>,
}

impl InFlightGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the guard; `None` if an action is already running.
    pub fn try_begin(&self) -> Option<InFlightToken> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlightToken {
                busy: Arc::clone(&self.busy),
            })
    }

    /// Like `try_begin`, but rejects with `AlreadyInProgress`.
    pub fn begin(&self, action: &str) -> Result<InFlightToken, DomainError> {
        self.try_begin().ok_or_else(|| {
            tracing::warn!(action, "Rejected trigger while a previous one is running");
            DomainError::new(ErrorCode::AlreadyInProgress, "Operación en curso, espera un momento.")
                .with_detail("action", action)
        })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// Releases the guard on drop, including on early return and panic unwind.
#[derive(Debug)]
pub struct InFlightToken {
    busy: Arc<AtomicBool>,
}

impl Drop for InFlightToken {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}
