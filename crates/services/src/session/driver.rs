//! Wall-clock glue: turns elapsed time into `tick` and `apply_deferred` calls.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info};

use super::controller::{DeferredOutcome, QuizSessionController, TickOutcome};
use super::epoch::{DeferredAdvance, SessionEpoch};

/// Access to a controller owned by someone else (a UI signal, a mutex, ...).
///
/// Implementations must not hold the borrow across an `.await`; the driver
/// only calls `with_session` for one synchronous step at a time.
pub trait SessionHandle {
    fn with_session<R>(&self, f: impl FnOnce(&mut QuizSessionController) -> R) -> R;
}

/// Thread-safe owner for callers outside a UI runtime.
pub type SharedController = Arc<Mutex<QuizSessionController>>;

impl SessionHandle for SharedController {
    fn with_session<R>(&self, f: impl FnOnce(&mut QuizSessionController) -> R) -> R {
        let mut guard = self.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}

/// Why a countdown loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownEnd {
    /// Time ran out and the quiz was finished by the timer.
    Expired,
    /// The quiz finished by answering (or was never running).
    Idle,
    /// The session was reset; a newer countdown owns the clock now.
    Superseded,
}

/// Tick the controller every `interval` for the session identified by `epoch`.
///
/// The first tick fires one full interval after the call.
pub async fn run_countdown<H: SessionHandle>(
    handle: H,
    epoch: SessionEpoch,
    interval: Duration,
) -> CountdownEnd {
    let mut ticker = tokio::time::interval_at(Instant::now() + interval, interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    debug!(%epoch, ?interval, "countdown started");

    loop {
        ticker.tick().await;
        let outcome = handle.with_session(|session| {
            if session.epoch() != epoch {
                return None;
            }
            Some(session.tick())
        });

        match outcome {
            None => {
                debug!(%epoch, "countdown superseded by reset");
                return CountdownEnd::Superseded;
            }
            Some(TickOutcome::Running { .. }) => {}
            Some(TickOutcome::Expired) => {
                info!(%epoch, "countdown expired");
                return CountdownEnd::Expired;
            }
            Some(TickOutcome::Idle) => {
                debug!(%epoch, "countdown stopped, session idle");
                return CountdownEnd::Idle;
            }
        }
    }
}

/// Wait out the feedback delay, then apply the advance.
pub async fn schedule_advance<H: SessionHandle>(
    handle: H,
    advance: DeferredAdvance,
    delay: Duration,
) -> DeferredOutcome {
    tokio::time::sleep(delay).await;
    let outcome = handle.with_session(|session| session.apply_deferred(advance));
    debug!(?advance, ?outcome, "deferred advance fired");
    outcome
}
