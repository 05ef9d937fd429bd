//! The window's quiz session, shared through Dioxus context.

use dioxus::prelude::*;
use quiz_core::Clock;
use services::session::{run_countdown, schedule_advance};
use services::{
    CertificateSummary, QuizSessionController, SessionError, SessionHandle, SessionSnapshot,
};
use tracing::debug;

use crate::context::AppContext;

/// Reactive owner of the controller. Writes re-render every reader.
#[derive(Clone, Copy, PartialEq)]
pub struct SessionSignal(Signal<QuizSessionController>);

impl SessionSignal {
    /// Current state; subscribes the calling component to changes.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.0.read().snapshot()
    }

    /// Certificate data for a finished quiz. Does not subscribe.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotFinished` while the quiz is still running.
    pub fn certificate_summary(&self, clock: &Clock) -> Result<CertificateSummary, SessionError> {
        self.0.peek().certificate_summary(clock)
    }
}

impl SessionHandle for SessionSignal {
    fn with_session<R>(&self, f: impl FnOnce(&mut QuizSessionController) -> R) -> R {
        let mut signal = self.0;
        let mut session = signal.write();
        f(&mut *session)
    }
}

/// User intents, bound to the root scope so timers outlive any one screen.
#[derive(Clone, Copy, PartialEq)]
pub struct SessionActions {
    pub pick_character: Callback<usize>,
    pub select_answer: Callback<usize>,
    pub submit: Callback<()>,
    pub reset: Callback<()>,
}

/// Create the session for this component tree and expose it as context.
pub fn use_session_provider(ctx: &AppContext) -> SessionSignal {
    let catalog = ctx.catalog();
    let settings = ctx.settings();
    provide_session(move || QuizSessionController::new(catalog, settings))
}

pub(crate) fn provide_session(init: impl FnOnce() -> QuizSessionController) -> SessionSignal {
    let signal = use_signal(init);
    let session = use_context_provider(|| SessionSignal(signal));
    let settings = signal.peek().settings();

    let pick_character = use_callback(move |index: usize| {
        match session.with_session(|s| s.select_character_at(index).map(|()| s.epoch())) {
            Ok(epoch) => {
                spawn(async move {
                    let end = run_countdown(session, epoch, settings.tick_interval()).await;
                    debug!(%epoch, ?end, "countdown finished");
                });
            }
            Err(err) => debug!(index, error = %err, "character pick ignored"),
        }
    });

    let select_answer = use_callback(move |index: usize| {
        if let Err(err) = session.with_session(|s| s.select_answer(index)) {
            debug!(index, error = %err, "answer selection ignored");
        }
    });

    let submit = use_callback(move |()| match session.with_session(|s| s.submit_answer()) {
        Ok(submitted) => {
            spawn(async move {
                schedule_advance(session, submitted.advance, settings.feedback_delay()).await;
            });
        }
        Err(err) => debug!(error = %err, "submit ignored"),
    });

    let reset = use_callback(move |()| session.with_session(QuizSessionController::reset));

    use_context_provider(|| SessionActions {
        pick_character,
        select_answer,
        submit,
        reset,
    });
    session
}
