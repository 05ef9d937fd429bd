mod controller;
mod driver;
mod epoch;
mod progress;
mod state;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use controller::{
    AnswerFeedback, DeferredOutcome, QuizSessionController, SubmittedAnswer, TickOutcome,
};
pub use driver::{CountdownEnd, SessionHandle, SharedController, run_countdown, schedule_advance};
pub use epoch::{DeferredAdvance, SessionEpoch};
pub use progress::SessionProgress;
pub use state::SessionSnapshot;
