use std::fmt;
use std::sync::Arc;

use quiz_core::model::{Character, OPTION_COUNT, Question, QuizSettings, ResultTier, percentage};
use quiz_core::{Catalog, Clock};
use tracing::{debug, info, trace};

use super::epoch::{DeferredAdvance, SessionEpoch};
use super::progress::SessionProgress;
use super::state::{SessionSnapshot, SessionState};
use crate::certificate::CertificateSummary;
use crate::error::SessionError;

//
// ─── OUTCOMES ──────────────────────────────────────────────────────────────────
//

/// Immediate feedback shown while the deferred advance is pending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerFeedback {
    Correct,
    Incorrect { correct_option: String },
}

impl AnswerFeedback {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct)
    }

    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Correct => "Correct! Well done!".to_string(),
            Self::Incorrect { correct_option } => {
                format!("Oops! The correct answer was: {correct_option}")
            }
        }
    }
}

/// Result of a committed answer: what to show now, and what to apply later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedAnswer {
    pub feedback: AnswerFeedback,
    pub advance: DeferredAdvance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredOutcome {
    /// Moved on to the question at `index`.
    Advanced { index: usize },
    /// The last question was answered; results are showing.
    Finished,
    /// Reset, expiry or a newer advance got there first.
    Stale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Running { remaining: u32 },
    Expired,
    /// Not started yet, or already finished.
    Idle,
}

//
// ─── CONTROLLER ────────────────────────────────────────────────────────────────
//

/// Single writer of a quiz session.
///
/// Everything here is synchronous. Wall-clock scheduling lives in the driver,
/// which feeds `tick` and `apply_deferred` back in; the epoch makes any work
/// scheduled before a `reset` harmless.
pub struct QuizSessionController {
    catalog: Arc<Catalog>,
    settings: QuizSettings,
    state: SessionState,
    epoch: SessionEpoch,
}

impl QuizSessionController {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, settings: QuizSettings) -> Self {
        Self {
            catalog,
            settings,
            state: SessionState::new(settings.time_limit_secs()),
            epoch: SessionEpoch::default(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn settings(&self) -> QuizSettings {
        self.settings
    }

    #[must_use]
    pub fn epoch(&self) -> SessionEpoch {
        self.epoch
    }

    #[must_use]
    pub fn selected_character(&self) -> Option<&Character> {
        self.state.selected_character.as_ref()
    }

    #[must_use]
    pub fn quiz_started(&self) -> bool {
        self.state.quiz_started
    }

    #[must_use]
    pub fn show_result(&self) -> bool {
        self.state.show_result
    }

    #[must_use]
    pub fn current_question_index(&self) -> usize {
        self.state.current_question_index
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.catalog.question(self.state.current_question_index)
    }

    #[must_use]
    pub fn selected_answer_index(&self) -> Option<usize> {
        self.state.selected_answer_index
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.state.is_submitted
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.state.score
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        u32::try_from(self.catalog.question_count()).unwrap_or(u32::MAX)
    }

    #[must_use]
    pub fn time_remaining_secs(&self) -> u32 {
        self.state.time_remaining_secs
    }

    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.state.show_result && self.state.score == self.total()
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        let total = self.catalog.question_count();
        let current = self.state.current_question_index;
        let percent = u32::try_from(current)
            .ok()
            .and_then(|current| percentage(current, self.total()))
            .unwrap_or(0.0);
        SessionProgress {
            total,
            current,
            remaining: total.saturating_sub(current),
            percent,
            is_complete: self.state.show_result,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            selected_character: self.state.selected_character.clone(),
            quiz_started: self.state.quiz_started,
            show_result: self.state.show_result,
            current_question_index: self.state.current_question_index,
            question: self.current_question().cloned(),
            selected_answer_index: self.state.selected_answer_index,
            is_submitted: self.state.is_submitted,
            score: self.state.score,
            total: self.total(),
            time_remaining_secs: self.state.time_remaining_secs,
        }
    }

    /// Choose the persona for this session and start the quiz.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AlreadyStarted` if a character is already chosen.
    pub fn select_character(&mut self, character: Character) -> Result<(), SessionError> {
        if self.state.selected_character.is_some() {
            debug!(epoch = %self.epoch, "character already selected");
            return Err(SessionError::AlreadyStarted);
        }

        info!(epoch = %self.epoch, character = character.name(), "quiz started");
        self.state.selected_character = Some(character);
        self.state.quiz_started = true;
        Ok(())
    }

    /// Choose a character from the catalog by position.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::UnknownCharacter` for indices outside the catalog,
    /// or whatever `select_character` returns.
    pub fn select_character_at(&mut self, index: usize) -> Result<(), SessionError> {
        let character = self
            .catalog
            .character(index)
            .cloned()
            .ok_or(SessionError::UnknownCharacter { index })?;
        self.select_character(character)
    }

    /// Mark an option as the pending answer. Later calls replace earlier ones.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` when the quiz is not running, the answer is
    /// already committed, or `index` is not an option.
    pub fn select_answer(&mut self, index: usize) -> Result<(), SessionError> {
        self.ensure_active()?;
        if self.state.is_submitted {
            debug!(index, "answer locked after submission");
            return Err(SessionError::AnswerLocked);
        }
        if index >= OPTION_COUNT {
            debug!(index, "option out of range");
            return Err(SessionError::OptionOutOfRange {
                index,
                len: OPTION_COUNT,
            });
        }

        self.state.selected_answer_index = Some(index);
        Ok(())
    }

    /// Commit the selected answer and score it.
    ///
    /// The returned `DeferredAdvance` must be handed to `apply_deferred` once
    /// the feedback delay has passed.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` when nothing is selected, the answer was already
    /// submitted, or the quiz is not running.
    pub fn submit_answer(&mut self) -> Result<SubmittedAnswer, SessionError> {
        self.ensure_active()?;
        if self.state.is_submitted {
            debug!("duplicate submit ignored");
            return Err(SessionError::AlreadySubmitted);
        }
        let Some(selected) = self.state.selected_answer_index else {
            return Err(SessionError::NoAnswerSelected);
        };
        let question = self
            .catalog
            .question(self.state.current_question_index)
            .ok_or(SessionError::Finished)?;

        let feedback = if question.is_correct(selected) {
            AnswerFeedback::Correct
        } else {
            AnswerFeedback::Incorrect {
                correct_option: question.correct_option().to_string(),
            }
        };

        self.state.is_submitted = true;
        if feedback.is_correct() {
            self.state.score = self.state.score.saturating_add(1);
        }
        debug!(
            question = self.state.current_question_index,
            selected,
            correct = feedback.is_correct(),
            score = self.state.score,
            "answer submitted"
        );

        Ok(SubmittedAnswer {
            feedback,
            advance: DeferredAdvance {
                epoch: self.epoch,
                question_index: self.state.current_question_index,
            },
        })
    }

    /// Apply the post-feedback step scheduled by `submit_answer`.
    ///
    /// A no-op returning `DeferredOutcome::Stale` if the session was reset,
    /// already finished, or has moved past the captured question.
    pub fn apply_deferred(&mut self, advance: DeferredAdvance) -> DeferredOutcome {
        if advance.epoch != self.epoch
            || self.state.show_result
            || !self.state.is_submitted
            || advance.question_index != self.state.current_question_index
        {
            trace!(?advance, current = ?self.epoch, "discarding stale advance");
            return DeferredOutcome::Stale;
        }

        let last_index = self.catalog.question_count().saturating_sub(1);
        if self.state.current_question_index >= last_index {
            self.state.show_result = true;
            info!(
                epoch = %self.epoch,
                score = self.state.score,
                total = self.total(),
                "quiz finished"
            );
            return DeferredOutcome::Finished;
        }

        self.state.current_question_index += 1;
        self.state.selected_answer_index = None;
        self.state.is_submitted = false;
        DeferredOutcome::Advanced {
            index: self.state.current_question_index,
        }
    }

    /// One second of countdown. Ends the quiz when the clock reaches zero.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.state.is_active() {
            return TickOutcome::Idle;
        }

        self.state.time_remaining_secs = self.state.time_remaining_secs.saturating_sub(1);
        if self.state.time_remaining_secs == 0 {
            self.state.show_result = true;
            info!(
                epoch = %self.epoch,
                score = self.state.score,
                question = self.state.current_question_index,
                "time expired"
            );
            return TickOutcome::Expired;
        }

        trace!(remaining = self.state.time_remaining_secs, "tick");
        TickOutcome::Running {
            remaining: self.state.time_remaining_secs,
        }
    }

    /// Back to the character picker. Invalidates all pending deferred work.
    pub fn reset(&mut self) {
        self.state = SessionState::new(self.settings.time_limit_secs());
        self.epoch = self.epoch.next();
        info!(epoch = %self.epoch, "session reset");
    }

    #[must_use]
    pub fn result_tier(&self) -> ResultTier {
        ResultTier::from_score(self.state.score, self.total())
    }

    #[must_use]
    pub fn compute_result_message(&self) -> &'static str {
        self.result_tier().message()
    }

    /// Summary printed on the completion certificate.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotFinished` before results are showing.
    pub fn certificate_summary(&self, clock: &Clock) -> Result<CertificateSummary, SessionError> {
        if !self.state.show_result {
            return Err(SessionError::NotFinished);
        }
        let character = self
            .state
            .selected_character
            .as_ref()
            .ok_or(SessionError::NotStarted)?;

        Ok(CertificateSummary {
            character_name: character.name().to_string(),
            score: self.state.score,
            total: self.total(),
            time_remaining_formatted: self.snapshot().time_remaining_formatted(),
            date_stamp: clock.date_stamp(),
        })
    }

    fn ensure_active(&self) -> Result<(), SessionError> {
        if !self.state.quiz_started {
            return Err(SessionError::NotStarted);
        }
        if self.state.show_result {
            return Err(SessionError::Finished);
        }
        Ok(())
    }
}

impl fmt::Debug for QuizSessionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSessionController")
            .field("epoch", &self.epoch)
            .field("questions", &self.catalog.question_count())
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
