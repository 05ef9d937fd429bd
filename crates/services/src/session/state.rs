use quiz_core::model::{Character, Question};
use quiz_core::time::format_countdown;

use super::controller::AnswerFeedback;

/// Mutable per-session fields. Only the controller writes these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SessionState {
    pub(crate) selected_character: Option<Character>,
    pub(crate) current_question_index: usize,
    pub(crate) selected_answer_index: Option<usize>,
    pub(crate) is_submitted: bool,
    pub(crate) score: u32,
    pub(crate) time_remaining_secs: u32,
    pub(crate) quiz_started: bool,
    pub(crate) show_result: bool,
}

impl SessionState {
    pub(crate) fn new(time_limit_secs: u32) -> Self {
        Self {
            selected_character: None,
            current_question_index: 0,
            selected_answer_index: None,
            is_submitted: false,
            score: 0,
            time_remaining_secs: time_limit_secs,
            quiz_started: false,
            show_result: false,
        }
    }

    pub(crate) fn is_active(&self) -> bool {
        self.quiz_started && !self.show_result
    }
}

/// Read-only copy of the session handed to renderers on each redraw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub selected_character: Option<Character>,
    pub quiz_started: bool,
    pub show_result: bool,
    pub current_question_index: usize,
    pub question: Option<Question>,
    pub selected_answer_index: Option<usize>,
    pub is_submitted: bool,
    pub score: u32,
    pub total: u32,
    pub time_remaining_secs: u32,
}

impl SessionSnapshot {
    /// Remaining time as `M:SS`.
    #[must_use]
    pub fn time_remaining_formatted(&self) -> String {
        format_countdown(self.time_remaining_secs)
    }

    /// Feedback for the committed answer; `None` until submission.
    #[must_use]
    pub fn feedback(&self) -> Option<AnswerFeedback> {
        if !self.is_submitted {
            return None;
        }
        let question = self.question.as_ref()?;
        let selected = self.selected_answer_index?;
        if question.is_correct(selected) {
            Some(AnswerFeedback::Correct)
        } else {
            Some(AnswerFeedback::Incorrect {
                correct_option: question.correct_option().to_string(),
            })
        }
    }
}
