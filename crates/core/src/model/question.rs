use thiserror::Error;

/// Every question offers exactly this many options.
pub const OPTION_COUNT: usize = 4;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("question must have exactly {OPTION_COUNT} options, got {len}")]
    WrongOptionCount { len: usize },

    #[error("option {index} cannot be empty")]
    EmptyOption { index: usize },

    #[error("correct option index {index} is out of range")]
    CorrectIndexOutOfRange { index: usize },
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A multiple-choice question with one correct option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    options: [String; OPTION_COUNT],
    correct_option_index: usize,
}

impl Question {
    /// Build a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt or any option is blank, the option
    /// count is not `OPTION_COUNT`, or the correct index is out of range.
    pub fn new<I, S>(
        prompt: impl Into<String>,
        options: I,
        correct_option_index: usize,
    ) -> Result<Self, QuestionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }

        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        let options: [String; OPTION_COUNT] = options
            .try_into()
            .map_err(|rejected: Vec<String>| QuestionError::WrongOptionCount {
                len: rejected.len(),
            })?;
        if let Some(index) = options.iter().position(|o| o.trim().is_empty()) {
            return Err(QuestionError::EmptyOption { index });
        }
        if correct_option_index >= OPTION_COUNT {
            return Err(QuestionError::CorrectIndexOutOfRange {
                index: correct_option_index,
            });
        }

        Ok(Self {
            prompt,
            options,
            correct_option_index,
        })
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn correct_option_index(&self) -> usize {
        self.correct_option_index
    }

    /// Text of the correct option.
    #[must_use]
    pub fn correct_option(&self) -> &str {
        self.option(self.correct_option_index).unwrap_or_default()
    }

    #[must_use]
    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct_option_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Question {
        Question::new("Pick GDPR", ["GDPR", "CCPA", "HIPAA", "ePrivacy"], 0).unwrap()
    }

    #[test]
    fn question_exposes_correct_option() {
        let q = sample();
        assert_eq!(q.correct_option(), "GDPR");
        assert!(q.is_correct(0));
        assert!(!q.is_correct(3));
        assert_eq!(q.option(2), Some("HIPAA"));
        assert_eq!(q.option(4), None);
    }

    #[test]
    fn every_valid_correct_index_resolves_to_its_option() {
        let options = ["GDPR", "CCPA", "HIPAA", "ePrivacy"];
        for (index, text) in options.iter().enumerate() {
            let q = Question::new("Pick one", options, index).unwrap();
            assert_eq!(q.correct_option(), *text);
            assert_eq!(q.option(q.correct_option_index()), Some(*text));
        }
        for index in [OPTION_COUNT, 9, usize::MAX] {
            assert!(Question::new("Pick one", options, index).is_err());
        }
    }

    #[test]
    fn question_requires_four_options() {
        let err = Question::new("Q", ["a", "b", "c"], 0).unwrap_err();
        assert_eq!(err, QuestionError::WrongOptionCount { len: 3 });
    }

    #[test]
    fn question_rejects_out_of_range_correct_index() {
        let err = Question::new("Q", ["a", "b", "c", "d"], 4).unwrap_err();
        assert_eq!(err, QuestionError::CorrectIndexOutOfRange { index: 4 });
    }

    #[test]
    fn question_rejects_blank_prompt_and_options() {
        assert_eq!(
            Question::new(" ", ["a", "b", "c", "d"], 0).unwrap_err(),
            QuestionError::EmptyPrompt
        );
        assert_eq!(
            Question::new("Q", ["a", "", "c", "d"], 0).unwrap_err(),
            QuestionError::EmptyOption { index: 1 }
        );
    }
}
