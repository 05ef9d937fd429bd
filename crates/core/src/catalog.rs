//! Built-in characters and questions for the App SDK quiz.

use thiserror::Error;

use crate::error::Error;
use crate::model::{AvatarRef, Character, Question, QuestionError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog must contain at least one character")]
    NoCharacters,

    #[error("catalog must contain at least one question")]
    NoQuestions,

    #[error("question {index} is invalid: {source}")]
    Question {
        index: usize,
        #[source]
        source: QuestionError,
    },
}

/// Static quiz content shared by every session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    characters: Vec<Character>,
    questions: Vec<Question>,
}

impl Catalog {
    /// # Errors
    ///
    /// Returns `CatalogError` if either list is empty.
    pub fn new(characters: Vec<Character>, questions: Vec<Question>) -> Result<Self, CatalogError> {
        if characters.is_empty() {
            return Err(CatalogError::NoCharacters);
        }
        if questions.is_empty() {
            return Err(CatalogError::NoQuestions);
        }
        Ok(Self {
            characters,
            questions,
        })
    }

    /// The four champions and seven App SDK questions.
    ///
    /// # Errors
    ///
    /// Only fails if the baked-in data is edited into an invalid shape.
    pub fn builtin() -> Result<Self, Error> {
        let characters = BUILTIN_CHARACTERS
            .iter()
            .map(|(name, description)| {
                Character::new(*name, AvatarRef::placeholder(), *description)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let questions = BUILTIN_QUESTIONS
            .iter()
            .enumerate()
            .map(|(index, (prompt, options, correct))| {
                Question::new(*prompt, options.iter().copied(), *correct)
                    .map_err(|source| CatalogError::Question { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(characters, questions)?)
    }

    #[must_use]
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn character(&self, index: usize) -> Option<&Character> {
        self.characters.get(index)
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

const BUILTIN_CHARACTERS: [(&str, &str); 4] = [
    ("Privacy Pro", "Master of data protection"),
    ("Consent Champion", "Expert in user permissions"),
    ("Compliance Crusader", "Guardian of regulations"),
    ("Data Detective", "Sleuth of information flows"),
];

type QuestionRow = (&'static str, [&'static str; 4], usize);

const BUILTIN_QUESTIONS: [QuestionRow; 7] = [
    (
        "What is the primary purpose of our App SDK?",
        [
            "To make coffee",
            "To build mobile applications",
            "To manage user consent",
            "To order pizza",
        ],
        2,
    ),
    (
        "Which regulation is NOT directly related to our App SDK?",
        ["GDPR", "CCPA", "HIPAA", "ePrivacy"],
        2,
    ),
    (
        "What is the way to initialize our SDK in an app?",
        [
            "UsercentricsCore.configure()",
            "SDKApp.start()",
            "InitializeSDK()",
            "Usercentrics.initialize()",
        ],
        0,
    ),
    (
        "Which of these is NOT a feature of our App SDK?",
        [
            "Google Consent Mode",
            "Consent Mediation",
            "Time Travel",
            "Custom UI",
        ],
        2,
    ),
    (
        "What's the maximum number of consent purposes our SDK supports?",
        ["10", "50", "100", "Unlimited"],
        3,
    ),
    (
        "What's the newest SDK Version?",
        ["2.18", "2.15", "2.17", "2.16"],
        2,
    ),
    (
        "Which of the following is NOT a supported SDK for consent mediation in the App SDK?",
        ["ironSource", "Crashlytics", "Chartboost", "Facebook SDK"],
        3,
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OPTION_COUNT;

    #[test]
    fn builtin_catalog_has_expected_shape() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.characters().len(), 4);
        assert_eq!(catalog.question_count(), 7);
        assert!(
            catalog
                .questions()
                .iter()
                .all(|q| q.options().len() == OPTION_COUNT)
        );
    }

    #[test]
    fn builtin_questions_keep_their_order_and_answers() {
        let catalog = Catalog::builtin().unwrap();
        let answers: Vec<usize> = catalog
            .questions()
            .iter()
            .map(Question::correct_option_index)
            .collect();
        assert_eq!(answers, vec![2, 2, 0, 2, 3, 2, 3]);
        assert_eq!(
            catalog.question(0).unwrap().correct_option(),
            "To manage user consent"
        );
        assert_eq!(catalog.character(0).unwrap().name(), "Privacy Pro");
    }

    #[test]
    fn empty_catalog_is_rejected() {
        assert_eq!(
            Catalog::new(Vec::new(), Vec::new()).unwrap_err(),
            CatalogError::NoCharacters
        );
        let c = Character::new("A", AvatarRef::placeholder(), "").unwrap();
        assert_eq!(
            Catalog::new(vec![c], Vec::new()).unwrap_err(),
            CatalogError::NoQuestions
        );
    }
}
