mod character;
mod question;
mod settings;
mod tier;

pub use character::{AvatarRef, Character, CharacterError, PLACEHOLDER_AVATAR};
pub use question::{OPTION_COUNT, Question, QuestionError};
pub use settings::{QuizSettings, SettingsError};
pub use tier::{ResultTier, percentage};
