mod certificate_vm;
mod quiz_vm;

pub use certificate_vm::{ExportedVm, png_data_url};
pub use quiz_vm::{
    CharacterCardVm, FeedbackVm, OptionState, OptionVm, QuestionVm, QuizScreen, ResultVm,
    map_character_cards, map_question, map_result, map_screen,
};
