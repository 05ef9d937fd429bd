use dioxus::prelude::*;

use crate::session::SessionSignal;
use crate::views::{CharacterSelect, QuestionCard, ResultCard};
use crate::vm::{QuizScreen, map_screen};

/// Root screen: character pick, then questions, then results.
#[component]
pub fn QuizView() -> Element {
    let session = use_context::<SessionSignal>();
    let screen = map_screen(&session.snapshot());

    match screen {
        QuizScreen::CharacterSelect => rsx! { CharacterSelect {} },
        QuizScreen::Question(vm) => rsx! { QuestionCard { vm } },
        QuizScreen::Result(vm) => rsx! { ResultCard { vm } },
    }
}
