use dioxus::prelude::*;

use crate::session::SessionActions;
use crate::vm::QuestionVm;

#[component]
pub fn QuestionCard(vm: QuestionVm) -> Element {
    let actions = use_context::<SessionActions>();
    let QuestionVm {
        character_name,
        avatar,
        timer_label,
        position_label,
        progress_percent,
        prompt,
        options,
        locked,
        can_submit,
        feedback,
    } = vm;
    let progress_style = format!("width: {progress_percent:.0}%");

    rsx! {
        section { class: "panel question",
            div { class: "question-header",
                div { class: "champion",
                    img { class: "avatar avatar--small", src: "{avatar}", alt: "{character_name}" }
                    span { class: "champion-name", "{character_name}" }
                }
                span { class: "timer", "{timer_label}" }
            }
            h1 { class: "panel-title", "APP SDK QUIZ CHALLENGE" }
            div { class: "progress",
                div { class: "progress-fill", style: "{progress_style}" }
            }
            p { class: "question-position", "{position_label}" }
            h2 { class: "question-prompt", "{prompt}" }

            div { class: "options",
                for option in options {
                    button {
                        key: "{option.index}",
                        class: option.state.class(),
                        r#type: "button",
                        disabled: locked,
                        onclick: move |_| actions.select_answer.call(option.index),
                        "{option.label}"
                    }
                }
            }

            button {
                class: "btn btn-primary",
                r#type: "button",
                disabled: !can_submit,
                onclick: move |_| actions.submit.call(()),
                "Submit Answer"
            }

            if let Some(feedback) = feedback {
                p { class: feedback.class(), "{feedback.text}" }
            }
        }
    }
}
