use dioxus::prelude::*;

use crate::context::AppContext;
use crate::session::SessionActions;
use crate::vm::map_character_cards;

#[component]
pub fn CharacterSelect() -> Element {
    let ctx = use_context::<AppContext>();
    let actions = use_context::<SessionActions>();
    let cards = map_character_cards(&ctx.catalog());

    rsx! {
        section { class: "panel select",
            h1 { class: "panel-title", "Choose Your Privacy Champion" }
            div { class: "character-grid",
                for card in cards {
                    button {
                        key: "{card.index}",
                        class: "character-card",
                        r#type: "button",
                        onclick: move |_| actions.pick_character.call(card.index),
                        img { class: "avatar", src: "{card.avatar}", alt: "{card.name}" }
                        h2 { class: "character-name", "{card.name}" }
                        p { class: "character-description", "{card.description}" }
                    }
                }
            }
        }
    }
}
