use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;
use crate::session::SessionActions;
use crate::views::{ExportStatus, use_certificate_export};
use crate::vm::{ExportedVm, ResultVm};

#[component]
pub fn ResultCard(vm: ResultVm) -> Element {
    let actions = use_context::<SessionActions>();
    let ResultVm {
        character_name,
        avatar,
        character_label,
        score_label,
        time_label,
        message,
        perfect,
    } = vm;
    let (status, export) = use_certificate_export();
    let working = matches!(*status.read(), ExportStatus::Working);

    rsx! {
        section { class: "panel result",
            h1 { class: "panel-title", "Quiz Complete!" }
            img { class: "avatar", src: "{avatar}", alt: "{character_name}" }
            h2 { class: "character-name", "{character_name}" }
            p { class: "character-label", "{character_label}" }
            p { class: "score", "{score_label}" }
            p { class: "time-left", "{time_label}" }
            p { class: "tier-message", "{message}" }

            if perfect {
                div { class: "celebration", "🎉 🏆 🎉" }
            }

            div { class: "actions",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| actions.reset.call(()),
                    "Play Again"
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: working,
                    onclick: move |_| export.call(()),
                    if working { "Preparing..." } else { "Download Certificate" }
                }
            }

            ExportPanel { status: status() }

            Link { class: "link", to: Route::Certificate {}, "View certificate" }
        }
    }
}

#[component]
pub fn ExportPanel(status: ExportStatus) -> Element {
    match status {
        ExportStatus::Idle | ExportStatus::Working => rsx! {},
        ExportStatus::Ready(ExportedVm {
            location,
            data_url,
            opened,
        }) => rsx! {
            div { class: "export export--ready",
                if let Some(location) = location {
                    p { class: "export-location", "Saved to {location}" }
                }
                if !opened {
                    p { class: "export-hint", "Right-click the image below to keep a copy." }
                }
                img { class: "certificate-image", src: "{data_url}", alt: "Certificate of Completion" }
            }
        },
        ExportStatus::Failed(err) => rsx! {
            p { class: "export export--error", "{err.message()}" }
        },
    }
}
