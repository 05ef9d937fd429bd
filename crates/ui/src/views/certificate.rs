use dioxus::prelude::*;
use dioxus_router::Link;
use services::CertificateSummary;
use services::certificate::LineStyle;

use crate::context::AppContext;
use crate::routes::Route;
use crate::session::SessionSignal;
use crate::views::{ExportStatus, ViewError, use_certificate_export};

use super::result::ExportPanel;

/// Printable preview of the certificate for a finished quiz.
#[component]
pub fn CertificateView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_context::<SessionSignal>();
    // Subscribe so a reset elsewhere swaps the preview out.
    let _ = session.snapshot();
    let summary = session.certificate_summary(&ctx.clock());
    let (status, export) = use_certificate_export();
    let working = matches!(*status.read(), ExportStatus::Working);

    match summary {
        Ok(summary) => rsx! {
            section { class: "panel certificate-page",
                CertificateCard { summary }
                div { class: "actions",
                    Link { class: "btn btn-secondary", to: Route::Quiz {}, "Back to results" }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: working,
                        onclick: move |_| export.call(()),
                        if working { "Preparing..." } else { "Download Certificate" }
                    }
                }
                ExportPanel { status: status() }
            }
        },
        Err(err) => {
            let message = ViewError::from(err).message();
            rsx! {
                section { class: "panel certificate-page",
                    p { class: "empty", "{message}" }
                    Link { class: "btn btn-primary", to: Route::Quiz {}, "Back to quiz" }
                }
            }
        }
    }
}

#[component]
pub fn CertificateCard(summary: CertificateSummary) -> Element {
    let lines = summary.lines();

    rsx! {
        div { class: "certificate",
            for (index, line) in lines.into_iter().enumerate() {
                p { key: "{index}", class: line_class(line.style), "{line.text}" }
            }
        }
    }
}

fn line_class(style: LineStyle) -> &'static str {
    match style {
        LineStyle::Title => "certificate-title",
        LineStyle::Body => "certificate-body",
        LineStyle::Strong => "certificate-strong",
        LineStyle::Small => "certificate-small",
    }
}
