use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::{CertificateView, QuizView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", QuizView)] Quiz {},
        #[route("/certificate", CertificateView)] Certificate {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "brand",
                svg { class: "brand-mark", view_box: "0 0 24 24", fill: "currentColor",
                    path { d: "M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm-2 15l-5-5 1.41-1.41L10 14.17l7.59-7.59L19 8l-9 9z" }
                }
                span { class: "brand-name", "USERCENTRICS" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
