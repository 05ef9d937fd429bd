use dioxus::prelude::*;
use dioxus_router::Router;

use crate::context::AppContext;
use crate::routes::Route;
use crate::session::use_session_provider;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    // One quiz session per window, shared by every route.
    use_session_provider(&ctx);

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "App SDK Quiz" }

        div { class: "quiz-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "The quiz stopped unexpectedly" }
                        p { "Restart the app to play again." }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
