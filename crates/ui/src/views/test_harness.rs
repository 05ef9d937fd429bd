use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::model::QuizSettings;
use quiz_core::time::fixed_clock;
use quiz_core::{Catalog, Clock};
use services::{CertificateExporter, InMemoryCertificateExporter, QuizSessionController};

use crate::context::{UiApp, build_app_context};
use crate::session::{SessionActions, provide_session};
use crate::views::{CertificateView, QuizView};

pub const TEST_FEEDBACK_DELAY: Duration = Duration::from_millis(100);

#[derive(Clone)]
struct TestApp {
    catalog: Arc<Catalog>,
    settings: QuizSettings,
    exporter: Arc<dyn CertificateExporter>,
}

impl UiApp for TestApp {
    fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    fn settings(&self) -> QuizSettings {
        self.settings
    }

    fn clock(&self) -> Clock {
        fixed_clock()
    }

    fn certificate_exporter(&self) -> Arc<dyn CertificateExporter> {
        Arc::clone(&self.exporter)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Quiz,
    Certificate,
}

pub type Setup = fn(&mut QuizSessionController);

/// Filled in by the harness root so tests can fire intents.
pub type ActionSlot = Rc<RefCell<Option<SessionActions>>>;

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    setup: Setup,
    actions: ActionSlot,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let ctx = use_context_provider(|| build_app_context(&app));
    let setup = props.setup;
    provide_session(move || {
        let mut controller = QuizSessionController::new(ctx.catalog(), ctx.settings());
        setup(&mut controller);
        controller
    });
    let actions = use_context::<SessionActions>();
    *props.actions.borrow_mut() = Some(actions);
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Quiz => rsx! { QuizView {} },
        ViewKind::Certificate => rsx! { CertificateView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    actions: ActionSlot,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Drive the DOM until `needle` shows up or the attempts run out.
    pub async fn drive_until(&mut self, needle: &str) -> String {
        for _ in 0..60 {
            self.drive_async().await;
            let html = self.render();
            if html.contains(needle) {
                return html;
            }
        }
        self.render()
    }

    /// Fire one intent inside the DOM's runtime.
    pub fn act(&mut self, f: impl FnOnce(SessionActions)) {
        let actions = self.actions.borrow().expect("harness rendered");
        self.dom.in_runtime(|| f(actions));
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, setup: Setup) -> ViewHarness {
    let settings = QuizSettings::new(
        QuizSettings::DEFAULT_TIME_LIMIT_SECS,
        TEST_FEEDBACK_DELAY,
        QuizSettings::DEFAULT_TICK_INTERVAL,
    )
    .expect("valid settings");
    let app = Arc::new(TestApp {
        catalog: Arc::new(Catalog::builtin().expect("builtin catalog")),
        settings,
        exporter: Arc::new(InMemoryCertificateExporter),
    });
    let actions = ActionSlot::default();

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            setup,
            actions: Rc::clone(&actions),
        },
    );

    ViewHarness { dom, actions }
}

// Common session setups.

pub fn fresh(_: &mut QuizSessionController) {}

pub fn started(session: &mut QuizSessionController) {
    session.select_character_at(0).expect("select character");
}

pub fn answered_wrong(session: &mut QuizSessionController) {
    started(session);
    session.select_answer(0).expect("select answer");
    session.submit_answer().expect("submit");
}

pub fn expired(session: &mut QuizSessionController) {
    session.select_character_at(2).expect("select character");
    while session.quiz_started() && !session.show_result() {
        session.tick();
    }
}

/// All seven answered correctly.
pub fn perfect(session: &mut QuizSessionController) {
    started(session);
    for _ in 0..session.total() {
        let correct = session
            .current_question()
            .expect("question")
            .correct_option_index();
        session.select_answer(correct).expect("select answer");
        let submitted = session.submit_answer().expect("submit");
        let _ = session.apply_deferred(submitted.advance);
    }
}
