use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{
    AssistantService, Clock, EssayService, HistoryService, QuizService, ReferenceService,
};
use storage::repository::Storage;
use study_core::model::{EssayReview, QuizSession, QuizSettings};

use crate::context::{StudyState, UiApp, build_app_context};
use crate::platform::{LinkOpenerRef, UiLinkOpener};
use crate::views::quiz::QuizTestHandles;
use crate::views::{
    AboutView, AssistantView, EssaysView, HomeView, QuizIntent, QuizView, ResultsView,
    StudyGuideView, WebsiteView,
};

struct NoopOpener;

impl UiLinkOpener for NoopOpener {
    fn open_url(&self, _url: &str) {}
}

#[derive(Clone)]
struct TestApp {
    quiz: Arc<QuizService>,
    essays: Arc<EssayService>,
    history: Arc<HistoryService>,
    reference: Arc<ReferenceService>,
    assistant: Arc<AssistantService>,
}

impl UiApp for TestApp {
    fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }

    fn essays(&self) -> Arc<EssayService> {
        Arc::clone(&self.essays)
    }

    fn history(&self) -> Arc<HistoryService> {
        Arc::clone(&self.history)
    }

    fn reference(&self) -> Arc<ReferenceService> {
        Arc::clone(&self.reference)
    }

    fn assistant(&self) -> Arc<AssistantService> {
        Arc::clone(&self.assistant)
    }

    fn link_opener(&self) -> LinkOpenerRef {
        Arc::new(NoopOpener)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Quiz,
    Essays,
    Results,
    StudyGuide,
    About,
    Website,
    Assistant,
}

/// State already in place when the view first renders.
#[derive(Clone, Default)]
pub struct Seed {
    pub quiz: Option<QuizSession>,
    pub essays: Option<EssayReview>,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    seed: Seed,
    quiz_handles: QuizTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| props.quiz_handles.clone());
    let seed = props.seed.clone();
    use_context_provider(move || StudyState {
        quiz: Signal::new(seed.quiz),
        essays: Signal::new(seed.essays.unwrap_or_default()),
    });
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
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Quiz => rsx! { QuizView {} },
        ViewKind::Essays => rsx! { EssaysView {} },
        ViewKind::Results => rsx! { ResultsView {} },
        ViewKind::StudyGuide => rsx! { StudyGuideView {} },
        ViewKind::About => rsx! { AboutView {} },
        ViewKind::Website => rsx! { WebsiteView {} },
        ViewKind::Assistant => rsx! { AssistantView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
    quiz_handles: QuizTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn dispatch_quiz(&mut self, intent: QuizIntent) {
        let dispatch = self.quiz_handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
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

pub fn setup_view_harness(
    view: ViewKind,
    storage: Storage,
    clock: Clock,
    seed: Seed,
) -> ViewHarness {
    setup_view_harness_with(view, storage, clock, seed, AssistantService::disabled())
}

pub fn setup_view_harness_with(
    view: ViewKind,
    storage: Storage,
    clock: Clock,
    seed: Seed,
    assistant: AssistantService,
) -> ViewHarness {
    let quiz = Arc::new(
        QuizService::new(
            clock,
            QuizSettings::exam_defaults(),
            Arc::clone(&storage.questions),
            Arc::clone(&storage.history),
        )
        .with_seed(1),
    );
    let essays = Arc::new(EssayService::new(Arc::clone(&storage.essays)));
    let history = Arc::new(HistoryService::new(Arc::clone(&storage.history)));
    let reference = Arc::new(ReferenceService::new(".", "."));
    let quiz_handles = QuizTestHandles::default();

    let app = Arc::new(TestApp {
        quiz,
        essays,
        history,
        reference,
        assistant: Arc::new(assistant),
    });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            seed,
            quiz_handles: quiz_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        storage,
        quiz_handles,
    }
}
