use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::history::{History, MemoryHistory};
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::model::{Question, Topic};
use services::QuizService;
use storage::repository::{InMemoryRepository, QuestionRepository};

use crate::context::{UiApp, build_app_context};
use crate::routes::Route;
use crate::views::quiz::QuizTestHandles;
use crate::views::{QuizPanel, QuizView, TopicsView};
use crate::vm::QuizPanelVm;

#[derive(Clone)]
struct TestApp {
    quiz_service: Arc<QuizService>,
}

impl UiApp for TestApp {
    fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz_service)
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Topics,
    Quiz { name: String, number: String },
}

impl ViewKind {
    pub fn quiz(name: &str, number: &str) -> Self {
        ViewKind::Quiz {
            name: name.to_string(),
            number: number.to_string(),
        }
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view.clone());
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
        ViewKind::Topics => rsx! { TopicsView {} },
        ViewKind::Quiz { name, number } => rsx! { QuizView { name, number } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
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

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Three-question "functions" topic plus a one-question "storage" topic.
pub fn sample_repository() -> InMemoryRepository {
    let repo = InMemoryRepository::new();
    repo.upsert_topic(
        Topic::new("functions"),
        vec![
            Question::multiple_choice(
                "Which plan scales to zero?",
                vec!["Consumption".to_string(), "Dedicated".to_string()],
                [0],
                "Consumption",
            )
            .expect("valid question"),
            Question::multiple_choice(
                "Which triggers are supported?",
                vec!["HTTP".to_string(), "Timer".to_string(), "Fax".to_string()],
                [0, 1],
                "HTTP and Timer",
            )
            .expect("valid question"),
            Question::free_text("Name the host file.", "`host.json`"),
        ],
    )
    .expect("upsert functions");
    repo.upsert_topic(
        Topic::new("storage"),
        vec![Question::free_text("Name a blob tier.", "Hot")],
    )
    .expect("upsert storage");
    repo
}

fn test_app(repo: Arc<dyn QuestionRepository>) -> Arc<TestApp> {
    Arc::new(TestApp {
        quiz_service: Arc::new(QuizService::new(repo)),
    })
}

pub fn setup_view_harness(view: ViewKind, repo: Arc<dyn QuestionRepository>) -> ViewHarness {
    let app = test_app(repo);
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });
    ViewHarness { dom }
}

#[derive(Props, Clone, PartialEq)]
struct PanelHarnessProps {
    vm: QuizPanelVm,
}

#[component]
fn PanelHarness(props: PanelHarnessProps) -> Element {
    rsx! {
        QuizPanel { vm: props.vm.clone(), on_intent: move |_| {} }
    }
}

/// Server-side render of a bare quiz panel.
pub fn render_panel(vm: QuizPanelVm) -> String {
    let mut dom = VirtualDom::new_with_props(PanelHarness, PanelHarnessProps { vm });
    dom.rebuild_in_place();
    drive_dom(&mut dom);
    dioxus_ssr::render(&dom)
}

#[derive(Props, Clone)]
struct AppRouterHarnessProps {
    app: Arc<TestApp>,
    history: Rc<MemoryHistory>,
    handles: QuizTestHandles,
}

impl PartialEq for AppRouterHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn AppRouterHarness(props: AppRouterHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    let history: Rc<dyn History> = props.history.clone();
    use_context_provider(|| history);
    rsx! { Router::<Route> {} }
}

/// The application router over an in-memory history, so route writes made by
/// the views can be observed.
pub struct AppHarness {
    pub dom: VirtualDom,
    pub history: Rc<MemoryHistory>,
    pub handles: QuizTestHandles,
}

impl AppHarness {
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

    pub fn drive(&mut self) {
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub fn current_route(&self) -> Route {
        self.history
            .current_route()
            .parse()
            .expect("current route parses")
    }
}

pub fn setup_app_harness(initial_path: &str, repo: Arc<dyn QuestionRepository>) -> AppHarness {
    let history = Rc::new(MemoryHistory::with_initial_path(initial_path));
    let handles = QuizTestHandles::default();
    let dom = VirtualDom::new_with_props(
        AppRouterHarness,
        AppRouterHarnessProps {
            app: test_app(repo),
            history: Rc::clone(&history),
            handles: handles.clone(),
        },
    );
    AppHarness {
        dom,
        history,
        handles,
    }
}
