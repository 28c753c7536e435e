mod components;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use quiz_core::model::Topic;
use services::{LocationHistory, QuizController};

use crate::context::AppContext;
use crate::location::{RouterHistory, route_location};
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{QuizIntent, map_quiz_panel};

pub use components::{AnswerOptions, OptionToggle, QuizPanel, RichMarkdown, TextInput};

#[component]
pub fn QuizView(name: String, number: String) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let quiz_service = ctx.quiz_service();
    let controller = use_signal(|| None::<QuizController>);
    let route_name = name.clone();
    let topic_name = name.clone();

    // Re-derived only when the route changes, never per render.
    let location = use_memo(use_reactive!(|(route_name, number)| {
        route_location(&Route::Topic {
            name: route_name,
            number,
        })
    }));

    // A topic change reloads the question set and mounts a fresh quiz at the
    // location current at load time.
    let resource = use_resource(use_reactive!(|(topic_name,)| {
        let quiz_service = quiz_service.clone();
        let mut controller = controller;
        async move {
            let location = (*location.peek()).clone()?;
            let questions = quiz_service
                .load_topic(&Topic::new(topic_name))
                .await
                .map_err(|err| {
                    log::warn!("failed to load questions: {err}");
                    ViewError::Unknown
                })?;
            controller.set(Some(QuizController::mount(questions, location)));
            Ok::<_, ViewError>(())
        }
    }));

    // Back/forward, edited address bar, and the echo of our own writes.
    use_effect(move || {
        let Ok(current) = location() else {
            return;
        };
        let mut controller = controller;
        if let Some(quiz) = controller.write().as_mut() {
            let change = quiz.location_changed(current);
            log::debug!("location change handled: {change:?}");
        }
    });

    let on_intent = use_callback(move |intent: QuizIntent| {
        let mut controller = controller;
        match intent {
            QuizIntent::ToggleReveal => {
                if let Some(quiz) = controller.write().as_mut() {
                    quiz.toggle_reveal();
                }
            }
            QuizIntent::SetChecked { option, checked } => {
                if let Some(quiz) = controller.write().as_mut() {
                    quiz.set_checked(option, checked);
                }
            }
            QuizIntent::Submit => {
                let next = controller.write().as_mut().and_then(QuizController::submit);
                if let Some(next) = next {
                    RouterHistory::new(navigator).replace(&next);
                }
            }
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(on_intent, controller);
            }
        }
    }

    let state = view_state_from_resource(resource);
    let panel = controller.read().as_ref().map(map_quiz_panel);

    rsx! {
        document::Title { "Developing Solutions for Microsoft Azure: {name}" }
        div { class: "page quiz-page",
            h2 { class: "quiz-back",
                Link { to: Route::Topics {}, "← Back to Topics" }
            }
            match (state, panel) {
                (ViewState::Error(err), _) => rsx! {
                    p { "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "Retry"
                    }
                },
                (ViewState::Ready(()), Some(panel)) => rsx! {
                    QuizPanel { vm: panel, on_intent }
                },
                (ViewState::Idle, _) => rsx! {
                    p { "Idle" }
                },
                _ => rsx! {
                    p { "Loading..." }
                },
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    controller: Rc<RefCell<Option<Signal<Option<QuizController>>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<QuizIntent>,
        controller: Signal<Option<QuizController>>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.controller.borrow_mut() = Some(controller);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn controller(&self) -> Signal<Option<QuizController>> {
        (*self.controller.borrow()).expect("quiz controller registered")
    }
}
