use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::map_topic_list;

#[component]
pub fn TopicsView() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz_service = ctx.quiz_service();

    let resource = use_resource(move || {
        let quiz_service = quiz_service.clone();
        async move {
            let topics = quiz_service.list_topics().await.map_err(|err| {
                log::warn!("failed to list topics: {err}");
                ViewError::Unknown
            })?;
            Ok::<_, ViewError>(map_topic_list(&topics))
        }
    });
    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page topics-page",
            h2 { class: "view-title", "Topics" }
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
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
                ViewState::Ready(items) => rsx! {
                    if items.is_empty() {
                        p { class: "topics-empty", "No topics yet." }
                    } else {
                        ul { class: "topics-list",
                            for item in items {
                                li { key: "{item.name}", class: "topics-item",
                                    Link {
                                        to: Route::Topic {
                                            name: item.name.clone(),
                                            number: "1".to_string(),
                                        },
                                        "{item.name}"
                                    }
                                    span { class: "topics-count", "{item.count_label}" }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
