use dioxus::prelude::*;
use quiz_core::model::InputKind;

use crate::vm::{MarkdownMode, OptionVm, QuizIntent, QuizPanelVm, markdown_to_html};

/// Checklist change reported by `AnswerOptions`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OptionToggle {
    pub index: usize,
    pub checked: bool,
}

/// Question card for the current position, or the completed view.
#[component]
pub fn QuizPanel(vm: QuizPanelVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let Some(question) = vm.question else {
        return rsx! {
            div { class: "quiz-done", "All done! 🎉" }
        };
    };

    let tone_class = question.tone.class();

    rsx! {
        form {
            class: "quiz-form",
            onsubmit: move |evt| {
                evt.prevent_default();
                on_intent.call(QuizIntent::Submit);
            },
            div { class: "quiz-question",
                span { class: "quiz-heading", "{question.heading}" }
                RichMarkdown { source: question.text.clone(), mode: MarkdownMode::Interactive }
            }
            if let Some(options) = question.options.clone() {
                AnswerOptions {
                    name: "answers",
                    options,
                    disabled: question.revealed,
                    on_toggle: move |toggle: OptionToggle| {
                        on_intent.call(QuizIntent::SetChecked {
                            option: toggle.index,
                            checked: toggle.checked,
                        });
                    },
                }
            }
            if question.multiple_answers {
                div { class: "quiz-note", "Note: This question has more than one correct answer" }
            }
            if question.input == InputKind::FreeText {
                TextInput {}
            }
            if question.revealed {
                div { class: "quiz-answer",
                    div { class: "quiz-answer-label", "Answer: " }
                    RichMarkdown { source: question.answer_text.clone(), mode: MarkdownMode::Static }
                }
            }
            div { class: "quiz-actions",
                button {
                    class: "{tone_class}",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::ToggleReveal),
                    "{question.reveal_label}"
                }
                button { class: "{tone_class}", r#type: "submit", "Next" }
            }
        }
    }
}

/// Selectable checklist. Never owns the selection; it only reports toggles.
#[component]
pub fn AnswerOptions(
    name: String,
    options: Vec<OptionVm>,
    disabled: bool,
    on_toggle: EventHandler<OptionToggle>,
) -> Element {
    let items = options.into_iter().map(|option| {
        let index = option.index;
        let next = !option.checked;
        let class = option.class();
        rsx! {
            li { key: "{index}", class: "{class}",
                label {
                    input {
                        r#type: "checkbox",
                        name: "{name}",
                        value: "{index}",
                        checked: option.checked,
                        disabled,
                        onchange: move |_| on_toggle.call(OptionToggle { index, checked: next }),
                    }
                    span { class: "answer-option-label", "{option.label}" }
                }
            }
        }
    });

    rsx! {
        ul { class: "answer-options", {items} }
    }
}

/// Ungraded free-text box; its value never leaves this component.
#[component]
pub fn TextInput() -> Element {
    let mut value = use_signal(String::new);

    rsx! {
        input {
            class: "text-input",
            r#type: "text",
            placeholder: "Type your answer...",
            value: "{value}",
            oninput: move |evt| value.set(evt.value()),
        }
    }
}

#[component]
pub fn RichMarkdown(source: String, mode: MarkdownMode) -> Element {
    let html = markdown_to_html(&source, mode);

    rsx! {
        div { class: mode.class(), dangerous_inner_html: "{html}" }
    }
}
