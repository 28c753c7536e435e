use quiz_core::model::InputKind;
use services::QuizController;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    ToggleReveal,
    SetChecked { option: usize, checked: bool },
    Submit,
}

/// Emphasis of the reveal and next buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonTone {
    Neutral,
    Success,
}

impl ButtonTone {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            ButtonTone::Neutral => "btn btn-primary",
            ButtonTone::Success => "btn btn-success",
        }
    }
}

/// Post-reveal highlighting of an option.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionMark {
    Plain,
    Correct,
    Wrong,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub label: String,
    pub checked: bool,
    pub mark: OptionMark,
}

impl OptionVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.mark {
            OptionMark::Plain => "answer-option",
            OptionMark::Correct => "answer-option answer-option--correct",
            OptionMark::Wrong => "answer-option answer-option--wrong",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub heading: String,
    pub text: String,
    pub options: Option<Vec<OptionVm>>,
    pub multiple_answers: bool,
    pub input: InputKind,
    pub answer_text: String,
    pub revealed: bool,
    pub reveal_label: &'static str,
    pub tone: ButtonTone,
}

/// Everything the quiz panel renders; `question` is `None` once completed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizPanelVm {
    pub question: Option<QuestionVm>,
}

#[must_use]
pub fn map_quiz_panel(controller: &QuizController) -> QuizPanelVm {
    let Some(question) = controller.current_question() else {
        return QuizPanelVm { question: None };
    };

    let progress = controller.progress();
    let topic = controller.session().questions().topic();
    let revealed = controller.revealed();
    let checked = controller.checked();
    let key = question.answer_indexes();

    let options = question.has_options().then(|| {
        question
            .options()
            .unwrap_or_default()
            .iter()
            .enumerate()
            .map(|(index, label)| {
                let is_answer = key.is_some_and(|key| key.contains(&index));
                let is_checked = checked.contains(&index);
                let mark = match (revealed, is_answer, is_checked) {
                    (false, _, _) => OptionMark::Plain,
                    (true, true, _) => OptionMark::Correct,
                    (true, false, true) => OptionMark::Wrong,
                    (true, false, false) => OptionMark::Plain,
                };
                OptionVm {
                    index,
                    label: label.clone(),
                    checked: is_checked,
                    mark,
                }
            })
            .collect()
    });

    let tone = if revealed || controller.is_correct() {
        ButtonTone::Success
    } else {
        ButtonTone::Neutral
    };

    QuizPanelVm {
        question: Some(QuestionVm {
            heading: format!("{topic} ({} / {}): ", progress.number, progress.total),
            text: question.text().to_string(),
            options,
            multiple_answers: question.has_multiple_answers(),
            input: question.input_kind(),
            answer_text: question.answer_text().to_string(),
            revealed,
            reveal_label: if revealed { "Hide Answer" } else { "Show Answer" },
            tone,
        }),
    }
}
