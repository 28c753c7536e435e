use std::sync::Arc;
use dioxus::prelude::ReadableExt;

use quiz_core::model::{Question, QuestionSet, Topic};
use services::QuizController;
use storage::repository::{QuestionRepository, StorageError, TopicSummary};
use url::Url;

use super::test_harness::{
    ViewKind, render_panel, sample_repository, setup_app_harness, setup_view_harness,
};
use crate::routes::Route;
use crate::vm::{QuizIntent, map_quiz_panel};

fn controller_at(number: &str) -> QuizController {
    let questions = sample_question_set();
    let location = Url::parse(&format!("https://quiz.local/topics/functions?number={number}"))
        .expect("location");
    QuizController::mount(Arc::new(questions), location)
}

fn sample_question_set() -> QuestionSet {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime");
    runtime
        .block_on(sample_repository().questions_by_topic(&Topic::new("functions")))
        .expect("sample topic")
}

#[test]
fn panel_renders_heading_options_and_buttons() {
    let html = render_panel(map_quiz_panel(&controller_at("1")));
    assert!(html.contains("functions (1 / 3): "), "missing heading in {html}");
    assert!(html.contains("Which plan scales to zero?"), "missing text in {html}");
    assert!(html.contains("Consumption"), "missing option in {html}");
    assert!(html.contains("Show Answer"), "missing reveal in {html}");
    assert!(html.contains("Next"), "missing next in {html}");
    assert!(!html.contains("Answer: "), "answer leaked in {html}");
    assert!(!html.contains("more than one correct answer"), "unexpected note in {html}");
}

#[test]
fn panel_shows_note_for_multiple_answers() {
    let html = render_panel(map_quiz_panel(&controller_at("2")));
    assert!(
        html.contains("Note: This question has more than one correct answer"),
        "missing note in {html}"
    );
}

#[test]
fn revealed_panel_shows_answer_and_success_tone() {
    let mut controller = controller_at("1");
    controller.toggle_reveal();
    let html = render_panel(map_quiz_panel(&controller));
    assert!(html.contains("Answer: "), "missing answer label in {html}");
    assert!(html.contains("Hide Answer"), "missing hide label in {html}");
    assert!(html.contains("btn btn-success"), "missing success tone in {html}");
    assert!(html.contains("answer-option--correct"), "missing correct mark in {html}");
}

#[test]
fn correct_selection_emphasises_buttons_before_reveal() {
    let mut controller = controller_at("1");
    let html = render_panel(map_quiz_panel(&controller));
    assert!(!html.contains("btn btn-success"), "early emphasis in {html}");

    controller.select(0);
    let html = render_panel(map_quiz_panel(&controller));
    assert!(html.contains("btn btn-success"), "missing emphasis in {html}");
}

#[test]
fn free_text_question_renders_text_input() {
    let mut controller = controller_at("3");
    controller.toggle_reveal();
    let html = render_panel(map_quiz_panel(&controller));
    assert!(html.contains("text-input"), "missing text input in {html}");
    assert!(!html.contains("answer-options"), "unexpected checklist in {html}");
    assert!(html.contains("<code>host.json</code>"), "answer markdown not rendered in {html}");
}

#[test]
fn completed_panel_renders_done_message() {
    let html = render_panel(map_quiz_panel(&controller_at("4")));
    assert!(html.contains("All done!"), "missing done message in {html}");
    assert!(!html.contains("Next"), "unexpected form in {html}");
}

#[test]
fn code_question_without_options_renders_no_input() {
    let set = QuestionSet::new(
        Topic::new("code"),
        vec![Question::free_text("```\nfn main() {}\n```", "prints nothing").with_code(true)],
    );
    let location = Url::parse("https://quiz.local/topics/code?number=1").expect("location");
    let controller = QuizController::mount(Arc::new(set), location);
    let html = render_panel(map_quiz_panel(&controller));
    assert!(!html.contains("text-input"), "unexpected text input in {html}");
    assert!(!html.contains("answer-options"), "unexpected checklist in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn topics_view_smoke_lists_topics() {
    let mut harness = setup_view_harness(ViewKind::Topics, Arc::new(sample_repository()));
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("functions"), "missing topic in {html}");
    assert!(html.contains("3 questions"), "missing count in {html}");
    assert!(html.contains("1 question"), "missing singular count in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_resumes_at_location_number() {
    let mut harness = setup_view_harness(
        ViewKind::quiz("functions", "2"),
        Arc::new(sample_repository()),
    );
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("functions (2 / 3): "), "missing heading in {html}");
    assert!(html.contains("Back to Topics"), "missing back link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_recovers_malformed_number() {
    let mut harness = setup_view_harness(
        ViewKind::quiz("functions", "abc"),
        Arc::new(sample_repository()),
    );
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("functions (1 / 3): "), "missing heading in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_unknown_topic_is_completed() {
    let mut harness = setup_view_harness(
        ViewKind::quiz("nope", "1"),
        Arc::new(sample_repository()),
    );
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("All done!"), "missing done message in {html}");
}

struct FailingRepo;

#[async_trait::async_trait]
impl QuestionRepository for FailingRepo {
    async fn questions_by_topic(&self, _topic: &Topic) -> Result<QuestionSet, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn list_topics(&self) -> Result<Vec<TopicSummary>, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn topics_view_smoke_renders_error_state() {
    let mut harness = setup_view_harness(ViewKind::Topics, Arc::new(FailingRepo));
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Something went wrong"), "missing error in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_error_state() {
    let mut harness = setup_view_harness(ViewKind::quiz("functions", "1"), Arc::new(FailingRepo));
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Something went wrong"), "missing error in {html}");
}

fn topic_route(number: &str) -> Route {
    Route::Topic {
        name: "functions".to_string(),
        number: number.to_string(),
    }
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_submit_replaces_route_and_clears_answer() {
    let mut harness = setup_app_harness(
        "/topics/functions?number=1",
        Arc::new(sample_repository()),
    );
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("functions (1 / 3): "), "missing heading in {html}");

    let dispatch = harness.handles.dispatch();
    let controller = harness.handles.controller();

    dispatch.call(QuizIntent::SetChecked {
        option: 0,
        checked: true,
    });
    dispatch.call(QuizIntent::ToggleReveal);
    harness.drive();
    let checked = harness.dom.in_runtime(|| {
        controller
            .peek()
            .as_ref()
            .map(|quiz| quiz.checked().iter().copied().collect::<Vec<_>>())
    });
    assert_eq!(checked, Some(vec![0]));

    dispatch.call(QuizIntent::Submit);
    harness.drive();
    harness.drive_async().await;

    assert_eq!(harness.current_route(), topic_route("2"));
    let html = harness.render();
    assert!(html.contains("functions (2 / 3): "), "missing heading in {html}");
    assert!(html.contains("Show Answer"), "answer still revealed in {html}");

    let (index, cleared, revealed, location_number) = harness.dom.in_runtime(|| {
        let quiz = controller.peek();
        let quiz = quiz.as_ref().expect("quiz mounted");
        (
            quiz.position().index(),
            quiz.checked().is_empty(),
            quiz.revealed(),
            quiz_core::read_position(quiz.location()).number(),
        )
    });
    assert_eq!(index, 1);
    assert!(cleared);
    assert!(!revealed);
    assert_eq!(location_number, 2);
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_submit_past_last_question_completes_and_stops() {
    let mut harness = setup_app_harness(
        "/topics/functions?number=3",
        Arc::new(sample_repository()),
    );
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let dispatch = harness.handles.dispatch();
    dispatch.call(QuizIntent::Submit);
    harness.drive();
    harness.drive_async().await;

    assert_eq!(harness.current_route(), topic_route("4"));
    let html = harness.render();
    assert!(html.contains("All done!"), "missing done message in {html}");

    dispatch.call(QuizIntent::Submit);
    harness.drive();
    assert_eq!(harness.current_route(), topic_route("4"));
}
