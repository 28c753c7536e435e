use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use crate::grading::is_correct;
use crate::model::{Question, QuestionSet};
use crate::position::QuizPosition;

//
// ─── PHASE + ANSWER STATE ──────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Answering,
    Revealed,
    Completed,
}

/// Selections and reveal flag for the question on screen.
///
/// Created fresh on every position change; never carried over.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerState {
    checked: BTreeSet<usize>,
    revealed: bool,
}

impl AnswerState {
    #[must_use]
    pub fn checked(&self) -> &BTreeSet<usize> {
        &self.checked
    }

    #[must_use]
    pub fn is_checked(&self, option: usize) -> bool {
        self.checked.contains(&option)
    }

    #[must_use]
    pub fn revealed(&self) -> bool {
        self.revealed
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Quiz over one topic's question set.
///
/// The position is owned by the location URL; this type only mirrors it and
/// reports the next position on submit so the caller can write it back.
#[derive(Clone)]
pub struct QuizSession {
    questions: Arc<QuestionSet>,
    position: QuizPosition,
    answer: AnswerState,
}

impl QuizSession {
    /// Start at `position`, which may already be past the last question.
    #[must_use]
    pub fn new(questions: Arc<QuestionSet>, position: QuizPosition) -> Self {
        Self {
            questions,
            position,
            answer: AnswerState::default(),
        }
    }

    #[must_use]
    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    #[must_use]
    pub fn position(&self) -> QuizPosition {
        self.position
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.total()
    }

    #[must_use]
    pub fn answer(&self) -> &AnswerState {
        &self.answer
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.position.index() >= self.total()
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        if self.is_complete() {
            QuizPhase::Completed
        } else if self.answer.revealed {
            QuizPhase::Revealed
        } else {
            QuizPhase::Answering
        }
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.position.index())
    }

    /// Correctness of the current selection; only drives emphasis.
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.current_question()
            .is_some_and(|question| is_correct(question, &self.answer.checked))
    }

    /// Flip between answering and revealed. Ignored once completed.
    pub fn toggle_reveal(&mut self) {
        if !self.is_complete() {
            self.answer.revealed = !self.answer.revealed;
        }
    }

    /// Add an option to the selection. Returns whether the selection changed.
    pub fn select(&mut self, option: usize) -> bool {
        if !self.accepts_option(option) {
            return false;
        }
        self.answer.checked.insert(option)
    }

    /// Remove an option from the selection. Returns whether the selection changed.
    pub fn deselect(&mut self, option: usize) -> bool {
        if !self.accepts_option(option) {
            return false;
        }
        self.answer.checked.remove(&option)
    }

    /// Apply a checklist toggle event.
    pub fn set_checked(&mut self, option: usize, checked: bool) -> bool {
        if checked {
            self.select(option)
        } else {
            self.deselect(option)
        }
    }

    /// Clear the answer state and advance one question.
    ///
    /// Returns the new position for the caller to write to the location, or
    /// `None` when the quiz is already completed.
    pub fn submit(&mut self) -> Option<QuizPosition> {
        if self.is_complete() {
            return None;
        }
        self.answer = AnswerState::default();
        self.position = self.position.next();
        Some(self.position)
    }

    /// Follow an externally driven position change (edited URL, back/forward).
    ///
    /// Returns `false` and keeps the answer state when the position is unchanged.
    pub fn navigate(&mut self, position: QuizPosition) -> bool {
        if position == self.position {
            return false;
        }
        self.position = position;
        self.answer = AnswerState::default();
        true
    }

    fn accepts_option(&self, option: usize) -> bool {
        self.current_question()
            .is_some_and(|question| option < question.option_count())
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("topic", self.questions.topic())
            .field("total", &self.total())
            .field("position", &self.position)
            .field("answer", &self.answer)
            .finish()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
