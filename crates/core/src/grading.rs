use std::collections::BTreeSet;

use crate::model::Question;

/// Whether `checked` matches the question's answer key exactly.
///
/// A question without options or without an answer key is never correct, so
/// free-text questions are never auto-graded. Both sides are sets, so repeated selections cannot inflate
/// the comparison.
#[must_use]
pub fn is_correct(question: &Question, checked: &BTreeSet<usize>) -> bool {
    if !question.has_options() {
        return false;
    }
    match question.answer_indexes() {
        Some(key) if !key.is_empty() => key.len() == checked.len() && key.is_subset(checked),
        _ => false,
    }
}
