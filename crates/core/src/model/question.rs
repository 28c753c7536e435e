use std::collections::BTreeSet;

use thiserror::Error;

//
// ─── QUESTION TYPES ────────────────────────────────────────────────────────────
//

/// Which answer input a question is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Selectable option checklist.
    Checklist,
    /// Ungraded free-text box.
    FreeText,
    /// Code questions without options get no input at all.
    None,
}

/// A single quiz question, immutable once loaded.
///
/// `text` and `answer_text` carry raw markdown and are passed to the renderer
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    options: Option<Vec<String>>,
    answer_indexes: Option<BTreeSet<usize>>,
    answer_text: String,
    has_code: bool,
}

impl Question {
    /// Build a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::AnswerIndexOutOfRange` if options are present and
    /// an answer index does not point into them.
    pub fn new(
        text: impl Into<String>,
        options: Option<Vec<String>>,
        answer_indexes: Option<BTreeSet<usize>>,
        answer_text: impl Into<String>,
        has_code: bool,
    ) -> Result<Self, QuestionError> {
        if let (Some(options), Some(indexes)) = (options.as_ref(), answer_indexes.as_ref()) {
            if !options.is_empty() {
                if let Some(&index) = indexes.iter().find(|&&index| index >= options.len()) {
                    return Err(QuestionError::AnswerIndexOutOfRange {
                        index,
                        options: options.len(),
                    });
                }
            }
        }

        Ok(Self {
            text: text.into(),
            options,
            answer_indexes,
            answer_text: answer_text.into(),
            has_code,
        })
    }

    /// Question without options; never auto-graded.
    #[must_use]
    pub fn free_text(text: impl Into<String>, answer_text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            options: None,
            answer_indexes: None,
            answer_text: answer_text.into(),
            has_code: false,
        }
    }

    /// Question with an option checklist and its answer key.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::AnswerIndexOutOfRange` for keys outside `options`.
    pub fn multiple_choice(
        text: impl Into<String>,
        options: Vec<String>,
        answer_indexes: impl IntoIterator<Item = usize>,
        answer_text: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        Self::new(
            text,
            Some(options),
            Some(answer_indexes.into_iter().collect()),
            answer_text,
            false,
        )
    }

    #[must_use]
    pub fn with_code(mut self, has_code: bool) -> Self {
        self.has_code = has_code;
        self
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> Option<&[String]> {
        self.options.as_deref()
    }

    #[must_use]
    pub fn answer_indexes(&self) -> Option<&BTreeSet<usize>> {
        self.answer_indexes.as_ref()
    }

    #[must_use]
    pub fn answer_text(&self) -> &str {
        &self.answer_text
    }

    #[must_use]
    pub fn has_code(&self) -> bool {
        self.has_code
    }

    /// Options are present and non-empty.
    #[must_use]
    pub fn has_options(&self) -> bool {
        self.options.as_ref().is_some_and(|options| !options.is_empty())
    }

    /// Number of selectable options (0 for free-text questions).
    #[must_use]
    pub fn option_count(&self) -> usize {
        self.options.as_ref().map_or(0, Vec::len)
    }

    #[must_use]
    pub fn has_multiple_answers(&self) -> bool {
        self.answer_indexes
            .as_ref()
            .is_some_and(|indexes| indexes.len() > 1)
    }

    /// An empty option list falls through to the free-text path.
    #[must_use]
    pub fn input_kind(&self) -> InputKind {
        if self.has_options() {
            InputKind::Checklist
        } else if self.has_code {
            InputKind::None
        } else {
            InputKind::FreeText
        }
    }
}

//
// ─── QUESTION ERRORS ───────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("answer index {index} is out of range for {options} options")]
    AnswerIndexOutOfRange { index: usize, options: usize },
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
