use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use quiz_core::model::{Question, QuestionSet};
use quiz_core::{QuizPhase, QuizPosition, QuizSession, read_position, write_position};
use url::Url;

use super::progress::QuizProgress;
use crate::location::LocationHistory;

/// What a location-change event did to the quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationChange {
    /// Echo of the controller's own write after a submit.
    Acknowledged,
    /// Stale location still carrying the position from before a submit.
    Stale,
    /// Same position as before; answer state kept.
    Unchanged,
    /// External navigation to another question; answer state reset.
    Moved(QuizPosition),
}

#[derive(Debug, Clone)]
struct PendingWrite {
    from: QuizPosition,
    to: QuizPosition,
}

/// Binds a `QuizSession` to the location URL.
///
/// The URL is read on mount and on explicit location-change events only. A
/// submit is authoritative: its write is remembered until the matching
/// location event arrives, and a stale event carrying the old position in the
/// meantime is ignored.
pub struct QuizController {
    session: QuizSession,
    location: Url,
    pending: Option<PendingWrite>,
}

impl QuizController {
    /// Mount the quiz at the position encoded in `location`.
    #[must_use]
    pub fn mount(questions: Arc<QuestionSet>, location: Url) -> Self {
        let position = read_position(&location);
        log::debug!(
            "mounting quiz for {:?} at question {position} of {}",
            questions.topic().as_str(),
            questions.total()
        );
        Self {
            session: QuizSession::new(questions, position),
            location,
            pending: None,
        }
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn location(&self) -> &Url {
        &self.location
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.session.phase()
    }

    #[must_use]
    pub fn position(&self) -> QuizPosition {
        self.session.position()
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.session.current_question()
    }

    #[must_use]
    pub fn checked(&self) -> &BTreeSet<usize> {
        self.session.answer().checked()
    }

    #[must_use]
    pub fn revealed(&self) -> bool {
        self.session.answer().revealed()
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.session.is_correct()
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            number: self.session.position().number(),
            total: self.session.total(),
            is_complete: self.session.is_complete(),
        }
    }

    pub fn toggle_reveal(&mut self) {
        self.session.toggle_reveal();
    }

    pub fn select(&mut self, option: usize) -> bool {
        self.session.select(option)
    }

    pub fn deselect(&mut self, option: usize) -> bool {
        self.session.deselect(option)
    }

    pub fn set_checked(&mut self, option: usize, checked: bool) -> bool {
        self.session.set_checked(option, checked)
    }

    /// Advance to the next question and return the location to replace the
    /// current history entry with. `None` once the quiz is completed.
    pub fn submit(&mut self) -> Option<Url> {
        let from = self.session.position();
        let to = self.session.submit()?;
        let next = write_position(&self.location, to);
        log::debug!("submitted question {from}, moving to {to}");
        self.location = next.clone();
        self.pending = Some(PendingWrite { from, to });
        Some(next)
    }

    /// Submit and write the new location into `history`.
    ///
    /// Returns whether a write happened.
    pub fn submit_to(&mut self, history: &mut impl LocationHistory) -> bool {
        match self.submit() {
            Some(next) => {
                history.replace(&next);
                true
            }
            None => false,
        }
    }

    /// Handle a location change signalled by the environment (mount of a new
    /// route, back/forward, an edited address bar).
    pub fn location_changed(&mut self, location: Url) -> LocationChange {
        let position = read_position(&location);

        if let Some(pending) = self.pending.take() {
            if position == pending.to {
                self.location = location;
                return LocationChange::Acknowledged;
            }
            if position == pending.from {
                log::debug!("ignoring stale location for question {position}");
                self.pending = Some(pending);
                return LocationChange::Stale;
            }
        }

        self.location = location;
        if self.session.navigate(position) {
            log::debug!("location moved quiz to question {position}");
            LocationChange::Moved(position)
        } else {
            LocationChange::Unchanged
        }
    }
}

impl fmt::Debug for QuizController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizController")
            .field("session", &self.session)
            .field("location", &self.location.as_str())
            .field("pending", &self.pending)
            .finish()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
