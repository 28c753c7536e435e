//! Mapping between the in-memory question index and the one-based `number`
//! query value of the location URL.

use std::fmt;

use url::Url;

/// Query parameter holding the one-based question number.
pub const POSITION_PARAM: &str = "number";

/// Zero-based index of the active question.
///
/// `index == total` is the completed state; nothing here clamps against the
/// size of a question set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QuizPosition(usize);

impl QuizPosition {
    pub const FIRST: Self = Self(0);

    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }

    /// One-based question number as shown to the learner.
    #[must_use]
    pub const fn number(self) -> usize {
        self.0.saturating_add(1)
    }

    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Parse a raw `number` query value.
    ///
    /// Missing, empty, non-numeric, zero and negative values all map to the
    /// first question.
    #[must_use]
    pub fn from_query_value(raw: Option<&str>) -> Self {
        raw.map(str::trim)
            .and_then(|value| value.parse::<usize>().ok())
            .filter(|&number| number > 0)
            .map_or(Self::FIRST, |number| Self(number - 1))
    }

    #[must_use]
    pub fn to_query_value(self) -> String {
        self.number().to_string()
    }
}

impl fmt::Display for QuizPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Read the active position from a location URL.
///
/// The first `number` pair wins when the parameter is repeated.
#[must_use]
pub fn read_position(url: &Url) -> QuizPosition {
    let raw = url
        .query_pairs()
        .find(|(key, _)| key == POSITION_PARAM)
        .map(|(_, value)| value);
    QuizPosition::from_query_value(raw.as_deref())
}

/// Return `url` with `number` set to the one-based form of `position`.
///
/// The first existing `number` pair is replaced in place and any repeats are
/// dropped; path, fragment and every other pair are kept in order.
#[must_use]
pub fn write_position(url: &Url, position: QuizPosition) -> Url {
    let value = position.to_query_value();
    let mut pairs: Vec<(String, String)> = Vec::new();
    let mut written = false;
    for (key, current) in url.query_pairs() {
        if key != POSITION_PARAM {
            pairs.push((key.into_owned(), current.into_owned()));
        } else if !written {
            pairs.push((POSITION_PARAM.to_string(), value.clone()));
            written = true;
        }
    }
    if !written {
        pairs.push((POSITION_PARAM.to_string(), value));
    }

    let mut next = url.clone();
    next.query_pairs_mut().clear().extend_pairs(pairs);
    next
}
