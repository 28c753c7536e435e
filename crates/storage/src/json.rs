//! Question bank loaded from a JSON document:
//!
//! ```json
//! { "topics": { "functions": [ { "question": "...", "options": ["a", "b"],
//!   "answerIndexes": [1], "answer": "...", "hasCode": false } ] } }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use quiz_core::model::{Question, Topic};
use serde::Deserialize;

use crate::repository::{InMemoryRepository, QuestionRecord, StorageError};

#[derive(Debug, Deserialize)]
struct BankDocument {
    #[serde(default)]
    topics: BTreeMap<String, Vec<QuestionRecord>>,
}

/// Validated question bank, keyed by topic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonQuestionBank {
    topics: BTreeMap<Topic, Vec<Question>>,
}

impl JsonQuestionBank {
    /// Parse and validate a bank from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` for malformed JSON and
    /// `StorageError::InvalidQuestion` for questions that fail validation.
    pub fn from_json_str(raw: &str) -> Result<Self, StorageError> {
        let document: BankDocument =
            serde_json::from_str(raw).map_err(|e| StorageError::Serialization(e.to_string()))?;

        let mut topics = BTreeMap::new();
        for (name, records) in document.topics {
            let topic = Topic::new(name);
            let mut questions = Vec::with_capacity(records.len());
            for (index, record) in records.into_iter().enumerate() {
                let question = record.into_question().map_err(|source| {
                    StorageError::InvalidQuestion {
                        topic: topic.clone(),
                        number: index + 1,
                        source,
                    }
                })?;
                questions.push(question);
            }
            topics.insert(topic, questions);
        }

        log::info!("loaded question bank with {} topics", topics.len());
        Ok(Self { topics })
    }

    /// Read and validate a bank from a file.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the file cannot be read, otherwise the
    /// same errors as [`JsonQuestionBank::from_json_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref();
        log::debug!("reading question bank from {}", path.display());
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    #[must_use]
    pub fn topic_count(&self) -> usize {
        self.topics.len()
    }

    #[must_use]
    pub fn questions(&self, topic: &Topic) -> Option<&[Question]> {
        self.topics.get(topic).map(Vec::as_slice)
    }

    /// Move every topic into an in-memory repository.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the repository lock is poisoned.
    pub fn into_repository(self) -> Result<InMemoryRepository, StorageError> {
        let repo = InMemoryRepository::new();
        for (topic, questions) in self.topics {
            repo.upsert_topic(topic, questions)?;
        }
        Ok(repo)
    }
}
