use async_trait::async_trait;
use quiz_core::model::{Question, QuestionError, QuestionSet, Topic};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by question providers.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid question #{number} in topic {topic:?}: {source}")]
    InvalidQuestion {
        topic: Topic,
        number: usize,
        #[source]
        source: QuestionError,
    },
}

/// Wire shape of a question in a question bank.
///
/// Field names follow the bank format (`question`, `answerIndexes`, ...) so the
/// domain `Question` stays free of serialization concerns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRecord {
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer_indexes: Option<Vec<usize>>,
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub has_code: bool,
}

impl QuestionRecord {
    #[must_use]
    pub fn from_question(question: &Question) -> Self {
        Self {
            question: question.text().to_owned(),
            options: question.options().map(<[String]>::to_vec),
            answer_indexes: question
                .answer_indexes()
                .map(|indexes| indexes.iter().copied().collect()),
            answer: question.answer_text().to_owned(),
            has_code: question.has_code(),
        }
    }

    /// Convert the record into a domain `Question`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if an answer index falls outside the options.
    pub fn into_question(self) -> Result<Question, QuestionError> {
        Question::new(
            self.question,
            self.options,
            self.answer_indexes.map(|indexes| indexes.into_iter().collect()),
            self.answer,
            self.has_code,
        )
    }
}

/// Topic name with its question count, for topic listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicSummary {
    pub topic: Topic,
    pub total: usize,
}

/// Provider of ordered question sets.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Fetch the ordered question set for a topic.
    ///
    /// Unknown and empty topics yield an empty set rather than an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing store cannot be read.
    async fn questions_by_topic(&self, topic: &Topic) -> Result<QuestionSet, StorageError>;

    /// List every topic with its question count, sorted by name.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing store cannot be read.
    async fn list_topics(&self) -> Result<Vec<TopicSummary>, StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    topics: Arc<Mutex<BTreeMap<Topic, Vec<Question>>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the questions of a topic.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the lock is poisoned.
    pub fn upsert_topic(&self, topic: Topic, questions: Vec<Question>) -> Result<(), StorageError> {
        let mut guard = self
            .topics
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(topic, questions);
        Ok(())
    }
}

#[async_trait]
impl QuestionRepository for InMemoryRepository {
    async fn questions_by_topic(&self, topic: &Topic) -> Result<QuestionSet, StorageError> {
        let guard = self
            .topics
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let questions = guard.get(topic).cloned().unwrap_or_default();
        if questions.is_empty() {
            log::debug!("no questions for topic {topic:?}");
        }
        Ok(QuestionSet::new(topic.clone(), questions))
    }

    async fn list_topics(&self) -> Result<Vec<TopicSummary>, StorageError> {
        let guard = self
            .topics
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard
            .iter()
            .map(|(topic, questions)| TopicSummary {
                topic: topic.clone(),
                total: questions.len(),
            })
            .collect())
    }
}

/// Aggregates the question provider behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub questions: Arc<dyn QuestionRepository>,
}

impl Storage {
    #[must_use]
    pub fn from_repository(repo: impl QuestionRepository + 'static) -> Self {
        Self {
            questions: Arc::new(repo),
        }
    }
}
