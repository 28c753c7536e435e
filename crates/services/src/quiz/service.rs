use std::sync::Arc;

use quiz_core::model::{QuestionSet, Topic};
use storage::{QuestionRepository, TopicSummary};
use url::Url;

use super::controller::QuizController;
use crate::error::QuizError;

/// Loads question sets and starts quizzes for a topic.
#[derive(Clone)]
pub struct QuizService {
    questions: Arc<dyn QuestionRepository>,
}

impl QuizService {
    #[must_use]
    pub fn new(questions: Arc<dyn QuestionRepository>) -> Self {
        Self { questions }
    }

    /// List every topic with its question count.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Storage` if the provider fails.
    pub async fn list_topics(&self) -> Result<Vec<TopicSummary>, QuizError> {
        Ok(self.questions.list_topics().await?)
    }

    /// Load the immutable question set for a topic.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Storage` if the provider fails.
    pub async fn load_topic(&self, topic: &Topic) -> Result<Arc<QuestionSet>, QuizError> {
        let set = self.questions.questions_by_topic(topic).await?;
        log::info!("loaded {} questions for topic {:?}", set.total(), topic.as_str());
        Ok(Arc::new(set))
    }

    /// Load a topic and mount a quiz at the position encoded in `location`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Storage` if the provider fails.
    pub async fn start(&self, topic: &Topic, location: Url) -> Result<QuizController, QuizError> {
        let questions = self.load_topic(topic).await?;
        Ok(QuizController::mount(questions, location))
    }
}

impl std::fmt::Debug for QuizService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuizService").finish_non_exhaustive()
    }
}
