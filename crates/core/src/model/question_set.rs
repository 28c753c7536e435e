use crate::model::{Question, Topic};

/// Ordered, immutable list of questions for one topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSet {
    topic: Topic,
    questions: Vec<Question>,
}

impl QuestionSet {
    #[must_use]
    pub fn new(topic: Topic, questions: Vec<Question>) -> Self {
        Self { topic, questions }
    }

    #[must_use]
    pub fn empty(topic: Topic) -> Self {
        Self::new(topic, Vec::new())
    }

    #[must_use]
    pub fn topic(&self) -> &Topic {
        &self.topic
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}
