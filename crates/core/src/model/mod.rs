mod question;
mod question_set;
mod topic;

pub use question::{InputKind, Question, QuestionError};
pub use question_set::QuestionSet;
pub use topic::Topic;
