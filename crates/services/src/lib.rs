#![forbid(unsafe_code)]

pub mod error;
pub mod location;
pub mod quiz;

pub use error::QuizError;
pub use location::{LocationHistory, MemoryHistory};
pub use storage::TopicSummary;
pub use quiz::{LocationChange, QuizController, QuizProgress, QuizService};
