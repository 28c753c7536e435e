#![forbid(unsafe_code)]

pub mod grading;
pub mod model;
pub mod position;
pub mod quiz;

pub use grading::is_correct;
pub use position::{QuizPosition, POSITION_PARAM, read_position, write_position};
pub use quiz::{AnswerState, QuizPhase, QuizSession};
