mod controller;
mod progress;
mod service;

// Public API of the quiz subsystem.
pub use controller::{LocationChange, QuizController};
pub use progress::QuizProgress;
pub use service::QuizService;
