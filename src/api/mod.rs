pub mod client;
pub mod decode;

// Public API exports
pub use client::{HttpQuizSource, QuizSource};
pub use decode::parse_quiz;
