pub mod content;
pub mod rest;

pub use content::{ContentStore, QuizData, COLLEGES_FILE, QUIZ_FILE};
pub use rest::RestApi;
