mod answer;
mod question;

pub use answer::Answer;
pub use question::{Question, QuestionKind, Quiz};

/// Which screen the player is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Catalog,
    Quiz,
    Result,
}
