//! A single attempt at a quiz.

use rand::{rng, seq::SliceRandom};
use thiserror::Error;

use crate::models::{Answer, Question, QuestionKind, Quiz};
use crate::results::QuizResults;

/// Outcome of trying to move past the current question.
#[derive(Debug, Clone, PartialEq)]
pub enum Advance {
    /// The current question has no answer yet.
    Blocked,
    /// Moved to the next question.
    Moved,
    /// The last question was answered and the attempt is over.
    Finished(QuizResults),
}

/// A session needs at least one question to point at.
#[derive(Debug, Error)]
#[error("quiz \"{topic}\" has no questions")]
pub struct EmptyQuizError {
    pub topic: String,
}

pub struct QuizSession {
    topic: String,
    questions: Vec<Question>,
    answers: Vec<Option<Answer>>,
    current_index: usize,
    shuffle: bool,
}

impl QuizSession {
    pub fn new(quiz: Quiz, shuffle: bool) -> Result<Self, EmptyQuizError> {
        if quiz.questions.is_empty() {
            return Err(EmptyQuizError { topic: quiz.topic });
        }

        let mut session = Self {
            topic: quiz.topic,
            answers: vec![None; quiz.questions.len()],
            questions: quiz.questions,
            current_index: 0,
            shuffle,
        };
        session.shuffle_questions();
        Ok(session)
    }

    fn shuffle_questions(&mut self) {
        if self.shuffle {
            self.questions.shuffle(&mut rng());
        }
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &[Option<Answer>] {
        &self.answers
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.current_index]
    }

    pub fn current_answer(&self) -> Option<&Answer> {
        self.answers[self.current_index].as_ref()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.questions.len()
    }

    /// Fraction of the quiz already behind the player, in `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        if self.questions.is_empty() {
            return 0.0;
        }
        self.current_index as f64 / self.questions.len() as f64
    }

    /// Stores the answer for the current question.
    ///
    /// Text is trimmed; blank text clears the slot.
    pub fn select_answer(&mut self, answer: Answer) {
        let answer = match answer {
            Answer::Text(text) => {
                let trimmed = text.trim();
                (!trimmed.is_empty()).then(|| Answer::Text(trimmed.to_string()))
            }
            other => Some(other),
        };
        self.answers[self.current_index] = answer;
    }

    /// Unsupported question types can be skipped without an answer.
    pub fn can_advance(&self) -> bool {
        self.current_answer().is_some()
            || matches!(self.current_question().kind, QuestionKind::Unknown)
    }

    pub fn next(&mut self) -> Advance {
        if !self.can_advance() {
            return Advance::Blocked;
        }

        if self.is_last_question() {
            let results = self.results();
            tracing::info!(
                topic = %self.topic,
                correct = results.correct,
                total = results.total,
                "quiz finished"
            );
            return Advance::Finished(results);
        }

        self.current_index += 1;
        Advance::Moved
    }

    /// Returns false when already on the first question.
    pub fn previous(&mut self) -> bool {
        if self.current_index == 0 {
            return false;
        }
        self.current_index -= 1;
        true
    }

    pub fn results(&self) -> QuizResults {
        QuizResults::tally(&self.questions, &self.answers)
    }

    /// Starts over with a fresh order and no answers.
    pub fn restart(&mut self) {
        self.current_index = 0;
        self.answers = vec![None; self.questions.len()];
        self.shuffle_questions();
        tracing::debug!(topic = %self.topic, "quiz restarted");
    }
}
