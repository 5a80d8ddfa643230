//! Tallying a finished attempt.

use crate::grading::evaluate;
use crate::models::{Answer, Question};

/// Score band shown next to the percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    Excellent,
    Good,
    Fair,
    NeedsWork,
}

impl Grade {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            90.. => Grade::Excellent,
            75..=89 => Grade::Good,
            50..=74 => Grade::Fair,
            _ => Grade::NeedsWork,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Grade::Excellent => "Excellent",
            Grade::Good => "Good",
            Grade::Fair => "Fair",
            Grade::NeedsWork => "Needs work",
        }
    }
}

/// A question answered incorrectly, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Mistake {
    pub question_number: usize,
    pub prompt: String,
    pub your_answer: String,
    pub correct_answer: String,
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuizResults {
    pub correct: usize,
    pub total: usize,
    pub mistakes: Vec<Mistake>,
}

impl QuizResults {
    /// Grades every question against the answer in the same position.
    ///
    /// Missing trailing answers count as unanswered.
    pub fn tally(questions: &[Question], answers: &[Option<Answer>]) -> Self {
        let mut correct = 0;
        let mut mistakes = Vec::new();

        for (index, question) in questions.iter().enumerate() {
            let answer = answers.get(index).and_then(Option::as_ref);
            if evaluate(question, answer) {
                correct += 1;
            } else {
                mistakes.push(Mistake {
                    question_number: index + 1,
                    prompt: question.prompt.clone(),
                    your_answer: question.answer_text(answer),
                    correct_answer: question.correct_answer_text(),
                    explanation: question.explanation.clone(),
                });
            }
        }

        tracing::debug!(correct, total = questions.len(), "attempt graded");

        Self {
            correct,
            total: questions.len(),
            mistakes,
        }
    }

    /// Rounded share of correct answers; 0 for an empty quiz.
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.correct as f64 / self.total as f64 * 100.0).round() as u32
    }

    pub fn grade(&self) -> Grade {
        Grade::from_percentage(self.percentage())
    }
}
