use serde::{Deserialize, Serialize};

use super::Answer;

/// A quiz definition document: a topic and its questions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    #[serde(default)]
    pub topic: String,
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "question")]
    pub prompt: String,
    #[serde(flatten)]
    pub kind: QuestionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// The question type together with its correct answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionKind {
    MultipleChoice { options: Vec<String>, answer: usize },
    TrueFalse { answer: bool },
    FillBlank { answer: String },
    /// Any `type` tag this player does not know. Never graded as correct.
    #[serde(other)]
    Unknown,
}

impl Question {
    /// Short label shown above the prompt.
    pub fn type_label(&self) -> &'static str {
        match self.kind {
            QuestionKind::MultipleChoice { .. } => "Multiple choice",
            QuestionKind::TrueFalse { .. } => "True or false",
            QuestionKind::FillBlank { .. } => "Fill in the blank",
            QuestionKind::Unknown => "Unknown",
        }
    }

    pub fn options(&self) -> &[String] {
        match &self.kind {
            QuestionKind::MultipleChoice { options, .. } => options,
            _ => &[],
        }
    }

    /// Returns why this question breaks the data model invariants, if it does.
    pub fn invariant_violation(&self) -> Option<&'static str> {
        match &self.kind {
            QuestionKind::MultipleChoice { options, .. } if options.is_empty() => {
                Some("multiple-choice question has no options")
            }
            QuestionKind::MultipleChoice { options, answer } if *answer >= options.len() => {
                Some("multiple-choice answer is not a valid option index")
            }
            QuestionKind::FillBlank { answer } if answer.trim().is_empty() => {
                Some("fill-in-the-blank answer is empty")
            }
            _ => None,
        }
    }

    /// Human-readable form of the correct answer.
    pub fn correct_answer_text(&self) -> String {
        match &self.kind {
            QuestionKind::MultipleChoice { options, answer } => {
                options.get(*answer).cloned().unwrap_or_default()
            }
            QuestionKind::TrueFalse { answer } => verdict_text(*answer).to_string(),
            QuestionKind::FillBlank { answer } => answer.clone(),
            QuestionKind::Unknown => String::new(),
        }
    }

    /// Human-readable form of a candidate answer to this question.
    pub fn answer_text(&self, answer: Option<&Answer>) -> String {
        match (&self.kind, answer) {
            (QuestionKind::Unknown, _) => "(skipped)".to_string(),
            (QuestionKind::MultipleChoice { options, .. }, Some(Answer::Choice(index))) => {
                options.get(*index).cloned().unwrap_or_default()
            }
            (_, Some(Answer::Verdict(value))) => verdict_text(*value).to_string(),
            (_, Some(Answer::Text(text))) if !text.is_empty() => text.clone(),
            (_, Some(Answer::Choice(index))) => index.to_string(),
            _ => "(empty)".to_string(),
        }
    }
}

fn verdict_text(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}
