use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::Quiz;

const FALLBACK_TOPIC: &str = "Quiz";

/// Errors that can occur when loading a quiz definition.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} must contain at least one question", path.display())]
    Empty { path: PathBuf },

    #[error("{}: question {number}: {reason}", path.display())]
    InvalidQuestion {
        path: PathBuf,
        number: usize,
        reason: &'static str,
    },
}

/// Reads and validates a quiz definition document.
pub fn load_quiz<P: AsRef<Path>>(path: P) -> Result<Quiz, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut quiz: Quiz = serde_json::from_str(&json_content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if quiz.questions.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }

    for (index, question) in quiz.questions.iter().enumerate() {
        if let Some(reason) = question.invariant_violation() {
            return Err(LoadError::InvalidQuestion {
                path: path.to_path_buf(),
                number: index + 1,
                reason,
            });
        }
    }

    if quiz.topic.trim().is_empty() {
        quiz.topic = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| FALLBACK_TOPIC.to_string());
    }

    tracing::debug!(
        path = %path.display(),
        topic = %quiz.topic,
        questions = quiz.questions.len(),
        "loaded quiz"
    );

    Ok(quiz)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use tempfile::NamedTempFile;

    fn write_quiz(content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_quiz() {
        let file = write_quiz(
            r#"{"topic": "Rostliny", "questions": [
                {"type": "true_false", "question": "Q", "answer": true}
            ]}"#,
        );
        let quiz = load_quiz(file.path()).unwrap();
        assert_eq!(quiz.topic, "Rostliny");
        assert_eq!(quiz.questions.len(), 1);
    }

    #[test]
    fn test_missing_topic_uses_file_stem() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vyjmenovana-slova.json");
        fs::write(
            &path,
            r#"{"questions": [{"type": "fill_blank", "question": "Q", "answer": "by"}]}"#,
        )
        .unwrap();

        let quiz = load_quiz(&path).unwrap();
        assert_eq!(quiz.topic, "vyjmenovana-slova");
    }

    #[test]
    fn test_missing_file() {
        let err = load_quiz("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn test_malformed_json() {
        let file = write_quiz("{not json");
        let err = load_quiz(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn test_empty_quiz_is_rejected() {
        let file = write_quiz(r#"{"topic": "Nothing", "questions": []}"#);
        let err = load_quiz(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Empty { .. }));
    }

    #[test]
    fn test_invalid_question_is_reported_by_number() {
        let file = write_quiz(
            r#"{"questions": [
                {"type": "true_false", "question": "Q1", "answer": false},
                {"type": "multiple_choice", "question": "Q2", "options": ["a"], "answer": 3}
            ]}"#,
        );
        let err = load_quiz(file.path()).unwrap_err();
        match err {
            LoadError::InvalidQuestion { number, .. } => assert_eq!(number, 2),
            other => panic!("unexpected error: {other}"),
        }
    }
}
