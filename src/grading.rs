//! Answer grading.
//!
//! Pure functions only: nothing here touches session or UI state, so a
//! question and a candidate answer are all that is needed to get a verdict.

use std::ops::RangeInclusive;

use unicode_normalization::UnicodeNormalization;

use crate::models::{Answer, Question, QuestionKind};

/// Block of combining diacritical marks dropped after NFD decomposition.
const COMBINING_MARKS: RangeInclusive<char> = '\u{0300}'..='\u{036f}';

/// Correct answers up to this many characters tolerate a single edit.
const SHORT_ANSWER_LENGTH: usize = 5;
const SHORT_ANSWER_TOLERANCE: usize = 1;
const LONG_ANSWER_TOLERANCE: usize = 2;

/// Returns true if `candidate` is a correct answer to `question`.
///
/// A candidate whose shape does not fit the question type, an absent
/// candidate and an unknown question type all grade as incorrect.
pub fn evaluate(question: &Question, candidate: Option<&Answer>) -> bool {
    match (&question.kind, candidate) {
        (QuestionKind::MultipleChoice { answer, .. }, Some(Answer::Choice(choice))) => {
            choice == answer
        }
        (QuestionKind::TrueFalse { answer }, Some(Answer::Verdict(verdict))) => verdict == answer,
        (QuestionKind::FillBlank { answer }, Some(Answer::Text(text))) => fuzzy_match(text, answer),
        _ => false,
    }
}

/// Lowercases, trims and strips diacritics, so "  Želva " becomes "zelva".
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .trim()
        .nfd()
        .filter(|c| !COMBINING_MARKS.contains(c))
        .collect()
}

/// Compares free text against the expected answer, forgiving small typos.
pub fn fuzzy_match(user: &str, correct: &str) -> bool {
    let user = normalize(user);
    let correct = normalize(correct);

    if user == correct {
        return true;
    }

    levenshtein_distance(&user, &correct) <= tolerance(&correct)
}

/// Number of edits accepted against an already normalized correct answer.
pub fn tolerance(correct: &str) -> usize {
    if correct.chars().count() <= SHORT_ANSWER_LENGTH {
        SHORT_ANSWER_TOLERANCE
    } else {
        LONG_ANSWER_TOLERANCE
    }
}

/// Classic dynamic-programming edit distance, counted in characters.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    // Rows follow `b`, columns follow `a`.
    let mut matrix = vec![vec![0usize; a.len() + 1]; b.len() + 1];
    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in matrix[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=b.len() {
        for j in 1..=a.len() {
            matrix[i][j] = if b[i - 1] == a[j - 1] {
                matrix[i - 1][j - 1]
            } else {
                let substitution = matrix[i - 1][j - 1];
                let insertion = matrix[i][j - 1];
                let deletion = matrix[i - 1][j];
                substitution.min(insertion).min(deletion) + 1
            };
        }
    }

    matrix[b.len()][a.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(kind: QuestionKind) -> Question {
        Question {
            prompt: "Q".to_string(),
            kind,
            explanation: None,
        }
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Želva "), "zelva");
        assert_eq!(normalize("FOTOSYNTÉZA"), "fotosynteza");
        assert_eq!(normalize("Příliš žluťoučký kůň"), "prilis zlutoucky kun");
    }

    #[test]
    fn test_fuzzy_match_identity() {
        for s in ["", "a", "kocka", "fotosyntéza", "  mixed Case  ", "ďábel"] {
            assert!(fuzzy_match(s, s), "{s:?} should match itself");
        }
    }

    #[test]
    fn test_fuzzy_match_ignores_case_and_diacritics() {
        assert!(fuzzy_match("Praha", "praha"));
        assert!(fuzzy_match("zelva", "želva"));
        assert!(fuzzy_match("  ZELVA", "želva"));
    }

    #[test]
    fn test_short_answer_threshold() {
        assert!(fuzzy_match("kocka", "kocga"));
        assert!(!fuzzy_match("kocka", "kocgg"));
        // Missing letter on a short answer is one edit.
        assert!(fuzzy_match("koka", "kočka"));
    }

    #[test]
    fn test_long_answer_threshold() {
        assert_eq!("zelenina".len(), 8);
        assert!(fuzzy_match("zelenina", "zelenina"));
        assert!(fuzzy_match("xelenina", "zelenina"));
        assert!(fuzzy_match("xeleniny", "zelenina"));
        assert!(!fuzzy_match("xelxniny", "zelenina"));
    }

    #[test]
    fn test_threshold_uses_correct_answer_length() {
        // Correct answer has 5 characters, so only one edit is allowed even
        // though the user's text is longer.
        assert!(!fuzzy_match("kockaaa", "kocka"));
        assert_eq!(tolerance("kocka"), 1);
        assert_eq!(tolerance("kockaa"), 2);
    }

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("cat", "cat"), 0);
        assert_eq!(levenshtein_distance("cat", "bat"), 1);
        assert_eq!(levenshtein_distance("cat", "cars"), 2);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("žluť", "zlut"), 2);
    }

    #[test]
    fn test_levenshtein_distance_is_symmetric() {
        let words = ["", "a", "kocka", "kocgg", "zelenina", "sitting", "kitten", "želva"];
        for a in words {
            for b in words {
                assert_eq!(levenshtein_distance(a, b), levenshtein_distance(b, a), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn test_evaluate_multiple_choice() {
        let q = question(QuestionKind::MultipleChoice {
            options: vec!["a".into(), "b".into(), "c".into()],
            answer: 2,
        });
        assert!(evaluate(&q, Some(&Answer::Choice(2))));
        assert!(!evaluate(&q, Some(&Answer::Choice(1))));
        assert!(!evaluate(&q, None));
    }

    #[test]
    fn test_evaluate_true_false() {
        let q = question(QuestionKind::TrueFalse { answer: true });
        assert!(evaluate(&q, Some(&Answer::Verdict(true))));
        assert!(!evaluate(&q, Some(&Answer::Verdict(false))));
    }

    #[test]
    fn test_evaluate_fill_blank() {
        let q = question(QuestionKind::FillBlank {
            answer: "fotosyntéza".to_string(),
        });
        assert!(evaluate(&q, Some(&Answer::Text("Fotosynteza".to_string()))));
        assert!(evaluate(&q, Some(&Answer::Text("fotosintza".to_string()))));
        assert!(!evaluate(&q, Some(&Answer::Text("dýchání".to_string()))));
        assert!(!evaluate(&q, None));
    }

    #[test]
    fn test_evaluate_mismatched_shapes() {
        let fill = question(QuestionKind::FillBlank { answer: "1".to_string() });
        assert!(!evaluate(&fill, Some(&Answer::Choice(1))));

        let choice = question(QuestionKind::MultipleChoice {
            options: vec!["a".into(), "b".into()],
            answer: 1,
        });
        assert!(!evaluate(&choice, Some(&Answer::Verdict(true))));
        assert!(!evaluate(&choice, Some(&Answer::Text("b".to_string()))));

        let unknown = question(QuestionKind::Unknown);
        assert!(!evaluate(&unknown, Some(&Answer::Text("anything".to_string()))));
    }
}
