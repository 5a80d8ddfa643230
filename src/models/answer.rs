use serde::{Deserialize, Serialize};

/// A candidate answer given by the player.
///
/// Deserialized untagged so an answers file can hold plain JSON values:
/// `2`, `true` or `"fotosyntéza"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    /// Index into the options of a multiple-choice question.
    Choice(usize),
    /// Verdict for a true/false statement.
    Verdict(bool),
    /// Free text for a fill-in-the-blank question.
    Text(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answers_from_plain_json() {
        let answers: Vec<Option<Answer>> =
            serde_json::from_str(r#"[2, true, "želva", null]"#).unwrap();
        assert_eq!(
            answers,
            vec![
                Some(Answer::Choice(2)),
                Some(Answer::Verdict(true)),
                Some(Answer::Text("želva".to_string())),
                None,
            ]
        );
    }
}
