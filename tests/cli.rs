//! CLI integration tests using assert_cmd.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn demos() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos")
}

/// Runs from an empty directory so no stray quiz.toml is picked up.
fn quiz_player(cwd: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("quiz-player").unwrap();
    cmd.current_dir(cwd.path());
    cmd
}

#[test]
fn grade_demo_answers() {
    let cwd = TempDir::new().unwrap();
    quiz_player(&cwd)
        .arg("grade")
        .arg(demos().join("quizzes/rostliny.json"))
        .arg(demos().join("answers-rostliny.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Rostliny"))
        .stdout(predicate::str::contains("Score: 4/4 (100%) - Excellent"));
}

#[test]
fn grade_reports_mistakes() {
    let cwd = TempDir::new().unwrap();
    let answers = cwd.path().join("answers.json");
    fs::write(&answers, r#"["zelva", true, null]"#).unwrap();

    quiz_player(&cwd)
        .arg("grade")
        .arg(demos().join("quizzes/zvirata.json"))
        .arg(&answers)
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 1/3 (33%) - Needs work"))
        .stdout(predicate::str::contains("Correct answer: False"))
        .stdout(predicate::str::contains("Velryba je savec"));
}

#[test]
fn grade_rejects_invalid_quiz() {
    let cwd = TempDir::new().unwrap();
    let quiz = cwd.path().join("bad.json");
    let answers = cwd.path().join("answers.json");
    fs::write(
        &quiz,
        r#"{"questions": [{"type": "multiple_choice", "question": "Q", "options": [], "answer": 0}]}"#,
    )
    .unwrap();
    fs::write(&answers, "[0]").unwrap();

    quiz_player(&cwd)
        .arg("grade")
        .arg(&quiz)
        .arg(&answers)
        .assert()
        .failure()
        .stderr(predicate::str::contains("question 1"));
}

#[test]
fn list_demo_catalog() {
    let cwd = TempDir::new().unwrap();
    quiz_player(&cwd)
        .arg("list")
        .arg("--quizzes-dir")
        .arg(demos().join("quizzes"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Zvířata"))
        .stdout(predicate::str::contains("02.03.2025"))
        .stdout(predicate::str::contains("rostliny.json"));
}

#[test]
fn list_empty_directory() {
    let cwd = TempDir::new().unwrap();
    quiz_player(&cwd)
        .arg("list")
        .arg("--quizzes-dir")
        .arg(cwd.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No quizzes available"));
}

#[test]
fn manifest_rebuild_from_config() {
    let cwd = TempDir::new().unwrap();
    let quizzes = cwd.path().join("quizzes");
    fs::create_dir(&quizzes).unwrap();
    fs::copy(demos().join("quizzes/zvirata.json"), quizzes.join("zvirata.json")).unwrap();
    fs::write(cwd.path().join("quiz.toml"), "quizzes_dir = \"quizzes\"\n").unwrap();

    quiz_player(&cwd)
        .arg("manifest")
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated manifest with 1 quiz(es)"));

    let manifest = fs::read_to_string(quizzes.join("manifest.json")).unwrap();
    assert!(manifest.contains("\"topic\": \"Zvířata\""));
    assert!(manifest.contains("\"questionCount\": 3"));
}

#[test]
fn invalid_config_fails() {
    let cwd = TempDir::new().unwrap();
    fs::write(cwd.path().join("quiz.toml"), "shuffle = 3").unwrap();

    quiz_player(&cwd)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load configuration"));
}
