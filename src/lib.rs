//! # quiz-player
//!
//! A terminal quiz player: pick a quiz from a catalog, answer
//! multiple-choice, true/false and fill-in-the-blank questions, and get a
//! score with a list of mistakes. Typed answers are graded leniently:
//! case, surrounding whitespace and diacritics are ignored, and a small
//! number of typos is forgiven.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quiz_player::{Player, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     // Play a single quiz file, shuffling question order
//!     let player = Player::from_quiz_file("quizzes/rostliny.json", true)?;
//!     player.run()?;
//!
//!     Ok(())
//! }
//! ```
//!
//! Grading is available without any terminal:
//!
//! ```rust
//! use quiz_player::grading::fuzzy_match;
//!
//! assert!(fuzzy_match("Zelva", "želva"));
//! assert!(!fuzzy_match("kocgg", "kocka"));
//! ```

mod app;
pub mod config;
mod data;
pub mod grading;
pub mod logging;
mod models;
pub mod results;
pub mod session;
pub mod terminal;
mod ui;

use std::io;
use std::path::{Path, PathBuf};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use thiserror::Error;

pub use app::App;
pub use config::{Config, ConfigError};
pub use data::{
    load_manifest, load_quiz, rebuild_manifest, LoadError, Manifest, ManifestEntry, ManifestError,
    MANIFEST_FILE,
};
pub use grading::evaluate;
pub use models::{Answer, AppState, Question, QuestionKind, Quiz};
pub use results::{Grade, Mistake, QuizResults};
pub use session::{EmptyQuizError, QuizSession};

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("failed to load quiz: {0}")]
    Load(#[from] LoadError),

    #[error("failed to load catalog: {0}")]
    Manifest(#[from] ManifestError),

    #[error(transparent)]
    EmptyQuiz(#[from] EmptyQuizError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Interactive player that owns the terminal while it runs.
pub struct Player {
    app: App,
}

impl Player {
    pub fn new(app: App) -> Self {
        Self { app }
    }

    /// Opens on the catalog of quizzes listed in `dir/manifest.json`.
    pub fn from_catalog<P: Into<PathBuf>>(dir: P, shuffle: bool) -> Result<Self, QuizError> {
        let dir = dir.into();
        let manifest = load_manifest(&dir)?;
        Ok(Self::new(App::with_catalog(dir, manifest, shuffle)))
    }

    /// Opens straight into a single quiz file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use quiz_player::Player;
    ///
    /// let player = Player::from_quiz_file("quiz.json", false).expect("Failed to load quiz");
    /// ```
    pub fn from_quiz_file<P: AsRef<Path>>(path: P, shuffle: bool) -> Result<Self, QuizError> {
        let quiz = load_quiz(path)?;
        Ok(Self::new(App::with_quiz(quiz, shuffle)?))
    }

    /// Take over the terminal and run until the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        result
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::PlayerTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
pub fn handle_input(app: &mut App, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    if app.show_help() {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::F(1) | KeyCode::Esc) {
            app.toggle_help();
        }
        return false;
    }

    if key.code == KeyCode::F(1) {
        app.toggle_help();
        return false;
    }

    match app.state {
        AppState::Catalog => handle_catalog_input(app, key.code),
        AppState::Quiz if app.is_typing() => handle_typing_input(app, key.code),
        AppState::Quiz => handle_quiz_input(app, key.code),
        AppState::Result => handle_result_input(app, key.code),
    }
}

fn handle_catalog_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.select_next_quiz(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_quiz(),
        KeyCode::Enter => app.open_selected_quiz(),
        KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,
        _ => {}
    }
    false
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Right | KeyCode::Char('l') => {
            app.submit_answer()
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Backspace => app.previous_question(),
        KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Esc => return leave_quiz(app),
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        _ => {}
    }
    false
}

/// Letter keys are text here, so only non-character keys navigate.
fn handle_typing_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char(c) => app.push_char(c),
        KeyCode::Backspace => app.pop_char(),
        KeyCode::Enter => app.submit_answer(),
        KeyCode::Left => app.previous_question(),
        KeyCode::Esc => return leave_quiz(app),
        _ => {}
    }
    false
}

fn handle_result_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_results_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_results_up(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.restart(),
        KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Esc => return leave_quiz(app),
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        _ => {}
    }
    false
}

/// Back to the catalog, or quit when the player was started on a single file.
fn leave_quiz(app: &mut App) -> bool {
    if !app.has_catalog() {
        return true;
    }
    app.back_to_catalog();
    false
}
