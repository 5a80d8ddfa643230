use std::path::PathBuf;

use crate::data::{load_quiz, Manifest, ManifestEntry};
use crate::models::{Answer, AppState, QuestionKind, Quiz};
use crate::results::QuizResults;
use crate::session::{Advance, EmptyQuizError, QuizSession};

const TRUE_FALSE_CHOICES: usize = 2;

pub struct App {
    pub state: AppState,
    quizzes_dir: PathBuf,
    catalog: Vec<ManifestEntry>,
    catalog_selected: usize,
    shuffle: bool,
    session: Option<QuizSession>,
    results: Option<QuizResults>,
    selected_option: usize,
    text_input: String,
    result_scroll: usize,
    show_help: bool,
    status: Option<String>,
}

impl App {
    /// Starts on the catalog screen listing the quizzes in `quizzes_dir`.
    pub fn with_catalog(quizzes_dir: PathBuf, manifest: Manifest, shuffle: bool) -> Self {
        Self {
            state: AppState::Catalog,
            quizzes_dir,
            catalog: manifest.quizzes,
            catalog_selected: 0,
            shuffle,
            session: None,
            results: None,
            selected_option: 0,
            text_input: String::new(),
            result_scroll: 0,
            show_help: false,
            status: None,
        }
    }

    /// Starts straight on the first question of `quiz`, with an empty catalog.
    pub fn with_quiz(quiz: Quiz, shuffle: bool) -> Result<Self, EmptyQuizError> {
        let mut app = Self::with_catalog(PathBuf::new(), Manifest::default(), shuffle);
        app.start_quiz(quiz)?;
        Ok(app)
    }

    pub fn catalog(&self) -> &[ManifestEntry] {
        &self.catalog
    }

    pub fn catalog_selected(&self) -> usize {
        self.catalog_selected
    }

    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    pub fn results(&self) -> Option<&QuizResults> {
        self.results.as_ref()
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    pub fn text_input(&self) -> &str {
        &self.text_input
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn has_catalog(&self) -> bool {
        !self.catalog.is_empty()
    }

    /// True when the current question takes typed text, so letter keys are input.
    pub fn is_typing(&self) -> bool {
        self.state == AppState::Quiz
            && self
                .session
                .as_ref()
                .is_some_and(|s| matches!(s.current_question().kind, QuestionKind::FillBlank { .. }))
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn select_next_quiz(&mut self) {
        if !self.catalog.is_empty() {
            self.catalog_selected = (self.catalog_selected + 1) % self.catalog.len();
        }
    }

    pub fn select_previous_quiz(&mut self) {
        if !self.catalog.is_empty() {
            let len = self.catalog.len();
            self.catalog_selected = (self.catalog_selected + len - 1) % len;
        }
    }

    /// Loads the highlighted catalog entry. Failures are shown as a status line.
    pub fn open_selected_quiz(&mut self) {
        let Some(entry) = self.catalog.get(self.catalog_selected) else {
            return;
        };
        let path = self.quizzes_dir.join(&entry.file);

        let started = load_quiz(&path)
            .map_err(|err| err.to_string())
            .and_then(|quiz| self.start_quiz(quiz).map_err(|err| err.to_string()));
        if let Err(err) = started {
            tracing::warn!(error = %err, "could not open quiz");
            self.status = Some(format!("Could not load quiz: {err}"));
        }
    }

    /// Leaves the current screen untouched when `quiz` has no questions.
    pub fn start_quiz(&mut self, quiz: Quiz) -> Result<(), EmptyQuizError> {
        tracing::info!(topic = %quiz.topic, questions = quiz.questions.len(), "starting quiz");
        self.session = Some(QuizSession::new(quiz, self.shuffle)?);
        self.results = None;
        self.status = None;
        self.state = AppState::Quiz;
        self.sync_input();
        Ok(())
    }

    fn option_count(&self) -> usize {
        match self.session.as_ref().map(|s| &s.current_question().kind) {
            Some(QuestionKind::MultipleChoice { options, .. }) => options.len(),
            Some(QuestionKind::TrueFalse { .. }) => TRUE_FALSE_CHOICES,
            _ => 0,
        }
    }

    pub fn select_next_option(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.selected_option = (self.selected_option + 1) % count;
        }
    }

    pub fn select_previous_option(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.selected_option = (self.selected_option + count - 1) % count;
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.text_input.push(c);
        self.record_text();
    }

    pub fn pop_char(&mut self) {
        self.text_input.pop();
        self.record_text();
    }

    fn record_text(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.select_answer(Answer::Text(self.text_input.clone()));
        }
    }

    /// Commits the highlighted option (or typed text) and moves on.
    pub fn submit_answer(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let answer = match session.current_question().kind {
            QuestionKind::MultipleChoice { .. } => Some(Answer::Choice(self.selected_option)),
            QuestionKind::TrueFalse { .. } => Some(Answer::Verdict(self.selected_option == 0)),
            QuestionKind::FillBlank { .. } => Some(Answer::Text(self.text_input.clone())),
            // Skipped without an answer.
            QuestionKind::Unknown => None,
        };
        if let Some(answer) = answer {
            session.select_answer(answer);
        }

        match session.next() {
            Advance::Blocked => self.status = Some("Type an answer first".to_string()),
            Advance::Moved => {
                self.status = None;
                self.sync_input();
            }
            Advance::Finished(results) => {
                self.status = None;
                self.results = Some(results);
                self.result_scroll = 0;
                self.state = AppState::Result;
            }
        }
    }

    pub fn previous_question(&mut self) {
        if self.session.as_mut().is_some_and(QuizSession::previous) {
            self.status = None;
            self.sync_input();
        }
    }

    /// Puts the cursor and text box back to whatever was saved for the question.
    fn sync_input(&mut self) {
        self.selected_option = 0;
        self.text_input.clear();

        let Some(session) = self.session.as_ref() else {
            return;
        };
        match session.current_answer() {
            Some(Answer::Choice(index)) => self.selected_option = *index,
            Some(Answer::Verdict(value)) => self.selected_option = if *value { 0 } else { 1 },
            Some(Answer::Text(text)) => self.text_input = text.clone(),
            None => {}
        }
    }

    pub fn scroll_results_down(&mut self) {
        let mistakes = self.results.as_ref().map_or(0, |r| r.mistakes.len());
        self.result_scroll = (self.result_scroll + 1).min(mistakes.saturating_sub(1));
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    pub fn restart(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.restart();
            self.results = None;
            self.status = None;
            self.state = AppState::Quiz;
            self.sync_input();
        }
    }

    pub fn back_to_catalog(&mut self) {
        self.session = None;
        self.results = None;
        self.status = None;
        self.show_help = false;
        self.state = AppState::Catalog;
    }
}
