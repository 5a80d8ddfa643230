use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use quiz_player::logging::{self, LogTarget};
use quiz_player::{
    load_manifest, load_quiz, rebuild_manifest, Answer, Config, Player, QuizResults,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// TOML config file (defaults to ./quiz.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the quiz files and manifest.json
    #[arg(short, long, global = true)]
    quizzes_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play interactively (the default)
    Play {
        /// Play this quiz file instead of opening the catalog
        #[arg(short, long)]
        topic: Option<PathBuf>,

        /// Keep the question order from the file
        #[arg(long)]
        no_shuffle: bool,
    },

    /// Print the quiz catalog
    List,

    /// Grade a JSON array of answers against a quiz file
    Grade {
        /// Quiz definition file
        quiz: PathBuf,

        /// Answers file: one value per question (index, true/false, text or null)
        answers: PathBuf,
    },

    /// Rebuild manifest.json from the quiz files
    Manifest,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = Config::load(args.config.as_deref()).context("failed to load configuration")?;
    let quizzes_dir = args
        .quizzes_dir
        .clone()
        .unwrap_or_else(|| config.quizzes_dir.clone());

    match args.command.unwrap_or(Command::Play {
        topic: None,
        no_shuffle: false,
    }) {
        Command::Play { topic, no_shuffle } => {
            let target = match &config.log_file {
                Some(path) => LogTarget::File(path),
                None => LogTarget::Discard,
            };
            logging::init(target, &config.log_level).context("failed to open log file")?;

            let shuffle = config.shuffle && !no_shuffle;
            let player = match topic {
                Some(path) => Player::from_quiz_file(&path, shuffle)?,
                None => Player::from_catalog(quizzes_dir, shuffle)?,
            };
            player.run()?;
        }
        Command::List => {
            logging::init(LogTarget::Stderr, &config.log_level)?;
            list(&quizzes_dir)?;
        }
        Command::Grade { quiz, answers } => {
            logging::init(LogTarget::Stderr, &config.log_level)?;
            grade(&quiz, &answers)?;
        }
        Command::Manifest => {
            logging::init(LogTarget::Stderr, &config.log_level)?;
            let today = chrono::Local::now().date_naive();
            let manifest = rebuild_manifest(&quizzes_dir, today)
                .with_context(|| format!("failed to rebuild manifest in {}", quizzes_dir.display()))?;
            println!("Updated manifest with {} quiz(es)", manifest.quizzes.len());
        }
    }

    Ok(())
}

fn list(quizzes_dir: &Path) -> Result<()> {
    let manifest = load_manifest(quizzes_dir)?;
    if manifest.quizzes.is_empty() {
        println!("No quizzes available in {}", quizzes_dir.display());
        return Ok(());
    }

    for entry in &manifest.quizzes {
        let date = entry.display_date().unwrap_or_default();
        println!(
            "{:<32} {:>4} questions  {:<10}  {}",
            entry.topic, entry.question_count, date, entry.file
        );
    }
    Ok(())
}

fn grade(quiz_path: &Path, answers_path: &Path) -> Result<()> {
    let quiz = load_quiz(quiz_path)?;
    let content = fs::read_to_string(answers_path)
        .with_context(|| format!("failed to read {}", answers_path.display()))?;
    let answers: Vec<Option<Answer>> = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse {}", answers_path.display()))?;

    if answers.len() != quiz.questions.len() {
        tracing::warn!(
            answers = answers.len(),
            questions = quiz.questions.len(),
            "answer count does not match question count"
        );
    }

    let results = QuizResults::tally(&quiz.questions, &answers);
    print_results(&quiz.topic, &results);
    Ok(())
}

fn print_results(topic: &str, results: &QuizResults) {
    println!("{}", topic);
    println!(
        "Score: {}/{} ({}%) - {}",
        results.correct,
        results.total,
        results.percentage(),
        results.grade().label()
    );

    for mistake in &results.mistakes {
        println!();
        println!("{}. {}", mistake.question_number, mistake.prompt);
        println!("   Your answer:    {}", mistake.your_answer);
        println!("   Correct answer: {}", mistake.correct_answer);
        if let Some(explanation) = &mistake.explanation {
            println!("   {}", explanation);
        }
    }
}
