//! The catalog of available quizzes.
//!
//! `manifest.json` lives next to the quiz files and lists each one with its
//! topic, question count and the date it first appeared.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MANIFEST_FILE: &str = "manifest.json";

const DATE_FORMAT: &str = "%Y-%m-%d";
const DISPLAY_DATE_FORMAT: &str = "%d.%m.%Y";

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize manifest for {}: {source}", path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Just enough of a quiz file to list it; questions are counted, not validated.
#[derive(Deserialize)]
struct QuizSummary {
    #[serde(default)]
    topic: String,
    #[serde(default)]
    questions: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub quizzes: Vec<ManifestEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEntry {
    /// File name relative to the quizzes directory.
    pub file: String,
    pub topic: String,
    #[serde(default)]
    pub question_count: usize,
    /// `YYYY-MM-DD`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_added: Option<String>,
}

impl ManifestEntry {
    /// `dateAdded` as `DD.MM.YYYY`, or the raw value if it does not parse.
    pub fn display_date(&self) -> Option<String> {
        let raw = self.date_added.as_deref()?;
        Some(
            NaiveDate::parse_from_str(raw, DATE_FORMAT)
                .map(|date| date.format(DISPLAY_DATE_FORMAT).to_string())
                .unwrap_or_else(|_| raw.to_string()),
        )
    }
}

/// Reads `manifest.json` from `dir`. A missing manifest is an empty catalog.
pub fn load_manifest(dir: &Path) -> Result<Manifest, ManifestError> {
    let path = dir.join(MANIFEST_FILE);

    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "no manifest found, catalog is empty");
            return Ok(Manifest::default());
        }
        Err(source) => return Err(ManifestError::Io { path, source }),
    };

    serde_json::from_str(&content).map_err(|source| ManifestError::Parse { path, source })
}

/// Regenerates `manifest.json` from the quiz files in `dir`.
///
/// Files already listed keep their `dateAdded`; new ones get `today`.
/// Files are listed even without a `questions` key or with malformed
/// questions; only files that cannot be read or parsed as JSON are
/// skipped.
pub fn rebuild_manifest(dir: &Path, today: NaiveDate) -> Result<Manifest, ManifestError> {
    let existing_dates: HashMap<String, String> = match load_manifest(dir) {
        Ok(manifest) => manifest
            .quizzes
            .into_iter()
            .filter_map(|entry| entry.date_added.map(|date| (entry.file, date)))
            .collect(),
        Err(err) => {
            tracing::warn!(error = %err, "ignoring unreadable manifest");
            HashMap::new()
        }
    };
    let today = today.format(DATE_FORMAT).to_string();

    let io_err = |source: io::Error| ManifestError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(io_err)?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| {
            path.extension().is_some_and(|ext| ext == "json")
                && path.file_name().is_some_and(|name| name != MANIFEST_FILE)
        })
        .collect();
    files.sort();

    let mut quizzes = Vec::with_capacity(files.len());
    for path in files {
        let Some(file) = path.file_name().map(|name| name.to_string_lossy().into_owned()) else {
            continue;
        };

        let quiz: QuizSummary = match fs::read_to_string(&path)
            .map_err(|err| err.to_string())
            .and_then(|content| serde_json::from_str(&content).map_err(|err| err.to_string()))
        {
            Ok(quiz) => quiz,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "skipping quiz file");
                continue;
            }
        };

        let topic = if quiz.topic.trim().is_empty() {
            path.file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| file.clone())
        } else {
            quiz.topic
        };

        quizzes.push(ManifestEntry {
            date_added: Some(existing_dates.get(&file).cloned().unwrap_or_else(|| today.clone())),
            question_count: quiz.questions.len(),
            topic,
            file,
        });
    }

    // Newest first, then by topic, both descending.
    quizzes.sort_by(|a, b| (&b.date_added, &b.topic).cmp(&(&a.date_added, &a.topic)));

    let manifest = Manifest { quizzes };
    let path = dir.join(MANIFEST_FILE);
    let content = serde_json::to_string_pretty(&manifest).map_err(|source| ManifestError::Serialize {
        path: path.clone(),
        source,
    })?;
    fs::write(&path, content).map_err(|source| ManifestError::Io { path, source })?;

    tracing::info!(quizzes = manifest.quizzes.len(), "manifest updated");
    Ok(manifest)
}
