mod loader;
mod manifest;

pub use loader::{load_quiz, LoadError};
pub use manifest::{load_manifest, rebuild_manifest, Manifest, ManifestEntry, ManifestError, MANIFEST_FILE};
