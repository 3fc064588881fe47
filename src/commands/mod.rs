use directories_next::BaseDirs;
use std::path::PathBuf;

pub mod list;
pub mod play;

const APP_DIRECTORY: &str = "quiz-show";
const FALLBACK_DATA_DIRECTORY: &str = "data";

/// Where quizzes are read from when no directory is given on the command line.
pub fn resolve_data_dir(data_dir: Option<PathBuf>) -> PathBuf {
    if let Some(data_dir) = data_dir {
        return data_dir;
    }
    BaseDirs::new()
        .map(|dirs| dirs.data_dir().join(APP_DIRECTORY))
        .filter(|dir| dir.exists())
        .unwrap_or_else(|| PathBuf::from(FALLBACK_DATA_DIRECTORY))
}
