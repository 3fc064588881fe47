use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;

use crate::quiz::error::LoadError;

/// One line of the quiz listing.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct QuizEntry {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
}

pub fn open(source: &Path) -> Result<Vec<QuizEntry>, LoadError> {
    let content = match fs::read_to_string(source) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::warn!("No quiz index at {:?}, listing nothing", source);
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };
    serde_json::from_str(&content).map_err(|e| LoadError::malformed("index", e))
}
