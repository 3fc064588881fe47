use lazy_static::lazy_static;
use regex::Regex;
use std::path::PathBuf;

use crate::quiz::definition::QuizDefinition;
use crate::quiz::error::LoadError;
use crate::quiz::index::{self, QuizEntry};


const INDEX_FILE: &str = "map.json";
const QUIZ_DIRECTORY: &str = "quiz";

lazy_static! {
    static ref SLUG_REGEX: Regex = Regex::new("^[a-z0-9][a-z0-9-]*$").unwrap();
}

/// Read-only access to the bundled quizzes.
pub trait QuizSource {
    fn index(&self) -> Result<Vec<QuizEntry>, LoadError>;
    fn fetch(&self, slug: &str) -> Result<QuizDefinition, LoadError>;
}

/// Serves quizzes from a directory holding `map.json` and `quiz/<slug>.json`.
#[derive(Clone, Debug)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        DirectorySource { root: root.into() }
    }

    fn quiz_path(&self, slug: &str) -> PathBuf {
        let mut path = self.root.join(QUIZ_DIRECTORY);
        path.push(format!("{}.json", slug));
        path
    }
}

impl QuizSource for DirectorySource {
    fn index(&self) -> Result<Vec<QuizEntry>, LoadError> {
        index::open(&self.root.join(INDEX_FILE))
    }

    fn fetch(&self, slug: &str) -> Result<QuizDefinition, LoadError> {
        if !SLUG_REGEX.is_match(slug) {
            return Err(LoadError::NotFound(slug.to_owned()));
        }
        let path = self.quiz_path(slug);
        tracing::debug!("Loading quiz {} from {:?}", slug, path);
        QuizDefinition::open(slug, &path)
    }
}
