use thiserror::Error;

/// Failures surfaced by a `QuizSource` while resolving quiz data.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The slug does not resolve to any quiz.
    #[error("quiz not found: {0}")]
    NotFound(String),

    /// The quiz exists but its content is not a list of questions with answers.
    #[error("quiz {slug} is malformed: {reason}")]
    MalformedData { slug: String, reason: String },

    #[error("could not read quiz data: {0}")]
    Io(#[from] std::io::Error),
}

impl LoadError {
    pub fn malformed<S: Into<String>, R: ToString>(slug: S, reason: R) -> Self {
        LoadError::MalformedData {
            slug: slug.into(),
            reason: reason.to_string(),
        }
    }
}
