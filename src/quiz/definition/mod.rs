use std::convert::TryFrom;
use std::fs;
use std::io;
use std::path::Path;

use crate::quiz::error::LoadError;

pub mod question;

pub use question::{Question, RawQuestion};


/// The ordered questions of one quiz, as authored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizDefinition {
    questions: Vec<Question>,
}

impl QuizDefinition {
    pub fn new(questions: Vec<Question>) -> Option<QuizDefinition> {
        if questions.is_empty() {
            None
        } else {
            Some(QuizDefinition { questions })
        }
    }

    pub fn open(slug: &str, source: &Path) -> Result<QuizDefinition, LoadError> {
        let content = match fs::read(source) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(LoadError::NotFound(slug.to_owned()))
            }
            Err(e) => return Err(e.into()),
        };
        QuizDefinition::parse(slug, content)
    }

    pub fn parse<C: AsRef<[u8]>>(slug: &str, content: C) -> Result<QuizDefinition, LoadError> {
        let raw_questions: Vec<RawQuestion> = serde_json::from_slice(content.as_ref())
            .map_err(|e| LoadError::malformed(slug, e))?;

        let mut questions = Vec::with_capacity(raw_questions.len());
        for raw_question in raw_questions {
            let question =
                Question::try_from(raw_question).map_err(|e| LoadError::malformed(slug, e))?;
            questions.push(question);
        }

        QuizDefinition::new(questions)
            .ok_or_else(|| LoadError::malformed(slug, "quiz contains no questions"))
    }

    pub fn get_questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }
}
