use serde::Deserialize;
use std::convert::TryFrom;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct RawQuestion {
    pub question: String,
    pub answers: Vec<String>,
}

/// A prompt and its answers. The first answer is always the correct one,
/// every other answer is a distractor.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Question {
    text: String,
    answers: Vec<String>,
}

impl Question {
    pub fn new<S: Into<String>>(text: S, answers: Vec<String>) -> Result<Self, String> {
        let text = text.into();
        if answers.is_empty() {
            return Err(format!("question \"{}\" has no answers", text));
        }
        Ok(Question { text, answers })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn correct_answer(&self) -> &str {
        &self.answers[0]
    }
}

impl TryFrom<RawQuestion> for Question {
    type Error = String;

    fn try_from(raw_question: RawQuestion) -> Result<Self, Self::Error> {
        Question::new(raw_question.question, raw_question.answers)
    }
}
