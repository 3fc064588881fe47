use serde::Serialize;
use std::fmt;

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Player-paced: no countdown, the player advances after the reveal.
    Interactive,
    /// Timer-driven: questions and reveals follow each other on a countdown.
    Show,
}

impl Mode {
    pub fn toggled(self) -> Mode {
        match self {
            Mode::Interactive => Mode::Show,
            Mode::Show => Mode::Interactive,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Interactive => write!(f, "interactive"),
            Mode::Show => write!(f, "show"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerMark {
    Neutral,
    Correct,
    Wrong,
    Dimmed,
}

/// Read-only view of a session, emitted after every event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub question: String,
    pub answers: Vec<String>,
    /// Only known to the presentation once the answer is revealed.
    pub correct_position: Option<usize>,
    pub selected_position: Option<usize>,
    pub revealed: bool,
    /// A wrong answer was picked and the reveal is about to follow.
    pub awaiting_reveal: bool,
    pub remaining_seconds: u32,
    pub mode: Mode,
    pub question_number: usize,
    pub question_count: usize,
}

impl Snapshot {
    pub fn mark(&self, position: usize) -> AnswerMark {
        let selected = self.selected_position == Some(position);
        if self.revealed {
            if self.correct_position == Some(position) {
                AnswerMark::Correct
            } else if selected {
                AnswerMark::Wrong
            } else {
                AnswerMark::Dimmed
            }
        } else if self.awaiting_reveal && selected {
            AnswerMark::Wrong
        } else {
            AnswerMark::Neutral
        }
    }

    pub fn marks(&self) -> Vec<AnswerMark> {
        (0..self.answers.len()).map(|p| self.mark(p)).collect()
    }
}
