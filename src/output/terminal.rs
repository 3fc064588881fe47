use itertools::Itertools;
use std::io::{self, Write};

use crate::output::SessionOutput;
use crate::session::{AnswerMark, Mode, Snapshot};

/// Plain-text presenter for a terminal.
#[derive(Clone, Debug)]
pub struct TerminalOutput {
    title: String,
}

impl TerminalOutput {
    pub fn new<S: Into<String>>(title: S) -> Self {
        TerminalOutput {
            title: title.into(),
        }
    }

    pub fn format(&self, snapshot: &Snapshot) -> String {
        let mut lines = Vec::new();

        let timer = match (snapshot.mode, snapshot.revealed) {
            (Mode::Interactive, _) => String::new(),
            (Mode::Show, false) if snapshot.remaining_seconds <= 5 => {
                format!("{}s !", snapshot.remaining_seconds)
            }
            (Mode::Show, _) => format!("{}s", snapshot.remaining_seconds),
        };
        lines.push(format!("== {} [{}] {}", self.title, snapshot.mode, timer).trim_end().to_owned());
        lines.push(String::new());
        lines.push(snapshot.question.clone());
        lines.push(String::new());

        let marks = snapshot.marks();
        for (position, (answer, mark)) in snapshot.answers.iter().zip(marks).enumerate() {
            let marker = match mark {
                AnswerMark::Neutral => "   ",
                AnswerMark::Correct => "[+]",
                AnswerMark::Wrong => "[x]",
                AnswerMark::Dimmed => " - ",
            };
            lines.push(format!("{} {}) {}", marker, position + 1, answer));
        }

        lines.push(String::new());
        lines.push(format!(
            "Question {} of {}",
            snapshot.question_number, snapshot.question_count
        ));
        lines.push(hint(snapshot).to_owned());

        lines.iter().join("\n")
    }
}

fn hint(snapshot: &Snapshot) -> &'static str {
    match (snapshot.mode, snapshot.revealed, snapshot.awaiting_reveal) {
        (_, false, true) => "Wrong answer...",
        (Mode::Interactive, true, _) => "Press Enter for the next question, m to switch mode, q to quit.",
        (Mode::Show, true, _) => "Next question coming up. m to switch mode, q to quit.",
        (_, false, false) => "Type an answer number, m to switch mode, q to quit.",
    }
}

impl SessionOutput for TerminalOutput {
    fn render(&self, snapshot: &Snapshot) {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        let result = writeln!(handle, "\n{}", self.format(snapshot)).and_then(|_| handle.flush());
        if let Err(e) = result {
            tracing::error!("Could not write to terminal: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> Snapshot {
        Snapshot {
            question: "Who wrote The Interpretation of Dreams?".to_owned(),
            answers: vec!["Jung".to_owned(), "Freud".to_owned()],
            correct_position: None,
            selected_position: None,
            revealed: false,
            awaiting_reveal: false,
            remaining_seconds: 12,
            mode: Mode::Show,
            question_number: 3,
            question_count: 10,
        }
    }

    #[test]
    fn shows_counter_question_and_answers() {
        let text = TerminalOutput::new("Psychology").format(&snapshot());
        assert!(text.starts_with("== Psychology [show] 12s"));
        assert!(text.contains("Who wrote The Interpretation of Dreams?"));
        assert!(text.contains("    1) Jung"));
        assert!(text.contains("    2) Freud"));
        assert!(text.contains("Question 3 of 10"));
    }

    #[test]
    fn hides_timer_in_interactive_mode() {
        let mut snapshot = snapshot();
        snapshot.mode = Mode::Interactive;
        let text = TerminalOutput::new("Psychology").format(&snapshot);
        assert!(text.starts_with("== Psychology [interactive]\n"));
    }

    #[test]
    fn marks_revealed_answers() {
        let mut snapshot = snapshot();
        snapshot.revealed = true;
        snapshot.correct_position = Some(1);
        snapshot.selected_position = Some(0);
        let text = TerminalOutput::new("Psychology").format(&snapshot);
        assert!(text.contains("[x] 1) Jung"));
        assert!(text.contains("[+] 2) Freud"));
    }
}
