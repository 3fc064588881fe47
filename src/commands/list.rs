use anyhow::*;
use itertools::Itertools;

use crate::quiz::{QuizEntry, QuizSource};

pub fn list(source: &dyn QuizSource) -> Result<String> {
    let entries = source.index().context("Could not read the quiz index")?;
    if entries.is_empty() {
        return Ok("No quizzes available.".to_owned());
    }
    Ok(entries.iter().map(format_entry).join("\n"))
}

fn format_entry(entry: &QuizEntry) -> String {
    match &entry.subtitle {
        Some(subtitle) => format!("{}: {} ({})", entry.slug, entry.title, subtitle),
        None => format!("{}: {}", entry.slug, entry.title),
    }
}
