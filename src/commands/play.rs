use anyhow::*;
use clap::{Args, ValueEnum};
use parking_lot::Mutex;
use std::io::BufRead;
use std::sync::Arc;
use std::time::Duration;

use crate::clock::{Clock, ClockSettings, SessionHandle};
use crate::output::{JsonOutput, SessionOutput, TerminalOutput};
use crate::quiz::{QuizDefinition, QuizSource};
use crate::session::{Mode, Session, Settings};
use crate::slug::sanitize_slug;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Interactive,
    Show,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Interactive => Mode::Interactive,
            ModeArg::Show => Mode::Show,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

#[derive(Args, Debug)]
pub struct PlayArgs {
    /// Quiz slug or title
    pub name: String,

    /// Progression mode
    #[arg(long, value_enum, default_value = "show")]
    pub mode: ModeArg,

    /// Presentation format
    #[arg(long, value_enum, default_value = "text")]
    pub format: Format,

    /// Seconds to answer each question in show mode
    #[arg(long, default_value = "15")]
    pub question_seconds: u64,

    /// Seconds the correct answer stays up in show mode
    #[arg(long, default_value = "5")]
    pub reveal_seconds: u64,
}

impl PlayArgs {
    fn settings(&self) -> Settings {
        Settings {
            question_duration: Duration::from_secs(self.question_seconds),
            reveal_duration: Duration::from_secs(self.reveal_seconds),
            ..Default::default()
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    Select(usize),
    Advance,
    ToggleMode,
    Quit,
}

pub fn parse_input(line: &str) -> Option<Input> {
    match line.trim().to_lowercase().as_str() {
        "" | "n" | "next" => Some(Input::Advance),
        "m" | "mode" => Some(Input::ToggleMode),
        "q" | "quit" => Some(Input::Quit),
        other => other
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .map(Input::Select),
    }
}

pub fn play<R: BufRead>(source: &dyn QuizSource, args: &PlayArgs, input: R) -> Result<()> {
    let slug = sanitize_slug(&args.name)?;
    let definition = source
        .fetch(&slug)
        .with_context(|| format!("Quiz unavailable: {}", args.name))?;

    tracing::info!("Loaded quiz {} with {} questions", slug, definition.len());

    let title = source
        .index()
        .ok()
        .and_then(|entries| entries.into_iter().find(|e| e.slug == slug))
        .map(|e| e.title)
        .unwrap_or_else(|| slug.clone());

    let output: Box<dyn SessionOutput + Send> = match args.format {
        Format::Text => Box::new(TerminalOutput::new(title)),
        Format::Json => Box::new(JsonOutput),
    };

    run_session(
        &definition,
        args.settings(),
        args.mode.into(),
        output,
        ClockSettings::default(),
        input,
    )
}

/// Runs a session until the player quits or the input ends.
pub fn run_session<O, R>(
    definition: &QuizDefinition,
    settings: Settings,
    mode: Mode,
    output: O,
    clock_settings: ClockSettings,
    input: R,
) -> Result<()>
where
    O: SessionOutput + Send + 'static,
    R: BufRead,
{
    let session: SessionHandle<O> =
        Arc::new(Mutex::new(Session::new(definition, settings, mode, output)));
    tracing::debug!(
        "Session started in {} mode with {} questions",
        mode,
        session.lock().question_count()
    );
    let _clock = Clock::start(session.clone(), clock_settings);

    for line in input.lines() {
        let line = line.context("Could not read input")?;
        match parse_input(&line) {
            Some(Input::Select(position)) => session.lock().select_answer(position),
            Some(Input::Advance) => session.lock().advance(),
            Some(Input::ToggleMode) => session.lock().toggle_mode(),
            Some(Input::Quit) => break,
            None => tracing::debug!("Ignoring input {:?}", line),
        }
    }

    Ok(())
}
