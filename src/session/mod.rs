use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::output::SessionOutput;
use crate::quiz::{Question, QuizDefinition};

pub mod countdown;
pub mod settings;
pub mod shuffle;
pub mod snapshot;
pub mod timer;

pub use self::countdown::Countdown;
pub use self::settings::Settings;
pub use self::shuffle::ShuffledAnswers;
pub use self::snapshot::{AnswerMark, Mode, Snapshot};
pub use self::timer::{QuestionTag, ScheduledReveal};


#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// The question is up and no answer has been picked yet.
    Answering(Countdown),
    /// A wrong answer was picked in interactive mode. The answering countdown
    /// is kept for display while the reveal waits on its one-shot timer.
    PendingReveal {
        reveal: ScheduledReveal,
        countdown: Countdown,
    },
    /// The correct answer is shown.
    Revealing(Countdown),
}

/// One run through a shuffled quiz. The quiz never ends: after the last
/// question it starts over from the first one.
pub struct Session<O: SessionOutput> {
    questions: Vec<Question>,
    settings: Settings,
    mode: Mode,
    tag: QuestionTag,
    answers: ShuffledAnswers,
    selected_position: Option<usize>,
    phase: Phase,
    rng: StdRng,
    output: O,
}

impl<O: SessionOutput> Session<O> {
    pub fn new(definition: &QuizDefinition, settings: Settings, mode: Mode, output: O) -> Self {
        Session::with_rng(definition, settings, mode, output, StdRng::from_entropy())
    }

    pub fn with_rng(
        definition: &QuizDefinition,
        settings: Settings,
        mode: Mode,
        output: O,
        rng: StdRng,
    ) -> Self {
        let phase = Phase::Answering(Countdown::new(settings.question_duration));
        let mut session = Session {
            questions: Vec::new(),
            settings,
            mode,
            tag: QuestionTag::first(),
            answers: ShuffledAnswers::default(),
            selected_position: None,
            phase,
            rng,
            output,
        };
        session.initialize(definition);
        session
    }

    /// Reshuffles the questions and starts over from the first one.
    pub fn initialize(&mut self, definition: &QuizDefinition) {
        let mut questions = definition.get_questions().to_vec();
        shuffle::shuffle(&mut questions, &mut self.rng);
        self.questions = questions;
        self.tag = QuestionTag {
            index: 0,
            serial: self.tag.serial + 1,
        };
        self.begin_question();
        self.emit();
    }

    pub fn select_answer(&mut self, position: usize) {
        let countdown = match &self.phase {
            Phase::Answering(countdown) => countdown.clone(),
            _ => return,
        };
        if self.selected_position.is_some() || position >= self.answers.len() {
            return;
        }

        self.selected_position = Some(position);
        match self.mode {
            Mode::Show => self.begin_reveal(),
            Mode::Interactive => {
                if position == self.answers.correct_position() {
                    self.begin_reveal();
                } else {
                    let reveal = ScheduledReveal {
                        tag: self.tag,
                        delay: self.settings.wrong_answer_delay,
                    };
                    self.set_phase(Phase::PendingReveal { reveal, countdown });
                }
            }
        }
        self.emit();
    }

    pub fn tick(&mut self) {
        match self.mode {
            Mode::Interactive => (),
            Mode::Show => {
                match &mut self.phase {
                    Phase::Answering(countdown) => {
                        countdown.tick();
                        if countdown.is_over() {
                            self.begin_reveal();
                        }
                    }
                    Phase::Revealing(countdown) => {
                        countdown.tick();
                        if countdown.is_over() {
                            self.next_question();
                        }
                    }
                    Phase::PendingReveal { .. } => return,
                }
                self.emit();
            }
        }
    }

    pub fn advance(&mut self) {
        match self.mode {
            Mode::Show => (),
            Mode::Interactive => {
                if let Phase::Revealing(_) = self.phase {
                    self.next_question();
                    self.emit();
                }
            }
        }
    }

    /// Resolves the wrong-answer delay. Timers created for an earlier
    /// question visit are ignored.
    pub fn fire_reveal(&mut self, tag: QuestionTag) {
        let is_current = self.scheduled_reveal().map_or(false, |r| r.tag == tag);
        if is_current {
            self.begin_reveal();
            self.emit();
        } else {
            tracing::debug!("Ignoring stale reveal timer for {:?}", tag);
        }
    }

    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode == mode {
            return;
        }
        tracing::debug!("Switching to {} mode", mode);
        self.mode = mode;
        self.emit();
    }

    pub fn toggle_mode(&mut self) {
        self.set_mode(self.mode.toggled());
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn tag(&self) -> QuestionTag {
        self.tag
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.tag.index]
    }

    pub fn scheduled_reveal(&self) -> Option<ScheduledReveal> {
        match &self.phase {
            Phase::PendingReveal { reveal, .. } => Some(*reveal),
            _ => None,
        }
    }

    /// Whether `tick` currently drives the session.
    pub fn is_countdown_running(&self) -> bool {
        match (self.mode, &self.phase) {
            (Mode::Show, Phase::Answering(_)) | (Mode::Show, Phase::Revealing(_)) => true,
            _ => false,
        }
    }

    pub fn is_revealed(&self) -> bool {
        match self.phase {
            Phase::Revealing(_) => true,
            _ => false,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        let revealed = self.is_revealed();
        let remaining_seconds = match &self.phase {
            Phase::Answering(countdown)
            | Phase::Revealing(countdown)
            | Phase::PendingReveal { countdown, .. } => countdown.remaining_seconds(),
        };
        Snapshot {
            question: self.current_question().text().to_owned(),
            answers: self.answers.texts(),
            correct_position: if revealed {
                Some(self.answers.correct_position())
            } else {
                None
            },
            selected_position: self.selected_position,
            revealed,
            awaiting_reveal: self.scheduled_reveal().is_some(),
            remaining_seconds,
            mode: self.mode,
            question_number: self.tag.index + 1,
            question_count: self.questions.len(),
        }
    }

    fn begin_question(&mut self) {
        self.answers = ShuffledAnswers::new(&self.questions[self.tag.index], &mut self.rng);
        self.selected_position = None;
        let countdown = Countdown::new(self.settings.question_duration);
        self.set_phase(Phase::Answering(countdown));
    }

    fn begin_reveal(&mut self) {
        let countdown = Countdown::new(self.settings.reveal_duration);
        self.set_phase(Phase::Revealing(countdown));
    }

    fn next_question(&mut self) {
        self.tag = self.tag.next(self.questions.len());
        self.begin_question();
    }

    fn set_phase(&mut self, phase: Phase) {
        tracing::debug!("Entering phase {:?} for question {:?}", phase, self.tag);
        self.phase = phase;
    }

    fn emit(&self) {
        self.output.render(&self.snapshot());
    }
}
