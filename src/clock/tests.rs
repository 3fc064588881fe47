use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::*;
use crate::output::mock::MockSessionOutput;
use crate::quiz::{Question, QuizDefinition};
use crate::session::{Mode, Settings};

fn definition() -> QuizDefinition {
    let question = |text: &str| {
        Question::new(text, vec!["right".to_owned(), "wrong".to_owned()]).unwrap()
    };
    QuizDefinition::new(vec![question("first"), question("second")]).unwrap()
}

fn session(mode: Mode) -> Session<MockSessionOutput> {
    Session::with_rng(
        &definition(),
        Settings::default(),
        mode,
        MockSessionOutput::new(),
        StdRng::seed_from_u64(9),
    )
}

fn wrong_position(session: &Session<MockSessionOutput>) -> usize {
    let snapshot = session.snapshot();
    let correct = session.current_question().correct_answer();
    snapshot
        .answers
        .iter()
        .position(|a| a != correct)
        .unwrap()
}

fn correct_position(session: &Session<MockSessionOutput>) -> usize {
    let snapshot = session.snapshot();
    let correct = session.current_question().correct_answer();
    snapshot
        .answers
        .iter()
        .position(|a| a == correct)
        .unwrap()
}

const SECOND: Duration = Duration::from_secs(1);

#[test]
fn ticks_once_per_interval() {
    let mut session = session(Mode::Show);
    let mut driver = Driver::new(SECOND);
    driver.advance(&mut session, Duration::from_millis(600));
    assert_eq!(15, session.snapshot().remaining_seconds);
    driver.advance(&mut session, Duration::from_millis(600));
    assert_eq!(14, session.snapshot().remaining_seconds);
    driver.advance(&mut session, Duration::from_secs(3));
    assert_eq!(11, session.snapshot().remaining_seconds);
}

#[test]
fn drives_show_mode_through_reveal() {
    let mut session = session(Mode::Show);
    let mut driver = Driver::new(SECOND);
    for _ in 0..15 {
        driver.advance(&mut session, SECOND);
    }
    assert!(session.is_revealed());
    assert_eq!(5, session.snapshot().remaining_seconds);
    for _ in 0..5 {
        driver.advance(&mut session, SECOND);
    }
    assert!(!session.is_revealed());
    assert_eq!(1, session.tag().index);
    assert_eq!(15, session.snapshot().remaining_seconds);
}

#[test]
fn phase_change_drops_leftover_time() {
    let mut session = session(Mode::Show);
    let mut driver = Driver::new(SECOND);
    driver.advance(&mut session, Duration::from_secs(60));
    assert_eq!(0, session.tag().index);
    assert!(session.is_revealed());
    assert_eq!(5, session.snapshot().remaining_seconds);

    driver.advance(&mut session, Duration::from_secs(60));
    assert_eq!(1, session.tag().index);
    assert_eq!(15, session.snapshot().remaining_seconds);
}

#[test]
fn selecting_answer_restarts_tick_for_reveal() {
    let mut session = session(Mode::Show);
    let mut driver = Driver::new(SECOND);
    driver.advance(&mut session, Duration::from_millis(910));
    session.select_answer(0);
    driver.advance(&mut session, Duration::from_millis(150));
    assert!(session.is_revealed());
    assert_eq!(5, session.snapshot().remaining_seconds);

    driver.advance(&mut session, Duration::from_millis(800));
    assert_eq!(5, session.snapshot().remaining_seconds);
    driver.advance(&mut session, Duration::from_millis(100));
    assert_eq!(4, session.snapshot().remaining_seconds);
}

#[test]
fn interactive_mode_is_not_ticked() {
    let mut session = session(Mode::Interactive);
    let mut driver = Driver::new(SECOND);
    driver.advance(&mut session, Duration::from_secs(60));
    assert_eq!(0, session.tag().index);
    assert_eq!(15, session.snapshot().remaining_seconds);
}

#[test]
fn leaving_show_mode_stops_countdown() {
    let mut session = session(Mode::Show);
    let mut driver = Driver::new(SECOND);
    driver.advance(&mut session, Duration::from_millis(900));
    session.toggle_mode();
    driver.advance(&mut session, Duration::from_millis(10));
    session.toggle_mode();
    driver.advance(&mut session, Duration::from_millis(200));
    assert_eq!(15, session.snapshot().remaining_seconds);
}

#[test]
fn fires_wrong_answer_reveal_after_delay() {
    let mut session = session(Mode::Interactive);
    let mut driver = Driver::new(SECOND);
    let wrong = wrong_position(&session);
    session.select_answer(wrong);

    driver.advance(&mut session, Duration::from_millis(10));
    assert!(!session.is_revealed());
    driver.advance(&mut session, Duration::from_millis(500));
    assert!(!session.is_revealed());
    driver.advance(&mut session, Duration::from_millis(500));
    assert!(session.is_revealed());
}

#[test]
fn rearms_reveal_for_new_question() {
    let mut session = session(Mode::Interactive);
    let mut driver = Driver::new(SECOND);
    let wrong = wrong_position(&session);
    session.select_answer(wrong);
    driver.advance(&mut session, Duration::from_millis(10));
    driver.advance(&mut session, Duration::from_millis(800));

    session.initialize(&definition());
    let wrong = wrong_position(&session);
    session.select_answer(wrong);
    driver.advance(&mut session, Duration::from_millis(300));
    assert!(!session.is_revealed());
    driver.advance(&mut session, Duration::from_millis(800));
    assert!(!session.is_revealed());
    driver.advance(&mut session, Duration::from_millis(300));
    assert!(session.is_revealed());
}

#[test]
fn correct_answer_needs_no_timer() {
    let mut session = session(Mode::Interactive);
    let mut driver = Driver::new(SECOND);
    let correct = correct_position(&session);
    session.select_answer(correct);
    assert!(session.is_revealed());
    driver.advance(&mut session, Duration::from_secs(30));
    assert!(session.is_revealed());
    assert_eq!(0, session.tag().index);
}

#[test]
fn clock_thread_advances_and_stops() {
    let session: SessionHandle<MockSessionOutput> = Arc::new(Mutex::new(session(Mode::Show)));
    let settings = ClockSettings {
        tick_interval: Duration::from_millis(2),
        resolution: Duration::from_millis(1),
    };
    let mut clock = Clock::start(session.clone(), settings);

    let start_time = Instant::now();
    loop {
        if session.lock().tag().index == 1 {
            break;
        }
        if Instant::now().duration_since(start_time) > Duration::from_secs(5) {
            panic!("Timed out waiting for the clock to reach the next question");
        }
        std::thread::sleep(Duration::from_millis(5));
    }

    clock.stop();
    let snapshot = session.lock().snapshot();
    std::thread::sleep(Duration::from_millis(50));
    assert_eq!(snapshot, session.lock().snapshot());
}
