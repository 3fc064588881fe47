use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::output::SessionOutput;
use crate::session::{QuestionTag, ScheduledReveal, Session};

#[cfg(test)]
mod tests;

pub type SessionHandle<O> = Arc<Mutex<Session<O>>>;

#[derive(Clone, Debug)]
pub struct ClockSettings {
    pub tick_interval: Duration,
    pub resolution: Duration,
}

impl Default for ClockSettings {
    fn default() -> Self {
        ClockSettings {
            tick_interval: Duration::from_secs(1),
            resolution: Duration::from_millis(50),
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct ArmedReveal {
    reveal: ScheduledReveal,
    time_elapsed: Duration,
}

/// Turns elapsed wall time into session events: one `tick` per tick interval
/// while the countdown runs, and `fire_reveal` once a scheduled reveal is due.
#[derive(Debug)]
pub struct Driver {
    tick_interval: Duration,
    time_accumulated: Duration,
    tag: Option<QuestionTag>,
    revealed: bool,
    armed: Option<ArmedReveal>,
}

impl Driver {
    pub fn new(tick_interval: Duration) -> Self {
        Driver {
            tick_interval: tick_interval.max(Duration::from_millis(1)),
            time_accumulated: Duration::default(),
            tag: None,
            revealed: false,
            armed: None,
        }
    }

    pub fn advance<O: SessionOutput>(&mut self, session: &mut Session<O>, dt: Duration) {
        self.sync_phase(session.tag(), session.is_revealed());

        self.armed = match (session.scheduled_reveal(), self.armed) {
            (Some(reveal), Some(mut armed)) if armed.reveal == reveal => {
                armed.time_elapsed += dt;
                Some(armed)
            }
            (Some(reveal), _) => Some(ArmedReveal {
                reveal,
                time_elapsed: Duration::default(),
            }),
            (None, _) => None,
        };
        if let Some(armed) = self.armed {
            if armed.time_elapsed >= armed.reveal.delay {
                self.armed = None;
                session.fire_reveal(armed.reveal.tag);
            }
        }

        if !session.is_countdown_running() {
            self.time_accumulated = Duration::default();
            return;
        }
        self.time_accumulated += dt;
        while self.time_accumulated >= self.tick_interval && session.is_countdown_running() {
            self.time_accumulated -= self.tick_interval;
            session.tick();
            if self.sync_phase(session.tag(), session.is_revealed()) {
                break;
            }
        }
    }

    /// Drops the countdown remainder and any armed reveal when the question
    /// changed or its answer was revealed, so every countdown starts on a
    /// full tick. Returns whether it did.
    fn sync_phase(&mut self, tag: QuestionTag, revealed: bool) -> bool {
        if self.tag == Some(tag) && self.revealed == revealed {
            return false;
        }
        self.tag = Some(tag);
        self.revealed = revealed;
        self.time_accumulated = Duration::default();
        self.armed = None;
        true
    }
}

/// Background thread feeding a `Driver`. Dropping the clock stops the thread.
pub struct Clock {
    running: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl Clock {
    pub fn start<O>(session: SessionHandle<O>, settings: ClockSettings) -> Clock
    where
        O: SessionOutput + Send + 'static,
    {
        let running = Arc::new(AtomicBool::new(true));
        let thread_running = running.clone();
        let thread = thread::spawn(move || {
            let mut driver = Driver::new(settings.tick_interval);
            let mut last_update = Instant::now();
            while thread_running.load(Ordering::SeqCst) {
                thread::sleep(settings.resolution);
                let now = Instant::now();
                let dt = now.duration_since(last_update);
                last_update = now;
                driver.advance(&mut session.lock(), dt);
            }
            tracing::debug!("Clock stopped");
        });
        Clock {
            running,
            thread: Some(thread),
        }
    }

    pub fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                tracing::error!("Clock thread panicked");
            }
        }
    }
}

impl Drop for Clock {
    fn drop(&mut self) {
        self.stop();
    }
}
