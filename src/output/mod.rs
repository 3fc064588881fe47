use crate::session::Snapshot;

pub mod json;
#[cfg(test)]
pub mod mock;
pub mod terminal;

pub use self::json::JsonOutput;
pub use self::terminal::TerminalOutput;

/// Receives the state of a session after every event it handles.
pub trait SessionOutput {
    fn render(&self, snapshot: &Snapshot);
}

impl<T: SessionOutput + ?Sized> SessionOutput for Box<T> {
    fn render(&self, snapshot: &Snapshot) {
        (**self).render(snapshot)
    }
}
