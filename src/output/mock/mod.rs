use parking_lot::RwLock;
use std::sync::Arc;

use crate::output::SessionOutput;
use crate::session::Snapshot;

#[derive(Clone, Default)]
pub struct MockSessionOutput {
    snapshots: Arc<RwLock<Vec<Snapshot>>>,
}

impl MockSessionOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flush(&self) -> Vec<Snapshot> {
        std::mem::replace(&mut *self.snapshots.write(), Vec::new())
    }

    pub fn last(&self) -> Option<Snapshot> {
        self.snapshots.read().last().cloned()
    }

    pub fn count(&self) -> usize {
        self.snapshots.read().len()
    }
}

impl SessionOutput for MockSessionOutput {
    fn render(&self, snapshot: &Snapshot) {
        self.snapshots.write().push(snapshot.clone());
    }
}
