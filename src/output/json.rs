use std::io::{self, Write};

use crate::output::SessionOutput;
use crate::session::Snapshot;

/// Writes one JSON document per snapshot, one per line.
#[derive(Clone, Debug, Default)]
pub struct JsonOutput;

impl SessionOutput for JsonOutput {
    fn render(&self, snapshot: &Snapshot) {
        let line = match serde_json::to_string(snapshot) {
            Ok(line) => line,
            Err(e) => {
                tracing::error!("Could not serialize snapshot: {}", e);
                return;
            }
        };
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        if let Err(e) = writeln!(handle, "{}", line).and_then(|_| handle.flush()) {
            tracing::error!("Could not write snapshot: {}", e);
        }
    }
}
