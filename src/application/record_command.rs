//! Record command use case

use crate::infrastructure::Store;
use tracing::warn;

/// Stamp `command` into the history. A failure is logged and returned as a
/// message for the user; the mutation it follows stays committed.
pub fn record_command(store: &mut Store, command: &str) -> Option<String> {
    match store.record_command(command) {
        Ok(()) => None,
        Err(e) => {
            warn!(error = %e, "could not record command");
            Some(format!(
                "*** Error: could not save command in command_history table: {}",
                e
            ))
        }
    }
}
