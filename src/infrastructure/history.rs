//! Command history: an append-only audit of mutating invocations

use crate::domain::Timestamp;
use crate::error::{JnlError, Result};
use crate::infrastructure::Store;
use rusqlite::params;
use tracing::debug;

const INSERT_COMMAND: &str = "INSERT INTO command_history (created_at, command) VALUES (?1, ?2)";

impl Store {
    pub fn record_command(&mut self, command: &str) -> Result<()> {
        self.write("record_command", |tx| {
            debug!(sql = INSERT_COMMAND, command);
            tx.execute(INSERT_COMMAND, params![Timestamp::now(), command])
                .map_err(|e| JnlError::storage(INSERT_COMMAND, e))?;
            Ok(())
        })
    }
}
