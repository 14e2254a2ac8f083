//! Page repository: one free-text page per item

use crate::domain::{ItemId, Timestamp};
use crate::error::{JnlError, Result};
use crate::infrastructure::items::ensure_changed;
use crate::infrastructure::Store;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

const DELETE_PAGE: &str = "DELETE FROM page WHERE item_id = ?1";
const INSERT_PAGE: &str = "INSERT INTO page (item_id, created_at, updated_at, data) \
     VALUES (?1, ?2, NULL, ?3)";
const FLAG_PAGE: &str = "UPDATE item SET has_page = 1, updated_at = ?1 \
     WHERE item_id = ?2 AND item_type != 'NONE'";
const SELECT_PAGE: &str = "SELECT p.data FROM page p \
     JOIN item i ON i.item_id = p.item_id \
     WHERE p.item_id = ?1 AND i.item_type != 'NONE' AND i.has_page = 1 \
     ORDER BY p.rowid DESC LIMIT 1";

impl Store {
    /// Attach `text` as the item's page, replacing any earlier one
    pub fn attach_page(&mut self, id: ItemId, text: &str) -> Result<()> {
        self.write("attach_page", |tx| {
            let now = Timestamp::now();

            debug!(sql = DELETE_PAGE, %id);
            tx.execute(DELETE_PAGE, params![id])
                .map_err(|e| JnlError::storage(DELETE_PAGE, e))?;

            debug!(sql = INSERT_PAGE, %id, bytes = text.len());
            tx.execute(INSERT_PAGE, params![id, now, text])
                .map_err(|e| JnlError::storage(INSERT_PAGE, e))?;

            // A missing item surfaces here and rolls back the two writes above
            debug!(sql = FLAG_PAGE, %id);
            let changed = tx
                .execute(FLAG_PAGE, params![now, id])
                .map_err(|e| JnlError::storage(FLAG_PAGE, e))?;
            ensure_changed(changed, id)
        })
    }

    /// The item's current page text, `None` when no page is attached
    pub fn get_page(&self, id: ItemId) -> Result<Option<String>> {
        fetch_page(self.conn(), id)
    }
}

pub(crate) fn fetch_page(conn: &Connection, id: ItemId) -> Result<Option<String>> {
    debug!(sql = SELECT_PAGE, %id);
    conn.query_row(SELECT_PAGE, params![id], |row| row.get(0))
        .optional()
        .map_err(|e| JnlError::storage(SELECT_PAGE, e))
}
