//! Archive repository: removal copies an item aside before deleting it

use crate::domain::{ArchiveRecord, ItemId, Timestamp};
use crate::error::{JnlError, Result};
use crate::infrastructure::codec::archive_from_row;
use crate::infrastructure::items::{ensure_changed, fetch_item};
use crate::infrastructure::pages::fetch_page;
use crate::infrastructure::Store;
use rusqlite::{params, OptionalExtension};
use tracing::debug;

const INSERT_ARCHIVE: &str = "INSERT INTO archive \
     (item_id, item_type, created_at, updated_at, archived_at, text, page_data) \
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const DELETE_ITEM: &str = "DELETE FROM item WHERE item_id = ?1 AND item_type != 'NONE'";
const SELECT_ARCHIVE: &str = "SELECT item_id, item_type, created_at, updated_at, archived_at, text, page_data \
     FROM archive WHERE item_id = ?1 AND item_type != 'NONE' \
     ORDER BY rowid DESC LIMIT 1";

impl Store {
    /// Copy an item and its page into the archive, then delete the live item.
    ///
    /// The live page row is left in place; it is unreachable once its item
    /// is gone because item ids are never reused.
    pub fn archive_and_remove(&mut self, id: ItemId) -> Result<ArchiveRecord> {
        self.write("archive_and_remove", |tx| {
            let item = fetch_item(tx, id)?.ok_or(JnlError::NotFound(id))?;
            let page_data = if item.has_page {
                fetch_page(tx, id)?
            } else {
                None
            };

            let record = ArchiveRecord {
                item_id: item.id,
                item_type: item.item_type,
                created_at: item.created_at,
                updated_at: item.updated_at,
                archived_at: Timestamp::now(),
                text: item.text,
                page_data,
            };

            debug!(sql = INSERT_ARCHIVE, %id);
            tx.execute(
                INSERT_ARCHIVE,
                params![
                    record.item_id,
                    record.item_type,
                    record.created_at,
                    record.updated_at,
                    record.archived_at,
                    record.text,
                    record.page_data,
                ],
            )
            .map_err(|e| JnlError::storage(INSERT_ARCHIVE, e))?;

            debug!(sql = DELETE_ITEM, %id);
            let changed = tx
                .execute(DELETE_ITEM, params![id])
                .map_err(|e| JnlError::storage(DELETE_ITEM, e))?;
            ensure_changed(changed, id)?;

            Ok(record)
        })
    }

    /// Latest archive record written for `id`
    pub fn get_archive_record(&self, id: ItemId) -> Result<Option<ArchiveRecord>> {
        debug!(sql = SELECT_ARCHIVE, %id);
        self.conn()
            .query_row(SELECT_ARCHIVE, params![id], archive_from_row)
            .optional()
            .map_err(|e| JnlError::storage(SELECT_ARCHIVE, e))
    }
}
