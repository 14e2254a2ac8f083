//! Item repository

use crate::domain::{Item, ItemId, ItemType, Timestamp};
use crate::error::{JnlError, Result};
use crate::infrastructure::codec::item_from_row;
use crate::infrastructure::Store;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

const INSERT_ITEM: &str = "INSERT INTO item \
     (item_type, created_at, updated_at, has_page, is_done, text) \
     VALUES (?1, ?2, NULL, 0, 0, ?3)";
const UPDATE_TEXT: &str = "UPDATE item SET text = ?1, updated_at = ?2 \
     WHERE item_id = ?3 AND item_type != 'NONE'";
const UPDATE_CREATED_AT: &str = "UPDATE item SET created_at = ?1 \
     WHERE item_id = ?2 AND item_type != 'NONE'";
const UPDATE_DONE: &str = "UPDATE item SET is_done = 1, updated_at = ?1 \
     WHERE item_id = ?2 AND item_type != 'NONE'";
const SELECT_ITEM: &str = "SELECT item_id, item_type, created_at, updated_at, has_page, is_done, text \
     FROM item WHERE item_id = ?1 AND item_type != 'NONE'";
const SELECT_FEED: &str = "SELECT item_id, item_type, created_at, updated_at, has_page, is_done, text \
     FROM item WHERE item_type NOT IN ('NONE', 'TODO') \
     ORDER BY created_at, item_id";
const SELECT_TODOS: &str = "SELECT item_id, item_type, created_at, updated_at, has_page, is_done, text \
     FROM item WHERE item_type = 'TODO' AND is_done = ?1 \
     ORDER BY item_id";

impl Store {
    /// Add a log, note, idea, quote or todo
    pub fn create_item(&mut self, item_type: ItemType, text: &str) -> Result<ItemId> {
        if !item_type.is_creatable() {
            return Err(JnlError::InvalidArgument(format!(
                "items of type {} cannot be created",
                item_type
            )));
        }

        self.write("create_item", |tx| {
            debug!(sql = INSERT_ITEM, %item_type);
            tx.execute(INSERT_ITEM, params![item_type, Timestamp::now(), text])
                .map_err(|e| JnlError::storage(INSERT_ITEM, e))?;
            Ok(ItemId::new(tx.last_insert_rowid()))
        })
    }

    /// Replace an item's text
    pub fn edit_item(&mut self, id: ItemId, text: &str) -> Result<()> {
        self.write("edit_item", |tx| {
            debug!(sql = UPDATE_TEXT, %id);
            let changed = tx
                .execute(UPDATE_TEXT, params![text, Timestamp::now(), id])
                .map_err(|e| JnlError::storage(UPDATE_TEXT, e))?;
            ensure_changed(changed, id)
        })
    }

    /// Move an item's creation time. Leaves `updated_at` alone.
    pub fn set_created_at(&mut self, id: ItemId, created_at: Timestamp) -> Result<()> {
        self.write("set_created_at", |tx| {
            debug!(sql = UPDATE_CREATED_AT, %id, %created_at);
            let changed = tx
                .execute(UPDATE_CREATED_AT, params![created_at, id])
                .map_err(|e| JnlError::storage(UPDATE_CREATED_AT, e))?;
            ensure_changed(changed, id)
        })
    }

    /// Flag an item as done. The item type is not checked.
    pub fn mark_done(&mut self, id: ItemId) -> Result<()> {
        self.write("mark_done", |tx| {
            debug!(sql = UPDATE_DONE, %id);
            let changed = tx
                .execute(UPDATE_DONE, params![Timestamp::now(), id])
                .map_err(|e| JnlError::storage(UPDATE_DONE, e))?;
            ensure_changed(changed, id)
        })
    }

    pub fn get_item(&self, id: ItemId) -> Result<Item> {
        fetch_item(self.conn(), id)?.ok_or(JnlError::NotFound(id))
    }

    /// Logs, notes, ideas, quotes and verses, oldest first
    pub fn list_feed(&self) -> Result<Vec<Item>> {
        debug!(sql = SELECT_FEED);
        query_items(self.conn(), SELECT_FEED, params![])
    }

    /// Todos with the given done state, in id order
    pub fn list_todos(&self, done: bool) -> Result<Vec<Item>> {
        debug!(sql = SELECT_TODOS, done);
        query_items(self.conn(), SELECT_TODOS, params![done])
    }
}

/// Fetch a live, non-sentinel item
pub(crate) fn fetch_item(conn: &Connection, id: ItemId) -> Result<Option<Item>> {
    debug!(sql = SELECT_ITEM, %id);
    conn.query_row(SELECT_ITEM, params![id], item_from_row)
        .optional()
        .map_err(|e| JnlError::storage(SELECT_ITEM, e))
}

fn query_items(conn: &Connection, sql: &str, args: &[&dyn rusqlite::ToSql]) -> Result<Vec<Item>> {
    let mut stmt = conn.prepare(sql).map_err(|e| JnlError::storage(sql, e))?;
    let rows = stmt
        .query_map(args, item_from_row)
        .map_err(|e| JnlError::storage(sql, e))?;
    rows.collect::<rusqlite::Result<Vec<_>>>()
        .map_err(|e| JnlError::storage(sql, e))
}

pub(crate) fn ensure_changed(changed: usize, id: ItemId) -> Result<()> {
    if changed == 0 {
        Err(JnlError::NotFound(id))
    } else {
        Ok(())
    }
}
