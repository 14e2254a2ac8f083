//! SQLite journal store: open, validate, create

use crate::domain::{ItemId, ItemType, Timestamp};
use crate::error::{JnlError, Result};
use rusqlite::{params, Connection, OpenFlags, Transaction, TransactionBehavior};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const SCHEMA: &str = r#"
CREATE TABLE item (
    item_id    INTEGER PRIMARY KEY AUTOINCREMENT,
    item_type  CHAR(4) CHECK (item_type IN ('NONE','TODO','LOG','NOTE','IDEA','QUOT','B_VS')),
    created_at TEXT NOT NULL,
    updated_at TEXT,
    has_page   BOOLEAN NOT NULL DEFAULT 0,
    is_done    BOOLEAN NOT NULL DEFAULT 0,
    text       TEXT NOT NULL
);

CREATE TABLE page (
    item_id    INTEGER NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT,
    data       TEXT NOT NULL
);
CREATE INDEX page_id ON page(item_id);

CREATE TABLE archive (
    item_id     INTEGER NOT NULL,
    item_type   CHAR(4) CHECK (item_type IN ('NONE','TODO','LOG','NOTE','IDEA','QUOT','B_VS')),
    created_at  TEXT NOT NULL,
    updated_at  TEXT,
    archived_at TEXT NOT NULL,
    text        TEXT NOT NULL,
    page_data   TEXT
);

CREATE TABLE command_history (
    created_at TEXT NOT NULL,
    command    TEXT NOT NULL
);
"#;

const INSERT_SENTINEL_ITEM: &str = "INSERT INTO item \
     (item_id, item_type, created_at, updated_at, has_page, is_done, text) \
     VALUES (?1, ?2, ?3, NULL, 1, 0, 'Journal item table created.')";
const INSERT_SENTINEL_PAGE: &str = "INSERT INTO page (item_id, created_at, updated_at, data) \
     VALUES (?1, ?2, NULL, 'Journal page table created.')";
const INSERT_SENTINEL_ARCHIVE: &str = "INSERT INTO archive \
     (item_id, item_type, created_at, updated_at, archived_at, text, page_data) \
     VALUES (?1, ?2, ?3, NULL, ?3, 'Journal archive table created.', NULL)";

/// The probe every store must answer for it to count as a journal
const VALIDATE: &str = "SELECT item_id, item_type, created_at, updated_at, has_page, is_done, text \
     FROM item WHERE item_type = 'NONE'";

/// Handle on one journal file. Only obtainable through `open` or `create`,
/// so every handle has passed validation.
#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    conn: Connection,
}

impl Store {
    /// Open an existing journal file. Never creates one.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(JnlError::StoreNotFound(path.to_path_buf()));
        }
        if !path.is_file() {
            return Err(JnlError::NotAJournalStore(path.to_path_buf()));
        }

        let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_WRITE)
            .map_err(|e| JnlError::storage(format!("open {}", path.display()), e))?;

        let store = Store {
            path: path.to_path_buf(),
            conn,
        };

        if !store.validate() {
            return Err(JnlError::NotAJournalStore(path.to_path_buf()));
        }

        debug!(path = %path.display(), "opened journal");
        Ok(store)
    }

    /// Create a journal file with its schema and sentinel rows. An existing
    /// file at `path` is reused as-is and only opened.
    pub fn create(path: &Path) -> Result<Self> {
        if path.exists() {
            debug!(path = %path.display(), "journal already exists, nothing created");
            return Self::open(path);
        }

        match Self::provision(path) {
            Ok(store) => {
                info!(path = %path.display(), "created journal");
                Ok(store)
            }
            Err(e) => {
                if let Err(rm) = fs::remove_file(path) {
                    warn!(path = %path.display(), error = %rm, "could not remove failed journal");
                }
                Err(e)
            }
        }
    }

    fn provision(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .map_err(|e| JnlError::storage(format!("create {}", path.display()), e))?;
        let mut store = Store {
            path: path.to_path_buf(),
            conn,
        };

        store.write("initialize", |tx| {
            let now = Timestamp::now();
            tx.execute_batch(SCHEMA)
                .map_err(|e| JnlError::storage("CREATE TABLE", e))?;
            tx.execute(
                INSERT_SENTINEL_ITEM,
                params![ItemId::SENTINEL, ItemType::None, now],
            )
            .map_err(|e| JnlError::storage(INSERT_SENTINEL_ITEM, e))?;
            tx.execute(INSERT_SENTINEL_PAGE, params![ItemId::SENTINEL, now])
                .map_err(|e| JnlError::storage(INSERT_SENTINEL_PAGE, e))?;
            tx.execute(
                INSERT_SENTINEL_ARCHIVE,
                params![ItemId::SENTINEL, ItemType::None, now],
            )
            .map_err(|e| JnlError::storage(INSERT_SENTINEL_ARCHIVE, e))?;
            Ok(())
        })?;

        Ok(store)
    }

    /// True iff the sentinel query runs against this file's item table
    pub fn validate(&self) -> bool {
        let probe = || -> rusqlite::Result<()> {
            let mut stmt = self.conn.prepare(VALIDATE)?;
            let mut rows = stmt.query([])?;
            while rows.next()?.is_some() {}
            Ok(())
        };

        match probe() {
            Ok(()) => true,
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "journal validation failed");
                false
            }
        }
    }

    pub(crate) fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Run `f` inside one immediate transaction. Any error rolls back
    /// everything `f` wrote.
    pub(crate) fn write<T, F>(&mut self, op: &str, f: F) -> Result<T>
    where
        F: FnOnce(&Transaction<'_>) -> Result<T>,
    {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(|e| JnlError::storage(format!("BEGIN ({})", op), e))?;

        let value = f(&tx)?;

        tx.commit()
            .map_err(|e| JnlError::storage(format!("COMMIT ({})", op), e))?;
        info!(op, path = %self.path.display(), "committed");
        Ok(value)
    }
}
