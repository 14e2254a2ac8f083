//! Column conversions between domain types and SQLite values

use crate::domain::{ArchiveRecord, Item, ItemId, ItemType, Timestamp};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rusqlite::Row;

impl ToSql for ItemId {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.get()))
    }
}

impl FromSql for ItemId {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        i64::column_result(value).map(ItemId::new)
    }
}

impl ToSql for ItemType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for ItemType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|e: String| FromSqlError::Other(e.into()))
    }
}

impl ToSql for Timestamp {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.to_string()))
    }
}

impl FromSql for Timestamp {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|e: chrono::ParseError| FromSqlError::Other(Box::new(e)))
    }
}

/// Expects `item_id, item_type, created_at, updated_at, has_page, is_done, text`
pub(crate) fn item_from_row(row: &Row<'_>) -> rusqlite::Result<Item> {
    Ok(Item {
        id: row.get(0)?,
        item_type: row.get(1)?,
        created_at: row.get(2)?,
        updated_at: row.get(3)?,
        has_page: row.get(4)?,
        is_done: row.get(5)?,
        text: row.get(6)?,
    })
}

/// Expects `item_id, item_type, created_at, updated_at, archived_at, text, page_data`
pub(crate) fn archive_from_row(row: &Row<'_>) -> rusqlite::Result<ArchiveRecord> {
    Ok(ArchiveRecord {
        item_id: row.get(0)?,
        item_type: row.get(1)?,
        created_at: row.get(2)?,
        updated_at: row.get(3)?,
        archived_at: row.get(4)?,
        text: row.get(5)?,
        page_data: row.get(6)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_timestamp_column_text() {
        let conn = Connection::open_in_memory().unwrap();
        let ts: Timestamp = "2020-01-01 00:00:00".parse().unwrap();

        let stored: String = conn.query_row("SELECT ?1", rusqlite::params![ts], |r| r.get(0)).unwrap();
        assert_eq!(stored, "2020-01-01 00:00:00");
    }

    #[test]
    fn test_malformed_columns_are_errors() {
        let conn = Connection::open_in_memory().unwrap();

        let bad_type: rusqlite::Result<ItemType> =
            conn.query_row("SELECT 'WHAT'", [], |r| r.get(0));
        assert!(bad_type.is_err());

        let bad_time: rusqlite::Result<Timestamp> =
            conn.query_row("SELECT '2020-01-01'", [], |r| r.get(0));
        assert!(bad_time.is_err());
    }

    #[test]
    fn test_null_updated_at() {
        let conn = Connection::open_in_memory().unwrap();
        let updated: Option<Timestamp> = conn.query_row("SELECT NULL", [], |r| r.get(0)).unwrap();
        assert_eq!(updated, None);
    }
}
