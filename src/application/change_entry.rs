//! Mutating use cases. Each returns the confirmation shown to the user.

use crate::domain::{DateReference, ItemId, ItemType, Timestamp};
use crate::error::Result;
use crate::infrastructure::Store;
use chrono::Local;
use std::fs;
use std::path::Path;

/// Service for changing journal items
pub struct EntryService<'a> {
    store: &'a mut Store,
}

impl<'a> EntryService<'a> {
    pub fn new(store: &'a mut Store) -> Self {
        EntryService { store }
    }

    pub fn add(&mut self, item_type: ItemType, text: &str) -> Result<String> {
        self.store.create_item(item_type, text)?;
        Ok(format!("{} added...", item_type))
    }

    pub fn edit(&mut self, id: ItemId, text: &str) -> Result<String> {
        self.store.edit_item(id, text)?;
        Ok(format!("Edited item from item_id {} with '{}'...", id, text))
    }

    /// Move the creation date, keeping the current time of day
    pub fn redate(&mut self, id: ItemId, date: &DateReference) -> Result<String> {
        let created_at = Timestamp::on_date_now(date.resolve(Local::now().date_naive()));
        self.store.set_created_at(id, created_at)?;
        Ok(format!("Changed create date of item {} to {}...", id, created_at))
    }

    /// Read `file` fully and attach it as the item's page
    pub fn attach_page(&mut self, id: ItemId, file: &Path) -> Result<String> {
        let text = fs::read_to_string(file)?;
        self.store.attach_page(id, &text)?;
        Ok(format!(
            "Added pg from {} to item_id {}...",
            file.display(),
            id
        ))
    }

    pub fn done(&mut self, id: ItemId) -> Result<String> {
        self.store.mark_done(id)?;
        Ok(format!("Set item {} to done...", id))
    }

    pub fn remove(&mut self, id: ItemId) -> Result<String> {
        let record = self.store.archive_and_remove(id)?;
        Ok(format!(
            "Moved item {} to archive at {}...",
            id, record.archived_at
        ))
    }
}
