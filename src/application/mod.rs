//! Application layer - Use cases and orchestration

pub mod change_entry;
pub mod list_entries;
pub mod open_journal;
pub mod record_command;
pub mod show_entry;

pub use change_entry::EntryService;
pub use list_entries::{list_entries, Listing};
pub use open_journal::{open_journal, OpenedJournal};
pub use record_command::record_command;
pub use show_entry::{show_page, show_todo, EntryView};
