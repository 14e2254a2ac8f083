//! Domain layer - Journal items and date handling

pub mod item;
pub mod time_ref;
pub mod timestamp;

pub use item::{ArchiveRecord, Item, ItemId, ItemType};
pub use time_ref::DateReference;
pub use timestamp::Timestamp;
