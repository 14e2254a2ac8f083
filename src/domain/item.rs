//! Journal items and their types

use crate::domain::Timestamp;
use std::fmt;
use std::str::FromStr;

/// Store-assigned item identifier. Never reused, never changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(i64);

impl ItemId {
    /// The id of the sentinel row written at store creation
    pub const SENTINEL: ItemId = ItemId(1);

    pub fn new(id: i64) -> Self {
        ItemId(id)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<i64>() {
            Ok(id) if id > 0 => Ok(ItemId(id)),
            _ => Err(format!("item_id must be a positive integer, got '{}'", s)),
        }
    }
}

/// Kind of a journal item, persisted as its four-letter tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemType {
    /// Reserved for the sentinel row
    None,
    Todo,
    Log,
    Note,
    Idea,
    Quot,
    /// Bible verse
    BVs,
}

impl ItemType {
    pub const ALL: [ItemType; 7] = [
        ItemType::None,
        ItemType::Todo,
        ItemType::Log,
        ItemType::Note,
        ItemType::Idea,
        ItemType::Quot,
        ItemType::BVs,
    ];

    /// Tag stored in the item_type column
    pub fn as_str(self) -> &'static str {
        match self {
            ItemType::None => "NONE",
            ItemType::Todo => "TODO",
            ItemType::Log => "LOG",
            ItemType::Note => "NOTE",
            ItemType::Idea => "IDEA",
            ItemType::Quot => "QUOT",
            ItemType::BVs => "B_VS",
        }
    }

    /// Types a user may create through `create_item`
    pub fn is_creatable(self) -> bool {
        matches!(
            self,
            ItemType::Log | ItemType::Note | ItemType::Idea | ItemType::Quot | ItemType::Todo
        )
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ItemType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Unknown item type: '{}'", s))
    }
}

/// A live journal item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub item_type: ItemType,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
    pub has_page: bool,
    /// Only meaningful for todos
    pub is_done: bool,
    pub text: String,
}

impl Item {
    pub fn is_todo(&self) -> bool {
        self.item_type == ItemType::Todo
    }
}

/// Write-once copy of a removed item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveRecord {
    pub item_id: ItemId,
    pub item_type: ItemType,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
    pub archived_at: Timestamp,
    pub text: String,
    pub page_data: Option<String>,
}
