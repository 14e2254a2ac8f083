//! List entries use case

use crate::domain::Item;
use crate::error::Result;
use crate::infrastructure::Store;

/// The three sections of a journal listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    pub feed: Vec<Item>,
    pub done: Vec<Item>,
    pub open: Vec<Item>,
}

pub fn list_entries(store: &Store) -> Result<Listing> {
    Ok(Listing {
        feed: store.list_feed()?,
        done: store.list_todos(true)?,
        open: store.list_todos(false)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemType;
    use tempfile::TempDir;

    #[test]
    fn test_sections_partition_items() {
        let temp = TempDir::new().unwrap();
        let mut store = Store::create(&temp.path().join("main.jnl")).unwrap();
        store.create_item(ItemType::Log, "log").unwrap();
        let a = store.create_item(ItemType::Todo, "a").unwrap();
        let b = store.create_item(ItemType::Todo, "b").unwrap();
        store.create_item(ItemType::Quot, "quot").unwrap();
        store.mark_done(b).unwrap();

        let listing = list_entries(&store).unwrap();
        assert_eq!(listing.feed.len(), 2);
        assert_eq!(
            listing.done.iter().map(|i| i.id).collect::<Vec<_>>(),
            vec![b]
        );
        assert_eq!(
            listing.open.iter().map(|i| i.id).collect::<Vec<_>>(),
            vec![a]
        );
    }

    #[test]
    fn test_new_journal_lists_nothing() {
        let temp = TempDir::new().unwrap();
        let store = Store::create(&temp.path().join("main.jnl")).unwrap();
        assert_eq!(list_entries(&store).unwrap(), Listing::default());
    }
}
