//! Show page / show todo use cases

use crate::domain::{Item, ItemId};
use crate::error::{JnlError, Result};
use crate::infrastructure::Store;

/// An item together with its page text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryView {
    pub item: Item,
    pub page: Option<String>,
}

pub fn show_page(store: &Store, id: ItemId) -> Result<EntryView> {
    let item = store.get_item(id)?;
    let page = if item.has_page {
        store.get_page(id)?
    } else {
        None
    };
    Ok(EntryView { item, page })
}

/// Like `show_page`, but only for todo items
pub fn show_todo(store: &Store, id: ItemId) -> Result<EntryView> {
    let view = show_page(store, id)?;
    if !view.item.is_todo() {
        return Err(JnlError::NotFound(id));
    }
    Ok(view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemType;
    use tempfile::TempDir;

    #[test]
    fn test_show_page_with_and_without_page() {
        let temp = TempDir::new().unwrap();
        let mut store = Store::create(&temp.path().join("main.jnl")).unwrap();
        let bare = store.create_item(ItemType::Log, "bare").unwrap();
        let paged = store.create_item(ItemType::Log, "paged").unwrap();
        store.attach_page(paged, "detail").unwrap();

        assert_eq!(show_page(&store, bare).unwrap().page, None);
        let view = show_page(&store, paged).unwrap();
        assert_eq!(view.item.text, "paged");
        assert_eq!(view.page.as_deref(), Some("detail"));
    }

    #[test]
    fn test_show_todo_rejects_other_types() {
        let temp = TempDir::new().unwrap();
        let mut store = Store::create(&temp.path().join("main.jnl")).unwrap();
        let log = store.create_item(ItemType::Log, "log").unwrap();
        let todo = store.create_item(ItemType::Todo, "todo").unwrap();

        assert!(matches!(
            show_todo(&store, log),
            Err(JnlError::NotFound(_))
        ));
        assert!(show_todo(&store, todo).unwrap().item.is_todo());
    }

    #[test]
    fn test_show_page_includes_done_todo() {
        let temp = TempDir::new().unwrap();
        let mut store = Store::create(&temp.path().join("main.jnl")).unwrap();
        let todo = store.create_item(ItemType::Todo, "groceries").unwrap();
        store.attach_page(todo, "[X] milk").unwrap();
        store.mark_done(todo).unwrap();

        let view = show_page(&store, todo).unwrap();
        assert!(view.item.is_done);
        assert_eq!(view.page.as_deref(), Some("[X] milk"));
    }

    #[test]
    fn test_show_missing_item() {
        let temp = TempDir::new().unwrap();
        let store = Store::create(&temp.path().join("main.jnl")).unwrap();
        assert!(matches!(
            show_page(&store, ItemId::new(40)),
            Err(JnlError::NotFound(_))
        ));
    }
}
