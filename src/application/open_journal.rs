//! Open journal use case

use crate::error::Result;
use crate::infrastructure::Store;
use std::path::Path;

/// A validated store plus whether this invocation created it
#[derive(Debug)]
pub struct OpenedJournal {
    pub store: Store,
    pub created: bool,
}

/// Open the journal at `path`, creating it first if the file is missing.
pub fn open_journal(path: &Path) -> Result<OpenedJournal> {
    if path.exists() {
        return Ok(OpenedJournal {
            store: Store::open(path)?,
            created: false,
        });
    }

    Ok(OpenedJournal {
        store: Store::create(path)?,
        created: true,
    })
}
