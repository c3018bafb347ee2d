use serde::Serialize;

/// One node in the materialized directory tree.
///
/// The tree is built in full before rendering starts; every directory owns
/// its children outright, so the whole structure drops with the root.
#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    pub name: String,
    pub kind: EntryKind,
    /// Byte length; meaningful only for files.
    pub size: u64,
    /// Sorted by name, ascending, case-sensitive. Empty for files.
    pub children: Vec<Entry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EntryKind {
    File,
    Dir,
}

impl Entry {
    pub fn is_dir(&self) -> bool {
        matches!(self.kind, EntryKind::Dir)
    }
}
