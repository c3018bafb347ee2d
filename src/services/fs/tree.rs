use crate::core::errors::{Error, Result};
use crate::models::entry::{Entry, EntryKind};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// Materialize the tree rooted at `path`.
///
/// The returned entry is a synthetic root: its name is empty, it is never
/// rendered, and it exists only to carry the top-level children. With
/// `include_files` false the tree holds directories only; files are omitted,
/// not replaced by placeholders. One unreadable directory anywhere below
/// `path` fails the whole build and the partial tree is discarded.
pub fn build(path: &Path, include_files: bool) -> Result<Entry> {
    let children = read_children(path, include_files)?;
    Ok(Entry {
        name: String::new(),
        kind: EntryKind::Dir,
        size: 0,
        children,
    })
}

fn read_children(dir: &Path, include_files: bool) -> Result<Vec<Entry>> {
    // Collect names and paths first (cheap), then sort, so sibling order is
    // fixed before any recursion happens.
    let mut names: Vec<(String, PathBuf)> = Vec::new();
    for entry in fs::read_dir(dir).map_err(|source| read_error(dir, source))? {
        let entry = entry.map_err(|source| read_error(dir, source))?;
        names.push((os_str_to_string(entry.file_name()), entry.path()));
    }
    // Byte-wise and case-sensitive: "Z" sorts before "a".
    names.sort_by(|a, b| a.0.cmp(&b.0));

    tracing::debug!(path = %dir.display(), entries = names.len(), "listed directory");

    let mut children = Vec::with_capacity(names.len());
    for (name, path) in names {
        // symlink_metadata: links are classified as files, never followed.
        let md = fs::symlink_metadata(&path).map_err(|source| read_error(&path, source))?;
        if md.file_type().is_dir() {
            let sub = read_children(&path, include_files)?;
            children.push(Entry {
                name,
                kind: EntryKind::Dir,
                size: 0,
                children: sub,
            });
        } else if include_files {
            children.push(Entry {
                name,
                kind: EntryKind::File,
                size: md.len(),
                children: Vec::new(),
            });
        }
    }
    Ok(children)
}

fn read_error(path: &Path, source: std::io::Error) -> Error {
    Error::ReadDir {
        path: path.display().to_string(),
        source,
    }
}

fn os_str_to_string(s: impl AsRef<OsStr>) -> String {
    s.as_ref().to_string_lossy().into_owned()
}
