use crate::core::errors::Result;
use crate::models::entry::Entry;
use std::io::Write;

/// Write the tree diagram for `root`'s children to `out`.
///
/// The synthetic root gets no line of its own. Children print in stored
/// order, one line each, depth-first: a directory's subtree follows its own
/// line immediately, before the next sibling. The sink sees writes in
/// traversal order; on a write failure whatever already went out stays out.
pub fn render(root: &Entry, out: &mut impl Write) -> Result<()> {
    render_level(&root.children, "", out)
}

fn render_level(children: &[Entry], prefix: &str, out: &mut impl Write) -> Result<()> {
    for (i, child) in children.iter().enumerate() {
        let is_last = i + 1 == children.len();
        let connector = if is_last { "└" } else { "├" };
        writeln!(out, "{prefix}{connector}───{}{}", child.name, size_suffix(child))?;
        if child.is_dir() {
            // The rightmost edge of the diagram carries no trailing bar: a
            // last child's descendants inherit only the indentation unit.
            let deeper = if is_last {
                format!("{prefix}\t")
            } else {
                format!("{prefix}│\t")
            };
            render_level(&child.children, &deeper, out)?;
        }
    }
    Ok(())
}

fn size_suffix(entry: &Entry) -> String {
    if entry.is_dir() {
        return String::new();
    }
    if entry.size == 0 {
        return " (empty)".to_string();
    }
    format!(" ({}b)", entry.size)
}
