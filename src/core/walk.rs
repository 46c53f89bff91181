use std::path::Path;

use crate::fs::FileSystem;
use crate::models::{EntryKind, TreeNode};

/// Options threaded through the traversal.
#[derive(Debug, Clone, Default)]
pub struct WalkOptions {
    /// Include entries that are dot-prefixed or platform-flagged hidden.
    pub show_hidden: bool,
}

/// Walk a directory depth-first, producing one node per visible entry.
///
/// Hidden entries are dropped before anything else, so sibling positions are
/// relative to the visible listing. Visible siblings are ordered
/// lexicographically by name. Only directories are descended into; a listing
/// failure at any depth yields an empty child list and traversal continues.
pub fn walk_dir<F: FileSystem>(fs: &F, dir: &Path, options: &WalkOptions) -> Vec<TreeNode> {
    let entries = match fs.read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };

    let mut visible: Vec<_> = entries
        .into_iter()
        .filter(|entry| options.show_hidden || !entry.is_hidden())
        .collect();
    visible.sort_by(|a, b| a.name.cmp(&b.name));

    visible
        .into_iter()
        .map(|entry| {
            let children = if entry.kind == EntryKind::Directory {
                walk_dir(fs, &entry.path, options)
            } else {
                Vec::new()
            };

            TreeNode {
                name: entry.name,
                kind: entry.kind,
                children,
            }
        })
        .collect()
}
