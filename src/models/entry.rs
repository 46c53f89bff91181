use std::path::PathBuf;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntryKind {
    Directory,
    File,
    Symlink,
    Other,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FsEntry {
    pub path: PathBuf,
    pub name: String,
    pub kind: EntryKind,
    /// Hidden attribute reported by the platform, independent of the name.
    pub hidden: bool,
}

impl FsEntry {
    /// An entry is hidden if its name is dot-prefixed or the platform
    /// flagged it hidden.
    pub fn is_hidden(&self) -> bool {
        self.hidden || self.name.starts_with('.')
    }
}
