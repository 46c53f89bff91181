use anyhow::Result;
use std::path::Path;

use crate::models::{EntryKind, FsEntry};

use super::FileSystem;

pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(dir)?.filter_map(|e| e.ok()) {
            let file_type = match entry.file_type() {
                Ok(file_type) => file_type,
                Err(_) => continue,
            };
            // file_type comes from the entry itself, so symlinks stay
            // symlinks rather than resolving to their target kind.
            let kind = if file_type.is_symlink() {
                EntryKind::Symlink
            } else if file_type.is_dir() {
                EntryKind::Directory
            } else if file_type.is_file() {
                EntryKind::File
            } else {
                EntryKind::Other
            };

            entries.push(FsEntry {
                path: entry.path(),
                name: entry.file_name().to_string_lossy().into_owned(),
                kind,
                hidden: platform_hidden(&entry),
            });
        }
        Ok(entries)
    }
}

#[cfg(windows)]
fn platform_hidden(entry: &std::fs::DirEntry) -> bool {
    use std::os::windows::fs::MetadataExt;

    const FILE_ATTRIBUTE_HIDDEN: u32 = 2;

    entry
        .metadata()
        .map(|metadata| metadata.file_attributes() & FILE_ATTRIBUTE_HIDDEN != 0)
        .unwrap_or(false)
}

#[cfg(not(windows))]
fn platform_hidden(_entry: &std::fs::DirEntry) -> bool {
    false
}
