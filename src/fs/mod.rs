mod real;

#[cfg(test)]
mod mock;

pub use real::RealFileSystem;

#[cfg(test)]
pub use mock::MockFileSystem;

use anyhow::Result;
use std::path::Path;

use crate::models::FsEntry;

pub trait FileSystem {
    fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>>;
}
