use anyhow::{Result, anyhow};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::models::FsEntry;

use super::FileSystem;

#[derive(Clone, Debug)]
enum Response {
    Ok(Vec<FsEntry>),
    Err(String),
}

#[derive(Default)]
pub struct MockFileSystem {
    inner: RefCell<Inner>,
}

#[derive(Default)]
struct Inner {
    responses: HashMap<PathBuf, Response>,
    calls: Vec<PathBuf>,
}

impl MockFileSystem {
    pub fn set_dir_entries(&self, dir: impl Into<PathBuf>, entries: Vec<FsEntry>) {
        self.inner
            .borrow_mut()
            .responses
            .insert(dir.into(), Response::Ok(entries));
    }

    pub fn set_error(&self, dir: impl Into<PathBuf>, message: impl Into<String>) {
        self.inner
            .borrow_mut()
            .responses
            .insert(dir.into(), Response::Err(message.into()));
    }

    pub fn calls(&self) -> Vec<PathBuf> {
        self.inner.borrow().calls.clone()
    }
}

impl FileSystem for MockFileSystem {
    fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>> {
        let mut inner = self.inner.borrow_mut();
        inner.calls.push(dir.to_path_buf());

        match inner.responses.get(dir) {
            Some(Response::Ok(entries)) => Ok(entries.clone()),
            Some(Response::Err(message)) => Err(anyhow!("{message}")),
            None => Err(anyhow!("no mock response for {}", dir.display())),
        }
    }
}
