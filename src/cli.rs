use std::ffi::OsString;
use std::path::PathBuf;

use thiserror::Error;

pub const USAGE: &str = "\
usage: dirtree [-h] [-nc] <path>

options:
  -h    show hidden entries
  -nc   disable colored output
";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("multiple path arguments provided")]
    MultiplePaths,
    #[error("no directory path provided")]
    MissingPath,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Options {
    pub path: PathBuf,
    pub show_hidden: bool,
    pub use_color: bool,
}

/// Parse arguments (program name already stripped). Flags may appear in any
/// order; the single token not starting with `-` is the path. Non-UTF-8
/// tokens are always path candidates, since the flags are plain ASCII.
pub fn parse<I>(args: I) -> Result<Options, UsageError>
where
    I: IntoIterator<Item = OsString>,
{
    let mut show_hidden = false;
    let mut use_color = true;
    let mut path: Option<PathBuf> = None;

    for arg in args {
        if arg == "-h" {
            show_hidden = true;
            continue;
        }
        if arg == "-nc" {
            use_color = false;
            continue;
        }
        if let Some(flag) = arg.to_str() {
            if flag.starts_with('-') {
                return Err(UsageError::UnknownOption(flag.to_owned()));
            }
        }
        if path.is_some() {
            return Err(UsageError::MultiplePaths);
        }
        path = Some(PathBuf::from(arg));
    }

    match path {
        Some(path) => Ok(Options {
            path,
            show_hidden,
            use_color,
        }),
        None => Err(UsageError::MissingPath),
    }
}
