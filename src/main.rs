use std::io;
use std::process::ExitCode;

use termcolor::{Ansi, NoColor};

use dirtree::cli;
use dirtree::core::render::write_children;
use dirtree::core::walk::{WalkOptions, walk_dir};
use dirtree::fs::RealFileSystem;

fn main() -> ExitCode {
    let options = match cli::parse(std::env::args_os().skip(1)) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("dirtree: {err}");
            eprint!("{}", cli::USAGE);
            return ExitCode::from(1);
        }
    };

    if let Err(err) = std::fs::symlink_metadata(&options.path) {
        eprintln!("dirtree: {}: {}", options.path.display(), err);
        return ExitCode::from(1);
    }

    let walk_options = WalkOptions {
        show_hidden: options.show_hidden,
    };
    let children = walk_dir(&RealFileSystem, &options.path, &walk_options);

    let stdout = io::stdout().lock();
    let result = if options.use_color {
        write_children(&mut Ansi::new(stdout), &children)
    } else {
        write_children(&mut NoColor::new(stdout), &children)
    };

    if let Err(err) = result {
        eprintln!("dirtree: {err}");
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}
