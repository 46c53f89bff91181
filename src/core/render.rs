use std::io;

use termcolor::{Color, ColorSpec, WriteColor};

use crate::models::{EntryKind, TreeNode};

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const CONTINUATION: &str = "│   ";
const SPACER: &str = "    ";

/// Style table: directories in blue, everything else in green. `reset` is
/// disabled on the spec so a name is bracketed by exactly one foreground
/// sequence and one reset.
fn name_color(kind: EntryKind) -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_reset(false);
    spec.set_fg(Some(match kind {
        EntryKind::Directory => Color::Blue,
        EntryKind::File | EntryKind::Symlink | EntryKind::Other => Color::Green,
    }));
    spec
}

/// Write one line per node, positioned with box-drawing connectors.
///
/// Color is decided by the writer: wrap the sink in `termcolor::Ansi` for
/// escape sequences or `termcolor::NoColor` for plain text.
pub fn write_children<W: WriteColor>(writer: &mut W, children: &[TreeNode]) -> io::Result<()> {
    write_children_inner(writer, children, &[])
}

fn write_children_inner<W: WriteColor>(
    writer: &mut W,
    children: &[TreeNode],
    ancestor_has_more: &[bool],
) -> io::Result<()> {
    for (index, node) in children.iter().enumerate() {
        let is_last = index + 1 == children.len();

        for &has_more in ancestor_has_more {
            let segment = if has_more { CONTINUATION } else { SPACER };
            writer.write_all(segment.as_bytes())?;
        }

        let connector = if is_last { LAST_BRANCH } else { BRANCH };
        writer.write_all(connector.as_bytes())?;

        writer.set_color(&name_color(node.kind))?;
        writer.write_all(node.name.as_bytes())?;
        writer.reset()?;
        writer.write_all(b"\n")?;

        if !node.children.is_empty() {
            let mut next_ancestor_has_more = ancestor_has_more.to_vec();
            next_ancestor_has_more.push(!is_last);
            write_children_inner(writer, &node.children, &next_ancestor_has_more)?;
        }
    }

    Ok(())
}
