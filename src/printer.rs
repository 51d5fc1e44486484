//! Renders a directory as `├── name` lines, four spaces of indent per level.

use std::borrow::Cow;
use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{debug, warn};

use crate::traversal::{is_listing_error, list_entries, walk_top_down};
use crate::types::{Entry, ErrorPolicy, Mode, TreeOptions};

const INDENT: &str = "    ";
const BRANCH: &str = "├── ";

/// Prints the tree rooted at `root` to `out`.
///
/// The root must be an existing directory; otherwise nothing is written.
///
/// # Errors
/// Returns an error if the root is not a directory, if a directory cannot be
/// listed under [`ErrorPolicy::Abort`], or if writing to `out` fails.
pub fn print_tree<W: Write>(root: &Path, opts: &TreeOptions, out: &mut W) -> Result<()> {
    let md = fs::metadata(root).with_context(|| format!("cannot access {}", root.display()))?;
    if !md.is_dir() {
        bail!("{} is not a directory", root.display());
    }
    debug!(root = %root.display(), mode = ?opts.mode, "printing tree");
    match opts.mode {
        Mode::Fixed => print_fixed(root, 0, opts, out),
        Mode::Legacy => print_legacy(root, 0, opts.on_error, out),
    }
}

/// Last path segment, or the whole path when there is none (`.`, `/`).
pub fn display_name(path: &Path) -> Cow<'_, str> {
    match path.file_name() {
        Some(name) => name.to_string_lossy(),
        None => Cow::Owned(path.display().to_string()),
    }
}

fn write_line<W: Write>(out: &mut W, level: usize, name: &str) -> Result<()> {
    writeln!(out, "{}{BRANCH}{name}", INDENT.repeat(level))?;
    Ok(())
}

fn print_fixed<W: Write>(path: &Path, level: usize, opts: &TreeOptions, out: &mut W) -> Result<()> {
    let entries = match list_entries(path, opts.follow_symlinks) {
        Ok(entries) => entries,
        Err(err) if level > 0 && opts.on_error == ErrorPolicy::Skip => {
            write_line(out, level, &display_name(path))?;
            warn!("skipping {}: {err:#}", path.display());
            return Ok(());
        }
        Err(err) => return Err(err),
    };
    write_line(out, level, &display_name(path))?;

    let (dirs, others): (Vec<Entry>, Vec<Entry>) = entries.into_iter().partition(Entry::is_dir);
    for dir in &dirs {
        print_fixed(&dir.path, level + 1, opts, out)?;
    }
    for entry in &others {
        write_line(out, level + 1, &entry.name.to_string_lossy())?;
    }
    Ok(())
}

// Each call walks its whole subtree and then recurses into every directory the
// walk reports, so nested directories are printed once per ancestor. Files are
// printed at this call's level whatever their real depth.
fn print_legacy<W: Write>(
    path: &Path,
    level: usize,
    on_error: ErrorPolicy,
    out: &mut W,
) -> Result<()> {
    write_line(out, level, &display_name(path))?;

    let walked = walk_top_down(path, on_error, &mut |_, dirs, files| {
        for dir in dirs {
            print_legacy(&dir.path, level + 1, on_error, out)?;
        }
        for file in files {
            write_line(out, level, &file.name.to_string_lossy())?;
        }
        Ok(())
    });
    match walked {
        Err(err) if level > 0 && on_error == ErrorPolicy::Skip && is_listing_error(&err) => {
            warn!("skipping {}: {err:#}", path.display());
            Ok(())
        }
        other => other,
    }
}
