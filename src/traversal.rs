use std::path::Path;

use anyhow::{Context, Result};
use ignore::WalkBuilder;
use tracing::{debug, trace};

use crate::types::{Entry, EntryKind, ErrorPolicy};

/// Lists the immediate entries of `dir`, sorted by file name.
///
/// Nothing is filtered: hidden files are kept and ignore files are not read.
/// With `follow_symlinks`, a symlink is classified by its target; otherwise it
/// is reported as [`EntryKind::Symlink`].
///
/// # Errors
/// Returns an error if `dir` cannot be read or an entry cannot be inspected.
pub fn list_entries(dir: &Path, follow_symlinks: bool) -> Result<Vec<Entry>> {
    let mut builder = WalkBuilder::new(dir);
    builder.standard_filters(false);
    builder.max_depth(Some(1));
    // A symlinked root is still listed; children are never stat'ed through
    // their links, so dangling links do not fail the listing.
    builder.follow_links(false);
    builder.sort_by_file_name(|a, b| a.cmp(b));

    let mut out = Vec::new();
    for dent in builder.build() {
        let dent = dent.context("listing directory")?;
        if dent.depth() == 0 {
            continue;
        }
        let path = dent.path();
        let is_symlink = dent.path_is_symlink();
        let kind = if is_symlink {
            if !follow_symlinks {
                EntryKind::Symlink
            } else if path.is_dir() {
                EntryKind::Dir
            } else {
                EntryKind::File
            }
        } else if dent.file_type().is_some_and(|t| t.is_dir()) {
            EntryKind::Dir
        } else {
            EntryKind::File
        };
        out.push(Entry {
            name: dent.file_name().to_os_string(),
            path: path.to_path_buf(),
            kind,
            is_symlink,
        });
    }
    trace!(dir = %dir.display(), entries = out.len(), "listed directory");
    Ok(out)
}

/// Callback for [`walk_top_down`]: the visited directory, its subdirectories,
/// and its remaining entries.
pub type VisitFn<'a> = dyn FnMut(&Path, &[Entry], &[Entry]) -> Result<()> + 'a;

/// Walks the whole subtree under `top`, visiting parents before children.
///
/// Symlinked directories are reported among the subdirectories but are not
/// descended into. Failing to list `top` is always an error; failures below it
/// follow `on_error`. Skipped directories are only logged at debug level; the
/// caller that owns the directory reports it.
///
/// # Errors
/// Returns the first listing error (under [`ErrorPolicy::Abort`]) or any error
/// returned by `visit`.
pub fn walk_top_down(top: &Path, on_error: ErrorPolicy, visit: &mut VisitFn<'_>) -> Result<()> {
    let entries = list_entries(top, true)?;
    let (dirs, files): (Vec<Entry>, Vec<Entry>) = entries.into_iter().partition(Entry::is_dir);
    visit(top, &dirs, &files)?;

    for dir in dirs.iter().filter(|d| !d.is_symlink) {
        match walk_top_down(&dir.path, on_error, visit) {
            Ok(()) => {}
            Err(err) if on_error == ErrorPolicy::Skip && is_listing_error(&err) => {
                debug!("walk skipping {}: {err:#}", dir.path.display());
            }
            Err(err) => return Err(err),
        }
    }
    Ok(())
}

/// True when the error came from listing a directory rather than from the
/// caller's sink.
pub(crate) fn is_listing_error(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| cause.is::<ignore::Error>())
}
