use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    File,
    /// A symlink that is not followed. Symlinks to directories are `Dir` when
    /// the caller asked to follow them.
    Symlink,
}

/// One immediate child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: OsString,
    pub path: PathBuf,
    pub kind: EntryKind,
    /// Whether the path itself is a symlink, regardless of `kind`.
    pub is_symlink: bool,
}

impl Entry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Immediate entries only; every directory printed once.
    #[default]
    Fixed,
    /// Whole-subtree walk plus re-recursion, reproducing the duplicated output.
    Legacy,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    #[default]
    Abort,
    Skip,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TreeOptions {
    pub mode: Mode,
    pub follow_symlinks: bool,
    pub on_error: ErrorPolicy,
}
