//! Repository descriptor - path derivation for .wyag/

use std::path::{Path, PathBuf};

const WYAG_DIR: &str = ".wyag";
const CONF_FILE: &str = "conf";

/// One initialization target: the worktree root plus the paths derived from it
///
/// Paths are computed once in `new` and never change. The descriptor owns
/// no handles, so it is safe to clone and print freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repo {
    root: PathBuf,
    wyag_dir: PathBuf,
    conf_path: PathBuf,
}

impl Repo {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let wyag_dir = root.join(WYAG_DIR);
        let conf_path = wyag_dir.join(CONF_FILE);

        Self {
            root,
            wyag_dir,
            conf_path,
        }
    }

    /// Worktree root as supplied by the caller
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Metadata directory (`<root>/.wyag`)
    pub fn wyag_dir(&self) -> &Path {
        &self.wyag_dir
    }

    /// Configuration document (`<root>/.wyag/conf`)
    pub fn conf_path(&self) -> &Path {
        &self.conf_path
    }
}
