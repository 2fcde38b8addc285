//! Initialize .wyag/ in a worktree root

use crate::error::{InitError, IoAction};
use crate::fs::{EntryKind, Filesystem, OsFs};
use crate::repo::Repo;
use crate::types::Config;
use std::path::{Path, PathBuf};

/// Run wyag init [PATH]
pub fn run(root: PathBuf) -> Result<(), String> {
    let repo = init_repo(&OsFs, root).map_err(|e| e.to_string())?;

    println!("Worktree: {}", repo.root().display());
    println!("Wyagdir: {}", repo.wyag_dir().display());

    Ok(())
}

/// The conf document `ensure_conf` ended up with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfState {
    pub config: Config,
    /// True when the default was written; false when an existing file was accepted
    pub created: bool,
}

/// Run wyag init against `root`: metadata dir first, then conf
/// AIDEV-NOTE: No rollback. If the conf step fails, the freshly created .wyag/ stays.
pub fn init_repo(fs: &impl Filesystem, root: impl Into<PathBuf>) -> Result<Repo, InitError> {
    let repo = Repo::new(root);

    ensure_wyag_dir(fs, &repo)?;
    let conf = ensure_conf(fs, &repo)?;

    tracing::info!(
        root = %repo.root().display(),
        created_conf = conf.created,
        "initialized repository"
    );

    Ok(repo)
}

/// Create .wyag/, refusing if anything already occupies the path
pub fn ensure_wyag_dir(fs: &impl Filesystem, repo: &Repo) -> Result<(), InitError> {
    let path = repo.wyag_dir();

    let existing = fs
        .stat(path)
        .map_err(|e| InitError::io(IoAction::Stat, path, e))?;

    if let Some(kind) = existing {
        tracing::debug!(path = %path.display(), ?kind, "metadata path occupied");
        return Err(InitError::AlreadyInitialized {
            path: path.to_path_buf(),
        });
    }

    fs.create_dir_all(path)
        .map_err(|e| InitError::io(IoAction::CreateDir, path, e))?;

    tracing::info!(path = %path.display(), "created metadata directory");
    Ok(())
}

/// Validate an existing conf, or write the default one if none exists
pub fn ensure_conf(fs: &impl Filesystem, repo: &Repo) -> Result<ConfState, InitError> {
    let path = repo.conf_path();

    if let Some(config) = existing_conf(fs, path)? {
        tracing::debug!(path = %path.display(), "accepted existing conf");
        return Ok(ConfState {
            config,
            created: false,
        });
    }

    let config = Config::default();
    let data = config.to_pretty_json().map_err(InitError::EncodeConfig)?;

    fs.write(path, data.as_bytes())
        .map_err(|e| InitError::io(IoAction::Write, path, e))?;

    tracing::info!(path = %path.display(), "wrote default conf");
    Ok(ConfState {
        config,
        created: true,
    })
}

/// Load the conf at `path` if one is there. A directory in its place is a conflict.
pub fn existing_conf(fs: &impl Filesystem, path: &Path) -> Result<Option<Config>, InitError> {
    let existing = fs
        .stat(path)
        .map_err(|e| InitError::io(IoAction::Stat, path, e))?;

    match existing {
        Some(EntryKind::Directory) => Err(InitError::ConflictingEntry {
            path: path.to_path_buf(),
        }),
        Some(EntryKind::File) => load_conf(fs, path).map(Some),
        None => Ok(None),
    }
}

/// Read, parse, and version-check a conf file. Never writes.
pub fn load_conf(fs: &impl Filesystem, path: &Path) -> Result<Config, InitError> {
    let data = fs
        .read(path)
        .map_err(|e| InitError::io(IoAction::Read, path, e))?;

    let config = Config::parse(&data).map_err(|source| InitError::MalformedConfig {
        path: path.to_path_buf(),
        source,
    })?;

    if !config.is_supported() {
        return Err(InitError::UnsupportedFormatVersion {
            path: path.to_path_buf(),
            version: config.core.repositoryformatversion,
        });
    }

    Ok(config)
}
