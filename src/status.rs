//! Read-only view of an initialized repository

use crate::error::{InitError, IoAction};
use crate::fs::{EntryKind, Filesystem, OsFs};
use crate::init::existing_conf;
use crate::repo::Repo;
use crate::types::Config;
use std::io;
use std::path::PathBuf;

/// Run wyag status [PATH]
pub fn run(root: PathBuf) -> Result<(), String> {
    let repo = Repo::new(root);
    let config = inspect(&OsFs, &repo)?;

    println!("Worktree: {}", repo.root().display());
    println!("Wyagdir: {}", repo.wyag_dir().display());
    println!(
        "repositoryformatversion: {}",
        config.core.repositoryformatversion
    );
    println!("filemode: {}", config.core.filemode);
    println!("bare: {}", config.core.bare);

    Ok(())
}

/// Validate the conf of an existing repository without touching it
fn inspect(fs: &impl Filesystem, repo: &Repo) -> Result<Config, String> {
    match fs.stat(repo.wyag_dir()) {
        Ok(Some(EntryKind::Directory)) => {}
        Ok(_) => return Err("Not initialized. Run 'wyag init' first.".to_string()),
        Err(e) => return Err(InitError::io(IoAction::Stat, repo.wyag_dir(), e).to_string()),
    }

    let path = repo.conf_path();
    match existing_conf(fs, path) {
        Ok(Some(config)) => Ok(config),
        Ok(None) => Err(InitError::io(
            IoAction::Read,
            path,
            io::Error::from(io::ErrorKind::NotFound),
        )
        .to_string()),
        Err(e) => Err(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::mem::MemFs;
    use crate::init::init_repo;

    #[test]
    fn test_inspect_fresh_repo() {
        let mem = MemFs::new();
        let repo = init_repo(&mem, "/r").unwrap();

        let config = inspect(&mem, &repo).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(mem.write_count(), 1);
    }

    #[test]
    fn test_inspect_uninitialized() {
        let mem = MemFs::new();
        let err = inspect(&mem, &Repo::new("/r")).unwrap_err();
        assert!(err.contains("Not initialized"));
    }

    #[test]
    fn test_inspect_wyag_file_is_not_a_repo() {
        let mem = MemFs::new();
        mem.add_file("/r/.wyag", b"");
        let err = inspect(&mem, &Repo::new("/r")).unwrap_err();
        assert!(err.contains("Not initialized"));
    }

    #[test]
    fn test_inspect_reports_unsupported_version() {
        let mem = MemFs::new();
        mem.add_dir("/r/.wyag");
        mem.add_file(
            "/r/.wyag/conf",
            br#"{"core":{"repositoryformatversion":2}}"#,
        );

        let err = inspect(&mem, &Repo::new("/r")).unwrap_err();
        assert!(err.contains("unsupported repository format version 2"));
        assert_eq!(mem.write_count(), 0);
    }

    #[test]
    fn test_inspect_conf_directory_conflicts() {
        let mem = MemFs::new();
        mem.add_dir("/r/.wyag");
        mem.add_dir("/r/.wyag/conf");

        let err = inspect(&mem, &Repo::new("/r")).unwrap_err();
        assert_eq!(err, "conf path is occupied by a directory: /r/.wyag/conf");
    }

    #[test]
    fn test_inspect_stat_failure_matches_init_wording() {
        let mem = MemFs::new();
        mem.fail("stat", "/r/.wyag");

        let err = inspect(&mem, &Repo::new("/r")).unwrap_err();
        assert!(err.starts_with("failed to stat path /r/.wyag: "));
    }

    #[test]
    fn test_inspect_missing_conf() {
        let mem = MemFs::new();
        mem.add_dir("/r/.wyag");

        let err = inspect(&mem, &Repo::new("/r")).unwrap_err();
        assert!(err.starts_with("failed to read conf file /r/.wyag/conf"));
    }
}
