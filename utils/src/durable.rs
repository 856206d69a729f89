//! Replace small files on disk without ever leaving a half-written one.
//!
//! The new contents go to a sibling temp file that is renamed over the target.
//! Where rename cannot replace an existing file, the old one is parked at
//! `<name>.bak` for the duration of the swap and restored on failure.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

fn backup_path(path: &Path) -> PathBuf {
    path.with_extension("bak")
}

/// Moves an orphaned `<name>.bak` back into place.
///
/// Returns `true` when a backup was restored. A backup only survives a crash
/// between parking the old file and renaming the new one in.
pub fn restore_backup(path: &Path) -> bool {
    let backup = backup_path(path);
    if path.exists() || !backup.exists() {
        return false;
    }
    match fs::rename(&backup, path) {
        Ok(()) => {
            tracing::warn!(path = %path.display(), "Restored file from interrupted write");
            true
        }
        Err(e) => {
            tracing::warn!(path = %backup.display(), "Could not restore backup: {e}");
            false
        }
    }
}

/// Replaces `path` with `bytes`, creating parent directories as needed.
///
/// The staged file is synced before the swap.
pub fn replace_file(path: impl AsRef<Path>, bytes: &[u8]) -> io::Result<()> {
    let path = path.as_ref();
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    fs::create_dir_all(dir)?;

    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(bytes)?;
    staged.as_file().sync_all()?;

    let Err(failed) = staged.persist(path) else {
        return Ok(());
    };
    if !path.exists() {
        return Err(failed.error);
    }

    let backup = backup_path(path);
    let _ = fs::remove_file(&backup);
    fs::rename(path, &backup)?;
    if let Err(retry) = failed.file.persist(path) {
        let _ = fs::rename(&backup, path);
        return Err(retry.error);
    }
    if let Err(e) = fs::remove_file(&backup) {
        tracing::debug!(path = %backup.display(), "Leftover backup not removed: {e}");
    }
    Ok(())
}
