//! Owner-only permissions for files under `~/.folio`.
//!
//! Permissions are only tightened when the current user owns the path.

use std::fs;
use std::io;
use std::path::Path;

/// Create `dir` (and parents) and drop group/other access on Unix.
pub fn ensure_private_dir(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)?;
    #[cfg(unix)]
    tighten(dir, 0o700)?;
    Ok(())
}

/// Drop group/other access to `path` on Unix. No-op elsewhere.
pub fn restrict_file_to_owner(path: &Path) -> io::Result<()> {
    #[cfg(unix)]
    tighten(path, 0o600)?;
    #[cfg(not(unix))]
    let _ = path;
    Ok(())
}

#[cfg(unix)]
fn tighten(path: &Path, target: u32) -> io::Result<()> {
    use std::os::unix::fs::{MetadataExt, PermissionsExt};

    let metadata = fs::metadata(path)?;
    // SAFETY: getuid has no preconditions and cannot fail.
    let our_uid = unsafe { libc::getuid() };
    if metadata.uid() != our_uid {
        return Ok(());
    }
    let mode = metadata.permissions().mode() & 0o777;
    if mode & 0o077 != 0 {
        fs::set_permissions(path, fs::Permissions::from_mode(target))?;
    }
    Ok(())
}

#[cfg(all(test, unix))]
mod tests {
    use std::os::unix::fs::PermissionsExt;

    use super::*;

    #[test]
    fn private_dir_drops_group_access() {
        let root = tempfile::tempdir().expect("tempdir");
        let dir = root.path().join(".folio");
        fs::create_dir_all(&dir).expect("mkdir");
        fs::set_permissions(&dir, fs::Permissions::from_mode(0o755)).expect("chmod");

        ensure_private_dir(&dir).expect("secure");

        let mode = fs::metadata(&dir).expect("metadata").permissions().mode() & 0o777;
        assert_eq!(mode, 0o700);
    }

    #[test]
    fn owner_only_file_keeps_tight_modes() {
        let root = tempfile::tempdir().expect("tempdir");
        let path = root.path().join("config.toml");
        fs::write(&path, "").expect("write");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o400)).expect("chmod");

        restrict_file_to_owner(&path).expect("restrict");

        let mode = fs::metadata(&path).expect("metadata").permissions().mode() & 0o777;
        assert_eq!(mode, 0o400);
    }
}
