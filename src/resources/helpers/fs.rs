//! File-system helpers.
use std::io;
use std::path::{Path, PathBuf};

/// Ensure the parent directory of `path` exists, creating it (and any
/// ancestors) if necessary.
///
/// # Errors
///
/// Returns the I/O error if the directory cannot be created.
pub fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// `path` relative to `base` when it lies underneath it, otherwise unchanged.
#[must_use]
pub fn relative_to(path: &Path, base: &Path) -> PathBuf {
    path.strip_prefix(base)
        .map_or_else(|_| path.to_path_buf(), Path::to_path_buf)
}

/// Render `path` for log output, relative to the current directory when
/// possible.
#[must_use]
pub fn display_path(path: &Path) -> String {
    std::env::current_dir().map_or_else(
        |_| path.display().to_string(),
        |cwd| relative_to(path, &cwd).display().to_string(),
    )
}

/// Expand a leading `~` using `home`.
///
/// `~` on its own or followed by a path separator becomes `home`; any other
/// input is returned unchanged.
///
/// ```
/// use std::path::{Path, PathBuf};
/// use speckit_installer::resources::helpers::fs::expand_tilde;
///
/// let home = Path::new("/home/dev");
/// assert_eq!(expand_tilde("~/work", Some(home)).unwrap(), PathBuf::from("/home/dev/work"));
/// assert_eq!(expand_tilde("~", Some(home)).unwrap(), PathBuf::from("/home/dev"));
/// assert_eq!(expand_tilde("work", Some(home)).unwrap(), PathBuf::from("work"));
/// assert!(expand_tilde("~bob/work", Some(home)).is_err());
/// ```
///
/// # Errors
///
/// Returns an [`io::ErrorKind::InvalidInput`] error for `~user` forms, which
/// are not supported, and for `~` when no home directory is known.
pub fn expand_tilde(input: &str, home: Option<&Path>) -> io::Result<PathBuf> {
    let Some(rest) = input.strip_prefix('~') else {
        return Ok(PathBuf::from(input));
    };
    if !rest.is_empty() && !rest.starts_with(['/', '\\']) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "~user paths are not supported; use ~/ or an absolute path",
        ));
    }
    let home = home.ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "home directory is not set")
    })?;
    Ok(home.join(rest.trim_start_matches(['/', '\\'])))
}

/// The user's home directory from `HOME` (or `USERPROFILE` on Windows).
#[must_use]
pub fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
}
