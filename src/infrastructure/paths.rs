//! Path utilities for the Zellij sandbox environment.

use std::path::PathBuf;

/// Host mount point inside the plugin sandbox.
const HOST_ROOT: &str = "/host";

/// Returns the data directory holding the trace files.
///
/// Resolves to `/host/.local/share/zellij/book-catalog`. `/host` points at the
/// directory Zellij was started from, usually the user's home.
///
/// # Examples
///
/// ```
/// use book_catalog::infrastructure::get_data_dir;
///
/// assert!(get_data_dir().ends_with("zellij/book-catalog"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT).join(".local/share/zellij").join("book-catalog")
}

/// Expands a leading `~` to the sandbox host mount.
///
/// # Examples
///
/// ```
/// use book_catalog::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/books/catalog.toml"), "/host/books/catalog.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/data/catalog.json"), "/data/catalog.json");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => HOST_ROOT.to_string(),
        Some(rest) if rest.starts_with('/') => format!("{HOST_ROOT}{rest}"),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_user_paths_are_left_alone() {
        assert_eq!(expand_tilde("~alice/catalog.json"), "~alice/catalog.json");
        assert_eq!(expand_tilde("relative/~/x"), "relative/~/x");
    }

    #[test]
    fn data_dir_is_under_host() {
        assert_eq!(get_data_dir(), PathBuf::from("/host/.local/share/zellij/book-catalog"));
    }
}
