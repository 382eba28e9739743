//! Configuration and data directory paths.
//!
//! Platform directories come from the `dirs` crate:
//!
//! | Purpose | Linux | macOS | Windows |
//! |---------|-------|-------|---------|
//! | Config  | `~/.config/huelio` | `~/Library/Application Support/huelio` | `%APPDATA%\huelio` |
//! | Data    | `~/.local/share/huelio` | `~/Library/Application Support/huelio` | `%APPDATA%\huelio` |

use std::path::{Path, PathBuf};

const APP_DIR: &str = "huelio";

/// Returns the directory holding persisted state and logs.
///
/// `None` only when the platform has no data directory at all.
#[must_use]
pub fn get_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|base| base.join(APP_DIR))
}

/// Returns the directory holding `config.toml`.
#[must_use]
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(APP_DIR))
}

/// Expands a leading `~` to the home directory.
///
/// Paths without a tilde, and all paths when no home directory is known, are
/// returned unchanged.
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    expand_tilde_with(path, dirs::home_dir().as_deref())
}

fn expand_tilde_with(path: &str, home: Option<&Path>) -> PathBuf {
    match (path, home) {
        ("~", Some(home)) => home.to_path_buf(),
        (p, Some(home)) if p.starts_with("~/") => home.join(&p[2..]),
        (p, _) => PathBuf::from(p),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_dirs_end_with_app_name() {
        if let Some(dir) = get_data_dir() {
            assert!(dir.ends_with(APP_DIR));
        }
        if let Some(dir) = get_config_dir() {
            assert!(dir.ends_with(APP_DIR));
        }
    }

    #[test]
    fn tilde_expansion() {
        let home = Path::new("/home/ada");
        assert_eq!(expand_tilde_with("~/themes/x.toml", Some(home)), PathBuf::from("/home/ada/themes/x.toml"));
        assert_eq!(expand_tilde_with("~", Some(home)), PathBuf::from("/home/ada"));
        assert_eq!(expand_tilde_with("/etc/x", Some(home)), PathBuf::from("/etc/x"));
        assert_eq!(expand_tilde_with("~other/x", Some(home)), PathBuf::from("~other/x"));
        assert_eq!(expand_tilde_with("~/x", None), PathBuf::from("~/x"));
    }
}
