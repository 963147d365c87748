//! Path utilities for the Zellij sandbox environment.
//!
//! Inside the plugin sandbox the host filesystem is mounted under `/host`, so
//! user-supplied paths such as `theme_file "~/themes/fruit.toml"` need their
//! tilde mapped onto that mount before they can be opened.

use std::path::PathBuf;

/// Host mount point inside the sandbox.
pub const HOST_ROOT: &str = "/host";

/// Directory holding the plugin's trace files.
///
/// Resolves to `/host/.local/share/zellij/fruitstand`.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT)
        .join(".local")
        .join("share")
        .join("zellij")
        .join("fruitstand")
}

/// Maps a leading `~` onto the host mount.
///
/// ```
/// use fruitstand::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/a.toml"), "/host/themes/a.toml");
/// assert_eq!(expand_tilde("/etc/a.toml"), "/etc/a.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', HOST_ROOT, 1)
    } else if path == "~" {
        HOST_ROOT.to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_lives_under_host_share() {
        assert_eq!(
            get_data_dir(),
            PathBuf::from("/host/.local/share/zellij/fruitstand")
        );
    }

    #[test]
    fn only_leading_tilde_is_expanded() {
        assert_eq!(expand_tilde("~"), "/host");
        assert_eq!(expand_tilde("~user/x"), "~user/x");
        assert_eq!(expand_tilde("a/~/b"), "a/~/b");
    }
}
