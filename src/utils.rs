//! Utility functions for directory lookup
//!
//! Follows the XDG Base Directory specification:
//!
//! - Config: `~/.config/cookie-filter/` - optional default allow-list

use directories::ProjectDirs;
use std::path::PathBuf;

pub fn get_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "cookie-filter", "cookie-filter")
        .map(|pd| pd.config_dir().to_path_buf())
}
