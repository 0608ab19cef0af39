use crate::core::classify::{DomainAllowList, default_allow_list};
use crate::core::error::{Error, Result};
use crate::utils::get_config_dir;
use crate::validators::check_domain_entry;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Optional on-disk configuration
///
/// ```json
/// { "domains": ["youtube.com", "googlevideo.com"] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FilterConfig {
    /// Allow-list used when `--domains` is not given
    #[serde(default)]
    pub domains: Option<Vec<String>>,
}

/// `<XDG config dir>/cookie-filter/config.json`, if a home directory exists.
pub fn default_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}

/// Loads the configuration.
///
/// An explicitly given path must exist and parse. The default location is
/// optional: a missing file yields the defaults, and an unreadable or
/// invalid one is logged and ignored.
pub fn load_config(explicit: Option<&Path>) -> Result<FilterConfig> {
    if let Some(path) = explicit {
        return read_config(path);
    }

    let Some(path) = default_config_path() else {
        return Ok(FilterConfig::default());
    };
    if !path.exists() {
        debug!("No config at {}, using defaults", path.display());
        return Ok(FilterConfig::default());
    }

    match read_config(&path) {
        Ok(config) => Ok(config),
        Err(e) => {
            warn!("Ignoring config: {e}");
            Ok(FilterConfig::default())
        }
    }
}

/// Reads and parses a configuration file.
pub fn read_config(path: &Path) -> Result<FilterConfig> {
    let json = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let config = serde_json::from_str(&json).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Picks the allow-list: `--domains` flag, then config file, then the
/// built-in default.
///
/// Suspicious entries and an empty result are logged but still used.
pub fn resolve_allow_list(cli_domains: Option<&str>, config: &FilterConfig) -> DomainAllowList {
    let allow_list = match (cli_domains, &config.domains) {
        (Some(csv), _) => DomainAllowList::from_csv(csv),
        (None, Some(domains)) => DomainAllowList::new(domains),
        (None, None) => default_allow_list(),
    };

    for entry in allow_list.iter() {
        if let Err(reason) = check_domain_entry(entry) {
            warn!("Allow-list entry {reason}");
        }
    }
    if allow_list.is_empty() {
        warn!("Allow-list is empty; every cookie record will be dropped");
    }

    allow_list
}
