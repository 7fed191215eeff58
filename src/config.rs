//! Runtime settings.
//!
//! Settings are layered: built-in defaults, then `tinycmd.toml` (or the file
//! named by `TINYCMD_CONFIG`), then `TINYCMD_*` environment variables.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Default configuration file, looked up in the working directory.
pub const CONFIG_FILE: &str = "tinycmd.toml";

/// Prefix of the environment variables read by [`Settings::load`].
pub const ENV_PREFIX: &str = "TINYCMD_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Leading host-runtime tokens dropped before parsing (program path).
    #[serde(default = "default_skip")]
    pub skip: usize,
    /// Default log filter; `RUST_LOG` still wins when set.
    #[serde(default = "default_log")]
    pub log: String,
}

fn default_skip() -> usize {
    1
}

fn default_log() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            skip: default_skip(),
            log: default_log(),
        }
    }
}

impl Settings {
    /// Load settings from the default file location and the environment.
    pub fn load() -> Result<Self, figment::Error> {
        Self::figment(&config_path()).extract()
    }

    /// Provider stack for a given configuration file. A missing file is
    /// not an error.
    pub fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).only(&["skip", "log"]))
    }
}

/// Configuration file path: `TINYCMD_CONFIG` if set, else `./tinycmd.toml`.
pub fn config_path() -> PathBuf {
    std::env::var_os("TINYCMD_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
}
