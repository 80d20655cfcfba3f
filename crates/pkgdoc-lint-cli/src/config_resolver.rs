//! Locating and loading `pkgdoc-lint.toml`.
//!
//! Lookup order, first hit wins:
//!
//! 1. `--config <FILE>`
//! 2. `pkgdoc-lint.toml`, then `.pkgdoc-lint.toml`, in the checked root
//! 3. `config.toml` in `$PKGDOC_LINT_CONFIG_DIR` or `~/.pkgdoc-lint/`
//! 4. built-in defaults

use pkgdoc_lint_core::{Config, ConfigError};
use std::path::{Path, PathBuf};

/// Where the configuration comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given on the command line; not checked for existence.
    Explicit(PathBuf),
    /// Found in the checked root.
    Project(PathBuf),
    /// Found in the user-wide config directory.
    Global(PathBuf),
    /// Nothing found.
    Default,
}

impl ConfigSource {
    /// Returns the config file path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Reads the configuration, or returns defaults for [`ConfigSource::Default`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is invalid.
    pub fn load(&self) -> Result<Config, ConfigError> {
        match self.path() {
            Some(p) => {
                if matches!(self, Self::Global(_)) {
                    tracing::info!("Using global config: {}", p.display());
                }
                Config::from_file(p)
            }
            None => Ok(Config::default()),
        }
    }
}

const PROJECT_FILES: [&str; 2] = ["pkgdoc-lint.toml", ".pkgdoc-lint.toml"];

const GLOBAL_FILE: &str = "config.toml";

const CONFIG_DIR_ENV: &str = "PKGDOC_LINT_CONFIG_DIR";

/// Resolves the configuration for a check rooted at `root`.
#[must_use]
pub fn resolve(root: &Path, explicit: Option<&Path>) -> ConfigSource {
    lookup(root, explicit, global_config_dir().as_deref())
}

fn lookup(root: &Path, explicit: Option<&Path>, global_dir: Option<&Path>) -> ConfigSource {
    if let Some(p) = explicit {
        return ConfigSource::Explicit(p.to_path_buf());
    }

    if let Some(found) = PROJECT_FILES
        .iter()
        .map(|name| root.join(name))
        .find(|p| p.is_file())
    {
        tracing::debug!("Found project config: {}", found.display());
        return ConfigSource::Project(found);
    }

    match global_dir.map(|d| d.join(GLOBAL_FILE)) {
        Some(p) if p.is_file() => {
            tracing::debug!("Found global config: {}", p.display());
            ConfigSource::Global(p)
        }
        _ => ConfigSource::Default,
    }
}

fn global_config_dir() -> Option<PathBuf> {
    std::env::var_os(CONFIG_DIR_ENV)
        .map(PathBuf::from)
        .or_else(|| home::home_dir().map(|h| h.join(".pkgdoc-lint")))
}
