//! Configuration types for pkgdoc-lint.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level configuration for pkgdoc-lint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Analyzer configuration.
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Documentation command configuration.
    #[serde(default)]
    pub doc: DocConfig,

    /// Source layout conventions.
    #[serde(default)]
    pub layout: LayoutConfig,

    /// Per-rule configurations.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or the doc command is empty.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.doc.command.is_empty() {
            return Err(ConfigError::Invalid {
                message: "doc.command must name a program".to_string(),
            });
        }
        if self.analyzer.parallelism == Some(0) {
            return Err(ConfigError::Invalid {
                message: "analyzer.parallelism must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Checks if a rule is enabled.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        self.rules
            .get(rule_name)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }
}

/// Analyzer-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Root directory to analyze (default: current directory).
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Glob patterns of package directories to leave out.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Packages whose path ends with one of these are skipped entirely.
    #[serde(default = "default_skip_suffixes")]
    pub skip_suffixes: Vec<String>,

    /// Number of worker threads (default: available parallelism).
    #[serde(default)]
    pub parallelism: Option<usize>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            exclude: Vec::new(),
            skip_suffixes: default_skip_suffixes(),
            parallelism: None,
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_skip_suffixes() -> Vec<String> {
    vec!["/mocks".to_string()]
}

/// How the external documentation command is invoked and read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocConfig {
    /// Program followed by leading arguments; the package path is appended.
    #[serde(default = "default_doc_command")]
    pub command: Vec<String>,

    /// Line prefixes that start the declaration listing.
    #[serde(default = "default_declaration_prefixes")]
    pub declaration_prefixes: Vec<String>,
}

impl Default for DocConfig {
    fn default() -> Self {
        Self {
            command: default_doc_command(),
            declaration_prefixes: default_declaration_prefixes(),
        }
    }
}

fn default_doc_command() -> Vec<String> {
    vec!["go".to_string(), "doc".to_string()]
}

fn default_declaration_prefixes() -> Vec<String> {
    ["const ", "func ", "type ", "var "]
        .into_iter()
        .map(String::from)
        .collect()
}

/// File naming and line-prefix conventions of the checked sources.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Suffix marking a buildable source file.
    pub source_suffix: String,
    /// Suffix marking a test file.
    pub test_suffix: String,
    /// The only file allowed to carry the package comment.
    pub doc_file: String,
    /// Prefix of the package declaration line.
    pub package_keyword: String,
    /// Prefix of a line comment.
    pub comment_prefix: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            source_suffix: ".go".to_string(),
            test_suffix: "_test.go".to_string(),
            doc_file: "doc.go".to_string(),
            package_keyword: "package ".to_string(),
            comment_prefix: "//".to_string(),
        }
    }
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    pub enabled: Option<bool>,
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Error message.
        message: String,
    },

    /// Semantically invalid value.
    #[error("Invalid config: {message}")]
    Invalid {
        /// Error message.
        message: String,
    },
}
