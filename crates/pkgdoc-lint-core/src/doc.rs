//! Package documentation extraction.
//!
//! The documentation text comes from an external command (`go doc` by
//! default) behind the [`DocFetcher`] trait so tests can substitute canned
//! output. [`DocHeader`] reduces that output to the package comment.

use crate::analyzer::AnalyzerError;
use crate::config::DocConfig;
use crate::types::Package;

use std::process::Command;
use tracing::debug;

/// Produces the raw documentation output for a package.
pub trait DocFetcher: Send + Sync {
    /// Returns the documentation text for `package`.
    ///
    /// # Errors
    ///
    /// Returns an error if the documentation cannot be produced.
    fn fetch(&self, package: &Package) -> Result<String, AnalyzerError>;
}

/// Type alias for boxed `DocFetcher` trait objects.
pub type DocFetcherBox = Box<dyn DocFetcher>;

/// Runs an external command as `<program> <args...> <package-path>`.
#[derive(Debug, Clone)]
pub struct CommandDocFetcher {
    program: String,
    args: Vec<String>,
}

impl CommandDocFetcher {
    /// Creates a fetcher running `program` with leading `args`.
    #[must_use]
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Creates a fetcher from the `[doc]` configuration section.
    ///
    /// Falls back to `go doc` when the command list is empty.
    #[must_use]
    pub fn from_config(config: &DocConfig) -> Self {
        match config.command.split_first() {
            Some((program, args)) => Self::new(program.clone(), args.to_vec()),
            None => Self::default(),
        }
    }
}

impl Default for CommandDocFetcher {
    fn default() -> Self {
        Self::new("go", vec!["doc".to_string()])
    }
}

impl DocFetcher for CommandDocFetcher {
    fn fetch(&self, package: &Package) -> Result<String, AnalyzerError> {
        debug!("Running {} {:?} {}", self.program, self.args, package);

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(package.dir())
            .output()
            .map_err(|e| AnalyzerError::DocCommand {
                package: package.name().to_string(),
                message: format!("failed to run {}: {e}", self.program),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AnalyzerError::DocCommand {
                package: package.name().to_string(),
                message: format!(
                    "{} exited with {}: {}",
                    self.program,
                    output.status,
                    stderr.trim()
                ),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// The package-level comment block of a documentation output.
///
/// Holds the text before the first declaration listing, trimmed. The first
/// two lines are the package header printed by the documentation command
/// (import line and a blank), so a header without a newline carries no
/// comment at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocHeader {
    text: String,
}

impl DocHeader {
    /// Truncates `output` at the first line starting with one of `prefixes`.
    #[must_use]
    pub fn from_output<S: AsRef<str>>(output: &str, prefixes: &[S]) -> Self {
        let kept: Vec<&str> = output
            .trim()
            .lines()
            .take_while(|line| !prefixes.iter().any(|p| line.starts_with(p.as_ref())))
            .collect();

        Self {
            text: kept.join("\n").trim().to_string(),
        }
    }

    /// Returns the header text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns true if the header spans more than one line.
    #[must_use]
    pub fn has_comment(&self) -> bool {
        self.text.contains('\n')
    }

    /// Returns the header split into lines.
    #[must_use]
    pub fn lines(&self) -> Vec<&str> {
        self.text.lines().collect()
    }
}
