//! Core analyzer for orchestrating lint execution.

use crate::comments::comment_files;
use crate::config::Config;
use crate::context::PackageContext;
use crate::doc::{CommandDocFetcher, DocFetcher, DocFetcherBox, DocHeader};
use crate::finder::{find_packages, ExcludeSet};
use crate::pool::{available_parallelism, WorkerPool};
use crate::rule::{PackageRule, RuleBox};
use crate::types::{LintResult, Package, PackageReport};

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during analysis.
///
/// Any of these aborts the whole run.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// IO error reading a package directory or source file.
    #[error("IO error in {path}: {source}")]
    Io {
        /// Path being read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Error walking the source tree.
    #[error("Failed to walk source tree: {0}")]
    Walk(#[from] walkdir::Error),

    /// The documentation command could not run or failed.
    #[error("Documentation command failed for {package}: {message}")]
    DocCommand {
        /// Package whose documentation was requested.
        package: String,
        /// What went wrong.
        message: String,
    },

    /// Glob pattern error.
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    /// Worker pool could not be created.
    #[error("Failed to start worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    root: Option<PathBuf>,
    rules: Vec<RuleBox>,
    fetcher: Option<DocFetcherBox>,
    exclude_patterns: Vec<String>,
    parallelism: Option<NonZeroUsize>,
    config: Option<Config>,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root directory to analyze.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Adds a rule to the analyzer.
    #[must_use]
    pub fn rule<R: PackageRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the analyzer.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Replaces the documentation source (default: the configured command).
    #[must_use]
    pub fn doc_fetcher<F: DocFetcher + 'static>(mut self, fetcher: F) -> Self {
        self.fetcher = Some(Box::new(fetcher));
        self
    }

    /// Adds an exclude glob pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Sets the number of worker threads.
    #[must_use]
    pub fn parallelism(mut self, workers: NonZeroUsize) -> Self {
        self.parallelism = Some(workers);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the analyzer.
    ///
    /// # Errors
    ///
    /// Returns an error if an exclude pattern is invalid or the worker pool
    /// cannot be started.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let config = self.config.unwrap_or_default();

        let root = self.root.unwrap_or_else(|| config.analyzer.root.clone());

        let mut exclude_patterns = self.exclude_patterns;
        exclude_patterns.extend(config.analyzer.exclude.iter().cloned());
        let excludes = ExcludeSet::new(&exclude_patterns)?;

        let workers = self
            .parallelism
            .or_else(|| config.analyzer.parallelism.and_then(NonZeroUsize::new))
            .unwrap_or_else(available_parallelism);
        let pool = WorkerPool::new(workers)?;

        let fetcher = self
            .fetcher
            .unwrap_or_else(|| Box::new(CommandDocFetcher::from_config(&config.doc)));

        let rules = self
            .rules
            .into_iter()
            .filter(|rule| {
                let enabled = config.is_rule_enabled(rule.name());
                if !enabled {
                    debug!("Skipping disabled rule: {}", rule.name());
                }
                enabled
            })
            .collect();

        Ok(Analyzer {
            root,
            rules,
            fetcher,
            excludes,
            pool,
            config,
        })
    }
}

/// The main analyzer that orchestrates lint execution.
///
/// Use [`Analyzer::builder()`] to construct an instance.
pub struct Analyzer {
    root: PathBuf,
    rules: Vec<RuleBox>,
    fetcher: DocFetcherBox,
    excludes: ExcludeSet,
    pool: WorkerPool,
    config: Config,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the root directory being analyzed.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the number of enabled rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the number of worker threads.
    #[must_use]
    pub fn workers(&self) -> usize {
        self.pool.workers()
    }

    /// Checks every package under the root.
    ///
    /// Reports come back in sorted package order.
    ///
    /// # Errors
    ///
    /// Returns the first fatal error: an unreadable tree, or a
    /// documentation command that fails for any package.
    pub fn analyze(&self) -> Result<LintResult, AnalyzerError> {
        info!("Starting analysis at {}", self.root.display());

        let packages = find_packages(&self.root, &self.config.layout.source_suffix)?;
        let packages = self.excludes.filter(packages);

        info!(
            "Found {} package(s), checking with {} worker(s)",
            packages.len(),
            self.pool.workers()
        );

        let reports = self.pool.run(&packages, |package| self.check_package(package))?;
        let result = LintResult { reports };

        info!(
            "Analysis complete: {} violation(s) in {} package(s)",
            result.violation_count(),
            result.failing().count()
        );

        Ok(result)
    }

    /// Runs the full pipeline for one package.
    ///
    /// # Errors
    ///
    /// Returns an error if the documentation command fails or the package
    /// directory cannot be read.
    pub fn check_package(&self, package: &Package) -> Result<PackageReport, AnalyzerError> {
        if self.is_skipped(package) {
            debug!("Skipping: {}", package);
            return Ok(PackageReport::skipped(package.clone()));
        }

        let output = self.fetcher.fetch(package)?;
        let header = DocHeader::from_output(&output, &self.config.doc.declaration_prefixes);
        if !header.has_comment() {
            debug!("No package comment: {}", package);
            return Ok(PackageReport::clean(package.clone()));
        }

        let files =
            comment_files(package.dir(), &self.config.layout).map_err(|e| AnalyzerError::Io {
                path: package.dir().to_path_buf(),
                source: e,
            })?;

        let ctx = PackageContext::new(package, &header, &files);
        let violations = self.rules.iter().flat_map(|rule| rule.check(&ctx)).collect();

        Ok(PackageReport::with_violations(package.clone(), violations))
    }

    fn is_skipped(&self, package: &Package) -> bool {
        self.config
            .analyzer
            .skip_suffixes
            .iter()
            .any(|suffix| package.name().ends_with(suffix.as_str()))
    }
}
