//! # pkgdoc-lint-core
//!
//! Core framework for linting Go package documentation comments.
//!
//! This crate provides:
//!
//! - [`find_packages`] for discovering package directories
//! - [`DocFetcher`] and [`DocHeader`] for extracting the package comment
//! - [`comment_files`] for locating files that carry a package comment
//! - [`PackageRule`] trait for checks on a package comment
//! - [`Analyzer`] for running every check on a bounded [`WorkerPool`]
//!
//! ## Example
//!
//! ```ignore
//! use pkgdoc_lint_core::Analyzer;
//!
//! let analyzer = Analyzer::builder()
//!     .root(".")
//!     .rule(MyRule::new())
//!     .build()?;
//!
//! let result = analyzer.analyze()?;
//! for report in result.failing() {
//!     println!("{}: {}", report.package, report.summary());
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod comments;
mod config;
mod context;
mod doc;
mod finder;
mod pool;
mod rule;
mod types;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use comments::comment_files;
pub use config::{AnalyzerConfig, Config, ConfigError, DocConfig, LayoutConfig, RuleConfig};
pub use context::PackageContext;
pub use doc::{CommandDocFetcher, DocFetcher, DocFetcherBox, DocHeader};
pub use finder::{find_packages, ExcludeSet};
pub use pool::{available_parallelism, WorkerPool};
pub use rule::{PackageRule, RuleBox};
pub use types::{LintResult, Package, PackageReport, Violation, VIOLATION_SEPARATOR};
