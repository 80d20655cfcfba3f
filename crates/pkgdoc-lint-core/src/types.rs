//! Core types for packages, violations and results.

use serde::{Serialize, Serializer};
use std::path::{Path, PathBuf};

/// A directory holding at least one buildable source file.
///
/// Packages are identified by their path as discovered under the analysis
/// root (e.g. `./foo/bar` when the root is `.`). Ordering and equality use
/// that string form so reports sort the same way on every platform.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Package {
    name: String,
    dir: PathBuf,
}

impl Package {
    /// Creates a package from its directory path.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            name: dir.to_string_lossy().into_owned(),
            dir,
        }
    }

    /// Returns the package identifier as printed in reports.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the package directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl std::fmt::Display for Package {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

impl Serialize for Package {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name)
    }
}

/// A rule failure found in a package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Rule code (e.g., "PD001").
    pub code: String,
    /// Rule name (e.g., "doc-file-only").
    pub rule: String,
    /// Human-readable message.
    pub message: String,
}

impl Violation {
    /// Creates a new violation.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        rule: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            rule: rule.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

/// Separator between violation messages of one package.
pub const VIOLATION_SEPARATOR: &str = "; ";

/// Outcome of checking a single package.
#[derive(Debug, Clone, Serialize)]
pub struct PackageReport {
    /// The checked package.
    pub package: Package,
    /// Whether the package was skipped without running any rule.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub skipped: bool,
    /// Violations in rule evaluation order.
    pub violations: Vec<Violation>,
}

impl PackageReport {
    /// Creates a report for a package that passed every rule.
    #[must_use]
    pub fn clean(package: Package) -> Self {
        Self {
            package,
            skipped: false,
            violations: Vec::new(),
        }
    }

    /// Creates a report for a package that was skipped.
    #[must_use]
    pub fn skipped(package: Package) -> Self {
        Self {
            package,
            skipped: true,
            violations: Vec::new(),
        }
    }

    /// Creates a report carrying the given violations.
    #[must_use]
    pub fn with_violations(package: Package, violations: Vec<Violation>) -> Self {
        Self {
            package,
            skipped: false,
            violations,
        }
    }

    /// Returns true if this package has at least one violation.
    #[must_use]
    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }

    /// Joins all violation messages with `"; "`.
    ///
    /// Empty when the package is clean.
    #[must_use]
    pub fn summary(&self) -> String {
        self.violations
            .iter()
            .map(|v| v.message.as_str())
            .collect::<Vec<_>>()
            .join(VIOLATION_SEPARATOR)
    }
}

/// Result of running lint analysis over a tree.
#[derive(Debug, Default, Serialize)]
pub struct LintResult {
    /// One report per discovered package, in sorted package order.
    pub reports: Vec<PackageReport>,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if any package has a violation.
    #[must_use]
    pub fn has_violations(&self) -> bool {
        self.reports.iter().any(PackageReport::has_violations)
    }

    /// Returns the reports of packages with at least one violation.
    pub fn failing(&self) -> impl Iterator<Item = &PackageReport> {
        self.reports.iter().filter(|r| r.has_violations())
    }

    /// Number of packages discovered.
    #[must_use]
    pub fn packages_found(&self) -> usize {
        self.reports.len()
    }

    /// Number of packages skipped by suffix.
    #[must_use]
    pub fn packages_skipped(&self) -> usize {
        self.reports.iter().filter(|r| r.skipped).count()
    }

    /// Total number of violations across all packages.
    #[must_use]
    pub fn violation_count(&self) -> usize {
        self.reports.iter().map(|r| r.violations.len()).sum()
    }
}
