//! Context types for rule execution.

use crate::doc::DocHeader;
use crate::types::Package;

/// Context provided to package rules.
///
/// Rules only see a package whose documentation output carried a comment;
/// packages without one never reach the rules.
#[derive(Debug, Clone)]
pub struct PackageContext<'a> {
    /// The package being checked.
    pub package: &'a Package,
    /// Package comment extracted from the documentation output.
    pub header: &'a DocHeader,
    /// Source files whose package declaration is preceded by a comment.
    pub comment_files: &'a [String],
}

impl<'a> PackageContext<'a> {
    /// Creates a new package context.
    #[must_use]
    pub fn new(package: &'a Package, header: &'a DocHeader, comment_files: &'a [String]) -> Self {
        Self {
            package,
            header,
            comment_files,
        }
    }
}
