//! Rule keeping the package comment in a single designated file.
//!
//! # Rationale
//!
//! `go doc` concatenates every comment attached to a `package` clause. A
//! stray comment above `package foo` in some other file silently becomes
//! part of the package documentation, so the comment belongs in one place.
//!
//! # Detected Patterns
//!
//! ```text
//! // Helpers for foo.      <- in helpers.go
//! package foo
//! ```
//!
//! # Good Patterns
//!
//! ```text
//! // Package foo does X.   <- in doc.go
//! package foo
//! ```

use pkgdoc_lint_core::{PackageContext, PackageRule, Violation};

/// Rule code for doc-file-only.
pub const CODE: &str = "PD001";

/// Rule name for doc-file-only.
pub const NAME: &str = "doc-file-only";

/// Default file expected to hold the package comment.
pub const DEFAULT_DOC_FILE: &str = "doc.go";

/// Requires the package comment to live only in the doc file.
#[derive(Debug, Clone)]
pub struct DocFileOnly {
    /// The one file allowed to carry the package comment.
    pub doc_file: String,
}

impl Default for DocFileOnly {
    fn default() -> Self {
        Self::new()
    }
}

impl DocFileOnly {
    /// Creates a new rule expecting `doc.go`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            doc_file: DEFAULT_DOC_FILE.to_string(),
        }
    }

    /// Sets the file allowed to carry the package comment.
    #[must_use]
    pub fn doc_file(mut self, name: impl Into<String>) -> Self {
        self.doc_file = name.into();
        self
    }
}

impl PackageRule for DocFileOnly {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Package comment must only appear in the designated doc file"
    }

    fn check(&self, ctx: &PackageContext) -> Vec<Violation> {
        let strays: Vec<&str> = ctx
            .comment_files
            .iter()
            .map(String::as_str)
            .filter(|f| *f != self.doc_file)
            .collect();

        if strays.is_empty() {
            return vec![];
        }

        vec![Violation::new(
            CODE,
            NAME,
            format!(
                "package comment in non-{} files: {}",
                self.doc_file,
                strays.join(", ")
            ),
        )]
    }
}
