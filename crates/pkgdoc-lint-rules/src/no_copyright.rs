//! Rule catching a copyright notice glued to the package comment.
//!
//! A license header directly followed by `package foo` is read as the
//! package documentation. A blank line between the two keeps them apart.

use pkgdoc_lint_core::{PackageContext, PackageRule, Violation};

/// Rule code for no-copyright.
pub const CODE: &str = "PD003";

/// Rule name for no-copyright.
pub const NAME: &str = "no-copyright";

const COPYRIGHT_MARKER: &str = "Copyright 20";

/// Forbids copyright notices inside the package comment.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCopyright;

impl NoCopyright {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl PackageRule for NoCopyright {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Package comment must not include a copyright notice"
    }

    fn check(&self, ctx: &PackageContext) -> Vec<Violation> {
        if !ctx.header.as_str().contains(COPYRIGHT_MARKER) {
            return vec![];
        }
        vec![Violation::new(
            CODE,
            NAME,
            "package comment should not include Copyright notice (add blank line after)",
        )]
    }
}
