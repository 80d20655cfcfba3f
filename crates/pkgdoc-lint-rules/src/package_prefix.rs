//! Rule requiring the package comment to open with `Package <name>`.
//!
//! The documentation output begins with a two-line header (the package
//! clause and a blank line), so the comment text starts at line index 2.

use pkgdoc_lint_core::{PackageContext, PackageRule, Violation};

/// Rule code for package-prefix.
pub const CODE: &str = "PD002";

/// Rule name for package-prefix.
pub const NAME: &str = "package-prefix";

const REQUIRED_PREFIX: &str = "Package ";

/// Index of the first comment line in the doc header.
const FIRST_COMMENT_LINE: usize = 2;

/// Requires the package comment to start with `Package `.
#[derive(Debug, Clone, Copy, Default)]
pub struct PackagePrefix;

impl PackagePrefix {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl PackageRule for PackagePrefix {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Package comment must start with \"Package \""
    }

    fn check(&self, ctx: &PackageContext) -> Vec<Violation> {
        let lines = ctx.header.lines();
        match lines.get(FIRST_COMMENT_LINE) {
            Some(line) if !line.starts_with(REQUIRED_PREFIX) => vec![Violation::new(
                CODE,
                NAME,
                format!("package comment does not start with \"{REQUIRED_PREFIX}\""),
            )],
            _ => vec![],
        }
    }
}
