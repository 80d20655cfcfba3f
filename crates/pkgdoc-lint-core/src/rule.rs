//! Rule trait for defining package doc lint rules.

use crate::context::PackageContext;
use crate::types::Violation;

/// A lint rule applied to one package's documentation comment.
///
/// # Example
///
/// ```ignore
/// use pkgdoc_lint_core::{PackageContext, PackageRule, Violation};
///
/// pub struct NoTodo;
///
/// impl PackageRule for NoTodo {
///     fn name(&self) -> &'static str { "no-todo" }
///     fn code(&self) -> &'static str { "PD100" }
///
///     fn check(&self, ctx: &PackageContext) -> Vec<Violation> {
///         if ctx.header.as_str().contains("TODO") {
///             vec![Violation::new(self.code(), self.name(), "package comment has a TODO")]
///         } else {
///             vec![]
///         }
///     }
/// }
/// ```
pub trait PackageRule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "doc-file-only").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "PD001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Checks a package and returns any violations found.
    fn check(&self, ctx: &PackageContext) -> Vec<Violation>;
}

/// Type alias for boxed `PackageRule` trait objects.
pub type RuleBox = Box<dyn PackageRule>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doc::DocHeader;
    use crate::types::Package;

    struct TestRule;

    impl PackageRule for TestRule {
        fn name(&self) -> &'static str {
            "test-rule"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }
        fn description(&self) -> &'static str {
            "A test rule"
        }

        fn check(&self, ctx: &PackageContext) -> Vec<Violation> {
            vec![Violation::new(
                self.code(),
                self.name(),
                format!("{} has {} comment file(s)", ctx.package, ctx.comment_files.len()),
            )]
        }
    }

    #[test]
    fn test_rule_trait() {
        let rule = TestRule;
        assert_eq!(rule.name(), "test-rule");
        assert_eq!(rule.code(), "TEST001");

        let package = Package::new("./pkg");
        let header = DocHeader::from_output("pkg\n\nPackage pkg.", &["func "]);
        let files = vec!["doc.go".to_string()];
        let violations = rule.check(&PackageContext::new(&package, &header, &files));
        assert_eq!(violations[0].message, "./pkg has 1 comment file(s)");
    }
}
