//! Rule sets built from configuration.

use crate::{DocFileOnly, NoCopyright, PackagePrefix};
use pkgdoc_lint_core::{Config, RuleBox};
use tracing::warn;

/// Returns every built-in rule with default settings, in evaluation order.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![
        Box::new(DocFileOnly::new()),
        Box::new(PackagePrefix::new()),
        Box::new(NoCopyright::new()),
    ]
}

/// Returns every built-in rule configured from `config`.
///
/// The analyzer drops rules disabled in `config`.
#[must_use]
pub fn configured_rules(config: &Config) -> Vec<RuleBox> {
    vec![
        Box::new(DocFileOnly::new().doc_file(config.layout.doc_file.clone())),
        Box::new(PackagePrefix::new()),
        Box::new(NoCopyright::new()),
    ]
}

/// Looks up built-in rules by name or code, keeping the given order.
///
/// Unknown names are logged and ignored.
#[must_use]
pub fn rules_by_name(names: &[&str], config: &Config) -> Vec<RuleBox> {
    let mut rules: Vec<RuleBox> = Vec::new();

    for name in names {
        match *name {
            "doc-file-only" | "PD001" => rules.push(Box::new(
                DocFileOnly::new().doc_file(config.layout.doc_file.clone()),
            )),
            "package-prefix" | "PD002" => rules.push(Box::new(PackagePrefix::new())),
            "no-copyright" | "PD003" => rules.push(Box::new(NoCopyright::new())),
            _ => warn!("Unknown rule: {}", name),
        }
    }

    rules
}
