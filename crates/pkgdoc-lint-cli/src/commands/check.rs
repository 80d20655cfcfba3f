//! Check command implementation.

use anyhow::{Context, Result};
use pkgdoc_lint_core::Analyzer;
use pkgdoc_lint_rules::{configured_rules, rules_by_name};
use std::path::Path;

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Runs the check command.
///
/// Without `path`, the root comes from `analyzer.root` in the config.
pub fn run(
    path: Option<&Path>,
    format: OutputFormat,
    rules_filter: Option<String>,
    source: &ConfigSource,
) -> Result<()> {
    let config = source.load().with_context(|| match source.path() {
        Some(p) => format!("Failed to load config: {}", p.display()),
        None => "Failed to load default config".to_string(),
    })?;

    let rules = if let Some(filter) = rules_filter {
        let names: Vec<&str> = filter.split(',').map(str::trim).collect();
        rules_by_name(&names, &config)
    } else {
        configured_rules(&config)
    };

    let mut builder = Analyzer::builder().config(config);
    if let Some(path) = path {
        builder = builder.root(path);
    }
    for rule in rules {
        builder = builder.rule_box(rule);
    }

    let analyzer = builder.build().context("Failed to build analyzer")?;

    tracing::debug!(
        "Checking {} with {} rule(s) on {} worker(s)",
        analyzer.root().display(),
        analyzer.rule_count(),
        analyzer.workers()
    );

    let result = analyzer.analyze().context("Analysis failed")?;

    super::output::print(&result, format)?;

    if result.has_violations() {
        std::process::exit(1);
    }

    Ok(())
}
