//! # pkgdoc-lint-rules
//!
//! Built-in package doc comment rules for pkgdoc-lint.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | PD001 | `doc-file-only` | Package comment only in the doc file (`doc.go` by default) |
//! | PD002 | `package-prefix` | Package comment starts with `Package ` |
//! | PD003 | `no-copyright` | No copyright notice inside the package comment |
//!
//! ## Usage
//!
//! ```ignore
//! use pkgdoc_lint_core::Analyzer;
//! use pkgdoc_lint_rules::all_rules;
//!
//! let mut builder = Analyzer::builder().root(".");
//! for rule in all_rules() {
//!     builder = builder.rule_box(rule);
//! }
//! let result = builder.build()?.analyze()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod doc_file_only;
mod no_copyright;
mod package_prefix;
mod presets;

pub use doc_file_only::DocFileOnly;
pub use no_copyright::NoCopyright;
pub use package_prefix::PackagePrefix;
pub use presets::{all_rules, configured_rules, rules_by_name};

/// Re-export core types for convenience.
pub use pkgdoc_lint_core::{PackageRule, Violation};
