//! List rules command implementation.

use pkgdoc_lint_rules::all_rules;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<10} {:<20} Description", "Code", "Name");
    println!("{}", "-".repeat(80));

    for rule in all_rules() {
        println!(
            "{:<10} {:<20} {}",
            rule.code(),
            rule.name(),
            rule.description()
        );
    }

    println!("\nUse --rules to run a subset, e.g.:");
    println!("  pkgdoc-lint check --rules doc-file-only,no-copyright");
    println!("  pkgdoc-lint check --rules PD001,PD003");
}
