//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# pkgdoc-lint configuration

[analyzer]
# Root used when no PATH is given on the command line
# root = "."

# Glob patterns of package directories to leave out
exclude = []

# Packages whose path ends with one of these are skipped
skip_suffixes = ["/mocks"]

# Number of parallel workers (default: number of CPUs)
# parallelism = 8

[doc]
# Documentation command; the package path is appended
command = ["go", "doc"]

[layout]
doc_file = "doc.go"

# Each rule can be disabled individually
[rules.doc-file-only]
enabled = true

[rules.package-prefix]
enabled = true

[rules.no-copyright]
enabled = true
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("pkgdoc-lint.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created pkgdoc-lint.toml");
    println!("\nNext steps:");
    println!("  1. Edit pkgdoc-lint.toml to configure rules");
    println!("  2. Run: pkgdoc-lint");

    Ok(())
}
