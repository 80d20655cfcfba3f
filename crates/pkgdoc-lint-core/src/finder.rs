//! Package discovery.

use crate::analyzer::AnalyzerError;
use crate::types::Package;

use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Finds every directory under `root` (inclusive) that directly contains a
/// file ending in `source_suffix`.
///
/// The suffix is matched on the raw file name bytes, so names that are not
/// valid UTF-8 still count. The result is sorted by path string and free of
/// duplicates. Symlinks are not followed, but a symlink to a directory is
/// treated as a directory.
///
/// # Errors
///
/// Returns [`AnalyzerError::Walk`] if any part of the tree cannot be read.
pub fn find_packages(root: &Path, source_suffix: &str) -> Result<Vec<Package>, AnalyzerError> {
    let mut packages = BTreeSet::new();

    for entry in WalkDir::new(root) {
        let entry = entry?;
        if is_dir(&entry) {
            continue;
        }
        if !has_suffix(entry.file_name(), source_suffix) {
            continue;
        }
        if let Some(dir) = entry.path().parent() {
            packages.insert(Package::new(dir));
        }
    }

    debug!("Found {} package(s) under {}", packages.len(), root.display());
    Ok(packages.into_iter().collect())
}

fn is_dir(entry: &walkdir::DirEntry) -> bool {
    entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir())
}

pub(crate) fn has_suffix(name: &OsStr, suffix: &str) -> bool {
    name.as_encoded_bytes().ends_with(suffix.as_bytes())
}

/// Compiled exclude patterns for package directories.
#[derive(Debug, Default)]
pub struct ExcludeSet {
    patterns: Vec<glob::Pattern>,
}

impl ExcludeSet {
    /// Compiles the given glob patterns.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::Glob`] for an invalid pattern.
    pub fn new<I, S>(patterns: I) -> Result<Self, AnalyzerError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| glob::Pattern::new(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Returns true if the package matches any pattern.
    #[must_use]
    pub fn matches(&self, package: &Package) -> bool {
        self.patterns.iter().any(|p| p.matches(package.name()))
    }

    /// Removes excluded packages, keeping order.
    #[must_use]
    pub fn filter(&self, packages: Vec<Package>) -> Vec<Package> {
        if self.patterns.is_empty() {
            return packages;
        }
        packages
            .into_iter()
            .filter(|p| {
                let excluded = self.matches(p);
                if excluded {
                    debug!("Excluding: {}", p);
                }
                !excluded
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "package x\n").unwrap();
    }

    fn names(root: &Path, packages: &[Package]) -> Vec<String> {
        packages
            .iter()
            .map(|p| {
                p.dir()
                    .strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect()
    }

    #[test]
    fn test_finds_root_and_nested_packages() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "main.go");
        touch(tmp.path(), "api/client.go");
        touch(tmp.path(), "api/client_test.go");
        touch(tmp.path(), "api/internal/helper.go");

        let packages = find_packages(tmp.path(), ".go").unwrap();
        assert_eq!(
            names(tmp.path(), &packages),
            vec!["", "api", "api/internal"]
        );
    }

    #[test]
    fn test_skips_directories_without_source_files() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "docs/README.md");
        touch(tmp.path(), "scripts/build.sh");
        touch(tmp.path(), "docs/nested/pkg/a.go");

        let packages = find_packages(tmp.path(), ".go").unwrap();
        assert_eq!(names(tmp.path(), &packages), vec!["docs/nested/pkg"]);
    }

    #[test]
    fn test_sorted_and_unique() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "zeta/a.go");
        touch(tmp.path(), "zeta/b.go");
        touch(tmp.path(), "alpha/a.go");
        touch(tmp.path(), "alpha-beta/a.go");
        touch(tmp.path(), "alpha/x/a.go");

        let packages = find_packages(tmp.path(), ".go").unwrap();
        let mut expected = packages.clone();
        expected.sort();
        expected.dedup();
        assert_eq!(packages, expected);
        assert_eq!(packages.len(), 4);
    }

    #[test]
    fn test_directory_named_like_source_is_not_a_file() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("weird.go")).unwrap();

        let packages = find_packages(tmp.path(), ".go").unwrap();
        assert!(packages.is_empty());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_non_utf8_file_name_marks_package() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let tmp = TempDir::new().unwrap();
        let pkg = tmp.path().join("pkg");
        fs::create_dir(&pkg).unwrap();
        fs::write(pkg.join(OsStr::from_bytes(b"caf\xe9.go")), "package pkg\n").unwrap();

        let packages = find_packages(tmp.path(), ".go").unwrap();
        assert_eq!(names(tmp.path(), &packages), vec!["pkg"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directory_named_like_source_is_not_a_file() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "real/README.md");
        std::os::unix::fs::symlink(tmp.path().join("real"), tmp.path().join("link.go")).unwrap();

        let packages = find_packages(tmp.path(), ".go").unwrap();
        assert!(packages.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_source_file_marks_package() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "shared/a.txt");
        fs::create_dir(tmp.path().join("pkg")).unwrap();
        std::os::unix::fs::symlink(tmp.path().join("shared/a.txt"), tmp.path().join("pkg/a.go"))
            .unwrap();

        let packages = find_packages(tmp.path(), ".go").unwrap();
        assert_eq!(names(tmp.path(), &packages), vec!["pkg"]);
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let result = find_packages(&tmp.path().join("nope"), ".go");
        assert!(matches!(result, Err(AnalyzerError::Walk(_))));
    }

    #[test]
    fn test_exclude_set() {
        let excludes = ExcludeSet::new(["**/vendor/**", "**/vendor"]).unwrap();
        let packages = vec![
            Package::new("./api"),
            Package::new("./vendor"),
            Package::new("./vendor/github.com/x"),
        ];
        let kept = excludes.filter(packages);
        assert_eq!(kept, vec![Package::new("./api")]);
    }

    #[test]
    fn test_invalid_exclude_pattern() {
        assert!(matches!(
            ExcludeSet::new(["[unclosed"]),
            Err(AnalyzerError::Glob(_))
        ));
    }
}
