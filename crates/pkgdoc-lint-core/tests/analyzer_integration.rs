//! Integration test: package discovery through rule evaluation via Analyzer.
//!
//! Builds a small Go-like tree in a temp dir and substitutes the
//! documentation command with canned output keyed by package directory.

use pkgdoc_lint_core::{
    Analyzer, AnalyzerError, DocFetcher, Package, PackageContext, PackageRule, Violation,
};
use std::collections::HashMap;
use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct CannedDocs {
    docs: HashMap<PathBuf, String>,
}

impl DocFetcher for CannedDocs {
    fn fetch(&self, package: &Package) -> Result<String, AnalyzerError> {
        self.docs
            .get(package.dir())
            .cloned()
            .ok_or_else(|| AnalyzerError::DocCommand {
                package: package.name().to_string(),
                message: "exit status: 1".to_string(),
            })
    }
}

/// Reports every comment-bearing file, so tests can see what the locator found.
struct ListCommentFiles;

impl PackageRule for ListCommentFiles {
    fn name(&self) -> &'static str {
        "list-comment-files"
    }

    fn code(&self) -> &'static str {
        "TEST001"
    }

    fn check(&self, ctx: &PackageContext) -> Vec<Violation> {
        let mut files = ctx.comment_files.to_vec();
        files.sort();
        if files.is_empty() {
            return vec![];
        }
        vec![Violation::new(self.code(), self.name(), files.join(","))]
    }
}

struct Tree {
    tmp: TempDir,
    docs: HashMap<PathBuf, String>,
}

impl Tree {
    fn new() -> Self {
        Self {
            tmp: TempDir::new().expect("temp dir"),
            docs: HashMap::new(),
        }
    }

    fn root(&self) -> &Path {
        self.tmp.path()
    }

    fn file(self, rel: &str, content: &str) -> Self {
        let path = self.root().join(rel);
        fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
        fs::write(path, content).expect("write");
        self
    }

    fn doc(mut self, rel_dir: &str, output: &str) -> Self {
        let dir = if rel_dir.is_empty() {
            self.root().to_path_buf()
        } else {
            self.root().join(rel_dir)
        };
        self.docs.insert(dir, output.to_string());
        self
    }

    fn analyzer(&self, workers: usize) -> Analyzer {
        Analyzer::builder()
            .root(self.root())
            .rule(ListCommentFiles)
            .doc_fetcher(CannedDocs {
                docs: self.docs.clone(),
            })
            .parallelism(NonZeroUsize::new(workers).expect("non-zero"))
            .build()
            .expect("analyzer should build")
    }

    fn rel(&self, package: &Package) -> String {
        package
            .dir()
            .strip_prefix(self.root())
            .expect("under root")
            .to_string_lossy()
            .into_owned()
    }
}

#[test]
fn reports_follow_sorted_package_order() {
    let mut tree = Tree::new();
    for name in ["zeta", "alpha", "mid", "alpha/deep", "beta"] {
        tree = tree
            .file(&format!("{name}/doc.go"), "// Package x.\npackage x\n")
            .doc(name, "package x\n\nPackage x.");
    }

    let result = tree.analyzer(4).analyze().expect("analysis should succeed");

    let order: Vec<String> = result.reports.iter().map(|r| tree.rel(&r.package)).collect();
    assert_eq!(order, vec!["alpha", "alpha/deep", "beta", "mid", "zeta"]);
    assert!(result.reports.iter().all(|r| r.summary() == "doc.go"));
}

#[test]
fn locator_runs_only_for_commented_packages() {
    let tree = Tree::new()
        .file("a/doc.go", "// Package a.\npackage a\n")
        .file("a/extra.go", "// Extra.\npackage a\n")
        .file("a/extra_test.go", "// Test.\npackage a\n")
        .doc("a", "package a\n\nPackage a.\n\nfunc A()")
        .file("b/b.go", "// Stray.\npackage b\n")
        .doc("b", "package b // import \"example.com/b\"\n\nfunc B()");

    let result = tree.analyzer(2).analyze().expect("analysis should succeed");

    assert_eq!(result.packages_found(), 2);
    let failing: Vec<(String, String)> = result
        .failing()
        .map(|r| (tree.rel(&r.package), r.summary()))
        .collect();
    assert_eq!(failing, vec![("a".to_string(), "doc.go,extra.go".to_string())]);
}

#[test]
fn mocks_package_is_skipped() {
    let tree = Tree::new()
        .file("svc/svc.go", "package svc\n")
        .doc("svc", "package svc")
        .file("svc/mocks/svc_mock.go", "// Everything wrong.\npackage mocks\n");

    let result = tree.analyzer(1).analyze().expect("analysis should succeed");

    assert_eq!(result.packages_found(), 2);
    assert_eq!(result.packages_skipped(), 1);
    assert!(!result.has_violations());
}

#[test]
fn doc_command_failure_aborts_run() {
    let tree = Tree::new()
        .file("ok/ok.go", "package ok\n")
        .doc("ok", "package ok")
        .file("broken/broken.go", "package broken\n");

    let err = tree.analyzer(2).analyze().expect_err("analysis should fail");
    match err {
        AnalyzerError::DocCommand { package, .. } => assert!(package.ends_with("broken")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn excluded_packages_are_not_checked() {
    let tree = Tree::new()
        .file("app/app.go", "package app\n")
        .doc("app", "package app")
        .file("vendor/lib/lib.go", "package lib\n");

    let analyzer = Analyzer::builder()
        .root(tree.root())
        .exclude("**/vendor/**")
        .doc_fetcher(CannedDocs {
            docs: tree.docs.clone(),
        })
        .build()
        .expect("analyzer should build");

    let result = analyzer.analyze().expect("vendor package should not be fetched");
    assert_eq!(result.packages_found(), 1);
}

#[test]
fn empty_tree_yields_empty_result() {
    let tree = Tree::new().file("README.md", "# nothing\n");

    let result = tree.analyzer(1).analyze().expect("analysis should succeed");
    assert_eq!(result.packages_found(), 0);
    assert!(!result.has_violations());
}
