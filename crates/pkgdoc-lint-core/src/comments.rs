//! Locating source files that carry a package comment.

use crate::config::LayoutConfig;
use crate::finder::has_suffix;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Returns the names of non-test source files in `dir` whose line right
/// above the package declaration is a comment.
///
/// Names are returned in directory listing order. A name that is not valid
/// UTF-8 is reported with replacement characters.
///
/// # Errors
///
/// Returns an error if the directory or one of its source files cannot be
/// read.
pub fn comment_files(dir: &Path, layout: &LayoutConfig) -> io::Result<Vec<String>> {
    let mut files = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let file_type = entry.file_type()?;
        if file_type.is_dir() || (file_type.is_symlink() && path.is_dir()) {
            continue;
        }
        let name = entry.file_name();
        if !has_suffix(&name, &layout.source_suffix) || has_suffix(&name, &layout.test_suffix) {
            continue;
        }
        if has_package_comment(&path, layout)? {
            files.push(name.to_string_lossy().into_owned());
        }
    }

    Ok(files)
}

fn has_package_comment(path: &Path, layout: &LayoutConfig) -> io::Result<bool> {
    let reader = BufReader::new(File::open(path)?);
    let mut last = None;

    for line in reader.lines() {
        let line = line?;
        if line.starts_with(&layout.package_keyword) {
            break;
        }
        last = Some(line);
    }

    Ok(last.is_some_and(|line| line.starts_with(&layout.comment_prefix)))
}
