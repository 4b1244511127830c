//! Recursive directory traversal.
//!
//! Directories are walked depth-first with contents yielded before their
//! parent (post-order). Entries whose name starts with `.` are excluded along
//! with everything below them; the root itself is exempt. Symlinks to
//! directories are not descended into.

use crate::config::IoErrorPolicy;
use crate::error::Result;
use crate::render::FormattedLine;
use crate::search::scanner::FileScanner;
use log::{debug, warn};
use std::ffi::OsStr;
use std::path::{Component, Path};
use walkdir::WalkDir;

/// Drives a [`FileScanner`] over every visible file below a root.
#[derive(Debug, Clone, Copy)]
pub struct TreeWalker<'m> {
    scanner: FileScanner<'m>,
    policy: IoErrorPolicy,
}

impl<'m> TreeWalker<'m> {
    pub fn new(scanner: FileScanner<'m>, policy: IoErrorPolicy) -> Self {
        Self { scanner, policy }
    }

    /// Scan every visible file under `root`, concatenating hits in walk order.
    ///
    /// Under [`IoErrorPolicy::FailFast`] the first file that cannot be scanned
    /// aborts the walk and nothing collected so far is returned. Directories
    /// that cannot be listed are skipped under either policy.
    pub fn walk(&self, root: &Path) -> Result<Vec<FormattedLine>> {
        let mut hits = Vec::new();
        let mut files = 0usize;

        let entries = WalkDir::new(root).follow_links(false).contents_first(true);
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("skipping unreadable directory entry: {err}");
                    continue;
                }
            };

            let path = entry.path();
            if is_hidden_below(root, path) || path.is_dir() {
                continue;
            }

            files += 1;
            match self.scanner.scan(path) {
                Ok(file_hits) => hits.extend(file_hits),
                Err(err) => match self.policy {
                    IoErrorPolicy::FailFast => return Err(err),
                    IoErrorPolicy::SkipUnreadable => {
                        warn!("skipping {}: {err}", path.display());
                    }
                },
            }
        }

        debug!(
            "walked {}: {files} file(s), {} matching line(s)",
            root.display(),
            hits.len()
        );
        Ok(hits)
    }
}

/// True if any path component below `root` is a dot-name.
fn is_hidden_below(root: &Path, path: &Path) -> bool {
    let Ok(relative) = path.strip_prefix(root) else {
        return false;
    };
    relative.components().any(|component| match component {
        Component::Normal(name) => is_hidden_name(name),
        _ => false,
    })
}

fn is_hidden_name(name: &OsStr) -> bool {
    name.as_encoded_bytes().first() == Some(&b'.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::LineFormatter;
    use crate::search::pattern::{MatchMode, PatternMatcher};
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, relative: &str, content: &[u8]) {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        fs::write(path, content).expect("write fixture");
    }

    fn walk(root: &Path, keyword: &str, policy: IoErrorPolicy) -> Result<Vec<FormattedLine>> {
        let matcher = PatternMatcher::new(keyword, MatchMode::Literal)?;
        let scanner = FileScanner::new(&matcher, LineFormatter::default());
        TreeWalker::new(scanner, policy).walk(root)
    }

    #[test]
    fn test_hidden_name_detection() {
        let root = Path::new("/root/dir");
        assert!(is_hidden_below(root, Path::new("/root/dir/.git/config")));
        assert!(is_hidden_below(root, Path::new("/root/dir/a/.env")));
        assert!(!is_hidden_below(root, Path::new("/root/dir/a/b.txt")));
        assert!(!is_hidden_below(Path::new("/root/.dir"), Path::new("/root/.dir/a.txt")));
    }

    #[test]
    fn test_collects_matches_from_nested_directories() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "top.txt", b"needle at top\n");
        write(temp.path(), "a/b/deep.txt", b"hay\nneedle deep\n");

        let hits = walk(temp.path(), "needle", IoErrorPolicy::FailFast).unwrap();
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().any(|h| h.as_str().contains("needle at top")));
        assert!(hits.iter().any(|h| h.as_str().contains("needle deep")));
    }

    #[test]
    fn test_hidden_files_and_directories_are_skipped() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), ".hidden/file.txt", b"needle\n");
        write(temp.path(), "visible/.secret", b"needle\n");
        write(temp.path(), "visible/file.txt", b"needle\n");

        let hits = walk(temp.path(), "needle", IoErrorPolicy::FailFast).unwrap();
        assert_eq!(hits.len(), 1);
        assert!(hits[0].as_str().contains("visible"));
        assert!(!hits[0].as_str().contains(".hidden"));
    }

    #[test]
    fn test_fail_fast_discards_partial_results() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "good.txt", b"needle\n");
        write(temp.path(), "bad.bin", b"needle\xff\n");

        let err = walk(temp.path(), "needle", IoErrorPolicy::FailFast).unwrap_err();
        assert!(err.is_io());
    }

    #[test]
    fn test_skip_unreadable_keeps_going() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "good.txt", b"needle\n");
        write(temp.path(), "bad.bin", b"needle\xff\n");

        let hits = walk(temp.path(), "needle", IoErrorPolicy::SkipUnreadable).unwrap();
        assert_eq!(hits.len(), 1);
        assert!(hits[0].as_str().contains("good.txt"));
    }

    #[test]
    fn test_unreadable_file_inside_hidden_directory_is_never_opened() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), ".cache/blob", b"\xff\xfe");
        write(temp.path(), "ok.txt", b"needle\n");

        let hits = walk(temp.path(), "needle", IoErrorPolicy::FailFast).unwrap();
        assert_eq!(hits.len(), 1);
    }
}
