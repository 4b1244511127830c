use crate::search::pattern::MatchMode;
use std::path::{Path, PathBuf};

/// A validated search: where to look, what for, and how to compare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    root_path: PathBuf,
    keyword: String,
    mode: MatchMode,
}

impl SearchRequest {
    pub fn new(root_path: impl Into<PathBuf>, keyword: impl Into<String>, mode: MatchMode) -> Self {
        Self {
            root_path: root_path.into(),
            keyword: keyword.into(),
            mode,
        }
    }

    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }
}
