//! Application orchestration layer
//!
//! Wires a validated [`SearchRequest`] to the matcher, scanner and walker and
//! produces the final output. A file root is scanned directly; anything else
//! is walked as a directory tree.

use crate::config::SearchConfig;
use crate::error::Result;
use crate::render::{finalize_output, FormattedLine, LineFormatter};
use crate::search::{FileScanner, PatternMatcher, SearchRequest, TreeWalker};
use log::debug;

/// One search, ready to run.
#[derive(Debug)]
pub struct Application {
    request: SearchRequest,
    config: SearchConfig,
    matcher: PatternMatcher,
}

impl Application {
    /// Compile the request's keyword under its mode.
    pub fn new(request: SearchRequest, config: SearchConfig) -> Result<Self> {
        let matcher =
            PatternMatcher::with_wildcard(request.keyword(), request.mode(), config.wildcard)?;
        Ok(Self {
            request,
            config,
            matcher,
        })
    }

    pub fn request(&self) -> &SearchRequest {
        &self.request
    }

    /// Every formatted hit, in file order and then walk order.
    ///
    /// Nothing is returned unless the whole search succeeds (subject to the
    /// configured IO error policy).
    pub fn records(&self) -> Result<Vec<FormattedLine>> {
        let root = self.request.root_path();
        let scanner = FileScanner::new(&self.matcher, LineFormatter::new(self.config.widths));

        debug!(
            "searching {} for {:?} ({:?})",
            root.display(),
            self.request.keyword(),
            self.request.mode()
        );

        if root.is_file() {
            scanner.scan(root)
        } else {
            TreeWalker::new(scanner, self.config.io_error_policy).walk(root)
        }
    }

    /// Run the search and return the outer-trimmed display text.
    pub fn run(&self) -> Result<String> {
        Ok(finalize_output(&self.records()?))
    }
}
