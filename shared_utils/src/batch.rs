//! Batch Processing Module
//!
//! Bookkeeping for a batch run. Only candidate files are counted; fatal
//! errors abort the batch and are never recorded here.

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct BatchResult {
    pub total: usize,
    pub succeeded: usize,
    pub skipped: usize,
    /// Skipped files that deserve a visible notice, with the reason.
    pub notices: Vec<(PathBuf, String)>,
}

impl BatchResult {
    pub fn new() -> Self {
        Self {
            total: 0,
            succeeded: 0,
            skipped: 0,
            notices: Vec::new(),
        }
    }

    pub fn success(&mut self) {
        self.total += 1;
        self.succeeded += 1;
    }

    pub fn skip(&mut self) {
        self.total += 1;
        self.skipped += 1;
    }

    pub fn skip_with_notice(&mut self, path: PathBuf, reason: String) {
        self.skip();
        self.notices.push((path, reason));
    }

    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            (self.succeeded as f64 / self.total as f64) * 100.0
        }
    }
}

impl Default for BatchResult {
    fn default() -> Self {
        Self::new()
    }
}
