//! JSON known-answer vectors for the stream ciphers
//!
//! Vector files live in `src/vectors/stream/`, one per algorithm. Each file
//! groups test cases by test type; the dispatcher maps an
//! (algorithm, test type) pair to a handler.

pub mod error;
pub mod model;

use error::Result;
use model::VectorFile;

/// Outcome of running one vector file
#[derive(Debug, Default)]
pub struct Summary {
    pub passed: usize,
    /// (tcId, failure description)
    pub failed: Vec<(u64, String)>,
}

impl Summary {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Run every test case of `file`
///
/// A group with no registered handler is an error; individual case failures
/// are collected in the summary.
pub fn run_file(file: &VectorFile) -> Result<Summary> {
    let mut summary = Summary::default();

    for group in &file.test_groups {
        let handler = dispatcher::handler_for(&file.algorithm, &group.test_type)?;
        for tc in &group.tests {
            match handler(tc) {
                Ok(()) => summary.passed += 1,
                Err(e) => summary.failed.push((tc.test_id, e.to_string())),
            }
        }
    }

    Ok(summary)
}
