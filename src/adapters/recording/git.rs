//! Recording adapter for the `GitRepo` port.

use std::path::Path;
use std::sync::{Arc, Mutex};

use serde::Serialize;

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::{GitRepo, IgnoreStatus};

/// Records git interactions while delegating to an inner implementation.
pub struct RecordingGitRepo {
    inner: Box<dyn GitRepo>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingGitRepo {
    /// Creates a new recording git repo wrapping the given implementation.
    pub fn new(inner: Box<dyn GitRepo>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct CheckIgnoreInput<'a> {
    root: String,
    relative_path: &'a str,
}

impl GitRepo for RecordingGitRepo {
    fn check_ignore(
        &self,
        root: &Path,
        relative_path: &str,
    ) -> Result<IgnoreStatus, Box<dyn std::error::Error + Send + Sync>> {
        let result = self.inner.check_ignore(root, relative_path);
        let input = CheckIgnoreInput {
            root: root.display().to_string(),
            relative_path,
        };
        record_result(&self.recorder, "git", "check_ignore", &input, &result);
        result
    }
}
