//! In-memory port implementations shared by unit tests.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::context::ServiceContext;
use crate::ports::{FileSystem, GitRepo, IgnoreStatus};

/// In-memory filesystem that counts mutating calls.
///
/// Clones share the same files, so a test can keep a handle after boxing
/// one into a `ServiceContext`.
#[derive(Clone, Default)]
pub struct MemFs {
    files: Arc<Mutex<HashMap<PathBuf, Vec<u8>>>>,
    writes: Arc<Mutex<usize>>,
    read_only: bool,
}

impl MemFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// A filesystem whose `write` and `remove_file` always fail.
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }

    pub fn insert(&self, path: impl Into<PathBuf>, contents: &str) {
        self.insert_bytes(path, contents.as_bytes().to_vec());
    }

    pub fn insert_bytes(&self, path: impl Into<PathBuf>, contents: Vec<u8>) {
        self.files.lock().unwrap().insert(path.into(), contents);
    }

    pub fn remove(&self, path: impl AsRef<Path>) {
        self.files.lock().unwrap().remove(path.as_ref());
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<String> {
        let files = self.files.lock().unwrap();
        files
            .get(path.as_ref())
            .map(|b| String::from_utf8(b.clone()).unwrap())
    }

    /// Number of successful `write` and `remove_file` calls.
    pub fn mutations(&self) -> usize {
        *self.writes.lock().unwrap()
    }
}

impl FileSystem for MemFs {
    fn read(&self, path: &Path) -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>> {
        let files = self.files.lock().unwrap();
        files
            .get(path)
            .cloned()
            .ok_or_else(|| format!("File not found: {}", path.display()).into())
    }

    fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        Ok(String::from_utf8(self.read(path)?)?)
    }

    fn write(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if self.read_only {
            return Err("read-only filesystem".into());
        }
        self.insert(path, contents);
        *self.writes.lock().unwrap() += 1;
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if self.read_only {
            return Err("read-only filesystem".into());
        }
        let removed = self.files.lock().unwrap().remove(path);
        if removed.is_none() {
            return Err(format!("File not found: {}", path.display()).into());
        }
        *self.writes.lock().unwrap() += 1;
        Ok(())
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }
}

/// Git double returning a fixed answer, or an error when `None`.
pub struct FakeGit(pub Option<IgnoreStatus>);

impl GitRepo for FakeGit {
    fn check_ignore(
        &self,
        _root: &Path,
        _relative_path: &str,
    ) -> Result<IgnoreStatus, Box<dyn std::error::Error + Send + Sync>> {
        self.0
            .ok_or_else(|| "failed to run git check-ignore: not installed".into())
    }
}

/// Builds a context from test doubles.
pub fn context(fs: MemFs, git: FakeGit) -> ServiceContext {
    ServiceContext {
        fs: Box::new(fs),
        git: Box::new(git),
    }
}
