//! Shared test utilities for conneqt crates.
//!
//! Provides environment-variable guards and a temp-dir fixture used by
//! tests that touch process-global state or the on-disk stores.

use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};

/// Lock shared by every test that touches environment variables.
///
/// Env vars are process-global, so such tests must run one at a time. Hold
/// the returned guard for the test's full duration and pair it with
/// [`set_env_var`] so the variables are restored afterwards.
pub fn env_guard() -> MutexGuard<'static, ()> {
    static ENV_LOCK: LazyLock<Mutex<()>> = LazyLock::new(Mutex::default);
    ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Restores an environment variable to its prior state on drop.
pub struct EnvVarGuard {
    name: &'static str,
    saved: Option<std::ffi::OsString>,
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        match self.saved.take() {
            Some(value) => std::env::set_var(self.name, value),
            None => std::env::remove_var(self.name),
        }
    }
}

/// Set (or, with `None`, remove) an environment variable until the returned
/// guard drops, at which point the prior value comes back.
pub fn set_env_var(name: &'static str, value: Option<&str>) -> EnvVarGuard {
    let saved = std::env::var_os(name);
    match value {
        Some(v) => std::env::set_var(name, v),
        None => std::env::remove_var(name),
    }
    EnvVarGuard { name, saved }
}

/// Temp-dir fixture for tests that exercise the JSON-backed stores.
///
/// Creates an empty data directory under a tempdir; the tempdir (and
/// everything written into it) is removed when the fixture drops.
pub struct DataDirFixture {
    pub tempdir: tempfile::TempDir,
    /// Path to the data directory inside the tempdir.
    pub data_dir: PathBuf,
}

impl DataDirFixture {
    /// Create a fixture with a fresh `data/` directory.
    pub fn new() -> std::io::Result<Self> {
        let tempdir = tempfile::tempdir()?;
        let data_dir = tempdir.path().join("data");
        std::fs::create_dir_all(&data_dir)?;
        Ok(Self { tempdir, data_dir })
    }

    /// Path of a file inside the data directory.
    pub fn file(&self, name: &str) -> PathBuf {
        self.data_dir.join(name)
    }
}

impl Default for DataDirFixture {
    fn default() -> Self {
        Self::new().expect("failed to create data dir fixture")
    }
}

/// Assert that a file exists and is non-empty.
pub fn assert_file_nonempty(path: &Path) {
    let meta = std::fs::metadata(path)
        .unwrap_or_else(|e| panic!("expected file at {}: {e}", path.display()));
    assert!(meta.len() > 0, "expected non-empty file at {}", path.display());
}
