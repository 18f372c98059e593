//! A scratch working directory for tests that resolve relative paths.
//!
//! The working directory is process-global, so every [`Workdir`] holds a
//! global mutex until dropped. Tests using it should also be marked
//! `#[serial]` when other tests in the binary read the working directory.
//!
//! # Examples
//!
//! ```no_run
//! use confill_test_helpers::workdir::Workdir;
//!
//! let dir = Workdir::new().expect("create workdir");
//! dir.write("app.yml", "port: 8080\n").expect("write config");
//! // Relative paths now resolve inside the scratch directory.
//! ```

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::{Context, Result};
use parking_lot::{Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_MUTEX: LazyLock<Mutex<()>> = LazyLock::new(Mutex::default);

/// RAII guard owning a temporary directory that is also the working
/// directory.
///
/// Dropping the guard restores the previous working directory and removes the
/// temporary one.
#[must_use = "dropping restores the prior working directory"]
pub struct Workdir {
    original: PathBuf,
    dir: TempDir,
    _lock: MutexGuard<'static, ()>,
}

impl Workdir {
    /// Creates a temporary directory and makes it the working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or entered, or if
    /// the current directory cannot be read.
    pub fn new() -> Result<Self> {
        let lock = CWD_MUTEX.lock();
        let original = std::env::current_dir().context("read current dir")?;
        let dir = tempfile::tempdir().context("create temp dir")?;
        std::env::set_current_dir(dir.path()).context("enter temp dir")?;
        Ok(Self {
            original,
            dir,
            _lock: lock,
        })
    }

    /// Absolute path of the scratch directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `contents` to `name` inside the scratch directory and returns
    /// the absolute path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
        std::fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }

    /// Explicitly restores the original working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if `set_current_dir` fails.
    pub fn restore(&self) -> std::io::Result<()> {
        std::env::set_current_dir(&self.original)
    }
}

impl Drop for Workdir {
    fn drop(&mut self) {
        // Best effort; call `restore()` to observe failures.
        let _unused = std::env::set_current_dir(&self.original);
    }
}
