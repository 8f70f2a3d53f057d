//! Side copies of produced files.
//!
//! A sink receives every freshly rendered file. Sinks are best effort: the
//! session logs their failures and carries on.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

/// Default scratch directory, relative to the working directory.
pub const DEFAULT_SCRATCH_DIR: &str = "temp";

/// Receives a copy of every rendered file.
pub trait ArtifactSink {
    fn persist(&self, file_name: &str, bytes: &[u8]) -> io::Result<()>;
}

/// Writes each file to `<dir>/<file name>`, overwriting the previous copy.
#[derive(Debug, Clone)]
pub struct ScratchDir {
    dir: PathBuf,
}

impl ScratchDir {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Creates the directory if it is missing, otherwise deletes the files in it.
    ///
    /// Meant to run once at process start so stale copies from an earlier run
    /// never mix with the current session's files.
    pub fn prepare(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let scratch = Self::new(dir);

        if !scratch.dir.exists() {
            fs::create_dir_all(&scratch.dir)?;
            return Ok(scratch);
        }

        for entry in WalkDir::new(&scratch.dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(io::Error::from)?;
            if entry.file_type().is_file() {
                fs::remove_file(entry.path())?;
                debug!(path = %entry.path().display(), "Removed stale scratch file");
            }
        }

        Ok(scratch)
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }
}

impl ArtifactSink for ScratchDir {
    fn persist(&self, file_name: &str, bytes: &[u8]) -> io::Result<()> {
        fs::write(self.dir.join(file_name), bytes)
    }
}
