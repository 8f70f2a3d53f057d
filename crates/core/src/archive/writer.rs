//! Zip archive writer for produced configuration files.
//!
//! Entries are written verbatim under their names at the archive root.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::error::{ArchiveError, ArchiveResult};

/// Non-fatal conditions noticed while packaging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveWarning {
    /// Nothing was produced yet; the archive is valid but empty.
    EmptyOutput,
}

impl fmt::Display for ArchiveWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArchiveWarning::EmptyOutput => f.write_str("No config files created!"),
        }
    }
}

/// A finished archive held in memory.
#[derive(Debug, Clone)]
pub struct PackedArchive {
    pub bytes: Vec<u8>,

    /// Entry names in the order they were written.
    pub entry_names: Vec<String>,

    pub warnings: Vec<ArchiveWarning>,
}

impl PackedArchive {
    pub fn is_empty(&self) -> bool {
        self.entry_names.is_empty()
    }
}

/// Writer for configuration archives.
pub struct ArchiveWriter {
    compression: CompressionMethod,
}

impl Default for ArchiveWriter {
    fn default() -> Self {
        Self {
            compression: CompressionMethod::Stored,
        }
    }
}

impl ArchiveWriter {
    /// Create a writer that stores entries uncompressed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer that deflates entries.
    pub fn deflated() -> Self {
        Self {
            compression: CompressionMethod::Deflated,
        }
    }

    /// Write every entry into an in-memory zip archive.
    ///
    /// An empty input still yields a valid archive, with an
    /// [`ArchiveWarning::EmptyOutput`] warning. A repeated entry name fails the
    /// whole archive with [`ArchiveError::NameCollision`].
    pub fn write<'a, I>(&self, entries: I) -> ArchiveResult<PackedArchive>
    where
        I: IntoIterator<Item = (&'a str, &'a [u8])>,
    {
        let options = SimpleFileOptions::default().compression_method(self.compression);
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let mut seen = HashSet::new();
        let mut entry_names = Vec::new();

        for (name, data) in entries {
            if !seen.insert(name) {
                return Err(ArchiveError::NameCollision {
                    name: name.to_string(),
                });
            }

            zip.start_file(name, options)?;
            zip.write_all(data)?;
            debug!(name, bytes = data.len(), "Added archive entry");
            entry_names.push(name.to_string());
        }

        let bytes = zip.finish()?.into_inner();

        let mut warnings = Vec::new();
        if entry_names.is_empty() {
            warn!("Packaging an archive with no config files");
            warnings.push(ArchiveWarning::EmptyOutput);
        }

        Ok(PackedArchive {
            bytes,
            entry_names,
            warnings,
        })
    }

    /// Write the archive to `path`.
    ///
    /// The archive is written to a temporary sibling first and renamed into
    /// place, so a failed write leaves no partial file behind.
    pub fn write_to_path<'a, I>(&self, entries: I, path: &Path) -> ArchiveResult<PackedArchive>
    where
        I: IntoIterator<Item = (&'a str, &'a [u8])>,
    {
        let archive = self.write(entries)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let temp_path = path.with_extension("zip.tmp");
        let written = fs::write(&temp_path, &archive.bytes).and_then(|()| fs::rename(&temp_path, path));
        if let Err(source) = written {
            let _ = fs::remove_file(&temp_path);
            return Err(ArchiveError::FileWrite {
                path: PathBuf::from(path),
                source,
            });
        }

        Ok(archive)
    }
}

/// Pack entries with the default (stored) writer.
pub fn pack<'a, I>(entries: I) -> ArchiveResult<PackedArchive>
where
    I: IntoIterator<Item = (&'a str, &'a [u8])>,
{
    ArchiveWriter::new().write(entries)
}
