//! Bundling produced configuration files into a single zip archive.

pub mod error;
pub mod writer;

pub use error::{ArchiveError, ArchiveResult};
pub use writer::{pack, ArchiveWarning, ArchiveWriter, PackedArchive};
