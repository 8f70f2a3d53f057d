//! Subcommand implementations.

pub mod create;
pub mod init;
pub mod package;

use colored::Colorize;
use rc_core::archive::PackedArchive;

/// Prints the non-fatal warnings of a packed archive.
pub(crate) fn print_archive_warnings(archive: &PackedArchive) {
    for warning in &archive.warnings {
        eprintln!("{} {warning}", "warning:".yellow().bold());
    }
}
