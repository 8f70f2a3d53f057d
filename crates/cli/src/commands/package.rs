use crate::args::PackageArgs;
use crate::commands::print_archive_warnings;
use color_eyre::eyre::{eyre, WrapErr};
use colored::Colorize;
use rc_core::archive::ArchiveWriter;
use std::fs;

pub fn run(args: PackageArgs) -> color_eyre::Result<()> {
    let mut entries = Vec::with_capacity(args.files.len());
    for path in &args.files {
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| eyre!("{} has no usable file name", path.display()))?
            .to_string();
        let bytes =
            fs::read(path).wrap_err_with(|| format!("Failed to read {}", path.display()))?;
        entries.push((name, bytes));
    }

    let archive = ArchiveWriter::new().write_to_path(
        entries
            .iter()
            .map(|(name, bytes)| (name.as_str(), bytes.as_slice())),
        &args.output,
    )?;

    print_archive_warnings(&archive);
    println!(
        "{} Packed {} file(s) into {}",
        "✓".green(),
        archive.entry_names.len(),
        args.output.display()
    );
    Ok(())
}
