//! `repoconfig create`: intake document in, configuration files out.

use crate::args::CreateArgs;
use crate::commands::print_archive_warnings;
use color_eyre::eyre::{bail, WrapErr};
use colored::Colorize;
use rc_core::archive::ArchiveWriter;
use rc_core::create::{create_from_intake, preview_from_intake, CreateError};
use rc_core::intake::load_intake;
use rc_core::session::Session;
use rc_core::sink::{ArtifactSink, ScratchDir};
use rc_protocol::{IntakeDocument, OutputKind, Production};
use serde_json::{Map, Value};
use std::fs;
use tracing::{info, warn};

/// Kinds to build: the requested ones, or every kind the document has a section for.
fn selected_kinds(args: &CreateArgs, doc: &IntakeDocument) -> Vec<OutputKind> {
    if args.kinds.is_empty() {
        return doc.kinds();
    }

    let mut kinds = args.kinds.clone();
    kinds.sort_unstable();
    kinds.dedup();
    for kind in &kinds {
        if !doc.has(*kind) {
            warn!(kind = kind.slug(), "Intake document has no section for requested kind");
            eprintln!(
                "{} {} has no section in {}; skipped",
                "warning:".yellow().bold(),
                kind,
                args.intake.display()
            );
        }
    }
    kinds
}

fn describe(production: Production) -> &'static str {
    match production {
        Production::Created => "created",
        Production::Replaced => "replaced",
        Production::Unchanged => "unchanged",
        Production::Reused => "reused",
    }
}

fn scratch_sink(args: &CreateArgs) -> Option<ScratchDir> {
    if args.no_scratch {
        return None;
    }

    match ScratchDir::prepare(&args.scratch_dir) {
        Ok(scratch) => Some(scratch),
        Err(e) => {
            warn!(dir = %args.scratch_dir.display(), error = %e, "Scratch directory unavailable");
            None
        }
    }
}

fn print_preview(args: &CreateArgs, doc: &IntakeDocument) -> color_eyre::Result<()> {
    let mut preview = Map::new();
    let mut failed = 0;

    for kind in selected_kinds(args, doc) {
        match preview_from_intake(doc, kind) {
            Ok(Some(records)) => {
                preview.insert(kind.file_name().to_string(), records);
            }
            Ok(None) => {}
            Err(e) => {
                eprintln!("{} {kind}: {e}", "✗".red());
                failed += 1;
            }
        }
    }

    println!("{}", serde_json::to_string_pretty(&Value::Object(preview))?);

    if failed > 0 {
        bail!("{failed} configuration file(s) failed validation");
    }
    Ok(())
}

pub async fn run(args: CreateArgs) -> color_eyre::Result<()> {
    let doc = load_intake(&args.intake).await?;

    if args.preview {
        return print_preview(&args, &doc);
    }

    let scratch = scratch_sink(&args);
    let sink = scratch.as_ref().map(|s| s as &dyn ArtifactSink);
    let mut session = Session::new();
    let mut failed = 0;

    for kind in selected_kinds(&args, &doc) {
        match create_from_intake(&mut session, &doc, kind, sink) {
            Ok(Some(production)) => {
                println!("{} {kind} ({})", "✓".green(), describe(production));
            }
            Ok(None) => {}
            Err(CreateError::Validation(e)) => {
                eprintln!("{} {kind}: {e}", "✗".red());
                failed += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }

    if !session.is_empty() {
        fs::create_dir_all(&args.out_dir)
            .wrap_err_with(|| format!("Failed to create {}", args.out_dir.display()))?;
    }
    for file in session.files() {
        let path = args.out_dir.join(file.file_name());
        fs::write(&path, &file.bytes)
            .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
        info!(path = %path.display(), "Wrote configuration file");
    }

    if let Some(path) = args.archive_path() {
        let archive = ArchiveWriter::new().write_to_path(session.entries(), &path)?;
        print_archive_warnings(&archive);
        println!(
            "{} Packed {} file(s) into {}",
            "✓".green(),
            archive.entry_names.len(),
            path.display()
        );
    }

    session.clear();

    if failed > 0 {
        bail!("{failed} configuration file(s) failed validation");
    }
    Ok(())
}
