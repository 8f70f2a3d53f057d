use crate::args::InitArgs;
use colored::Colorize;
use rc_core::init::{generate_intake_template, InitOptions};

pub async fn run(args: InitArgs) -> color_eyre::Result<()> {
    let options = InitOptions {
        target_dir: args.target_dir,
        force: args.force,
        minimal: args.minimal,
        format: args.format.into(),
    };

    let path = generate_intake_template(options).await?;

    println!("{} Wrote {}", "✓".green(), path.display());
    println!(
        "  Edit it, then run: {}",
        format!("repoconfig create {} --archive", path.display()).bold()
    );
    Ok(())
}
