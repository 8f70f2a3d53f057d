use clap::{Args, Parser, Subcommand, ValueEnum};
use rc_core::init::TemplateFormat;
use rc_core::sink::DEFAULT_SCRATCH_DIR;
use rc_protocol::{OutputKind, ARCHIVE_FILE_NAME};
use std::path::PathBuf;

/// Command line arguments
#[derive(Parser)]
#[command(name = "repoconfig", version)]
#[command(about = "Build RepoSense configuration files from an intake document", long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v: info, -vv: debug). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a starter intake document
    Init(InitArgs),

    /// Build configuration files from an intake document
    Create(CreateArgs),

    /// Bundle existing configuration files into a zip archive
    Package(PackageArgs),
}

#[derive(Args)]
pub struct InitArgs {
    /// Directory to write the intake document to
    #[arg(short, long, default_value = ".")]
    pub target_dir: PathBuf,

    /// Overwrite an existing intake document
    #[arg(short, long)]
    pub force: bool,

    /// Only include the report and repository sections
    #[arg(long)]
    pub minimal: bool,

    /// Format of the intake document
    #[arg(long, value_enum, default_value_t = FormatArg::Toml)]
    pub format: FormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Toml,
    Yaml,
}

impl From<FormatArg> for TemplateFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Toml => TemplateFormat::Toml,
            FormatArg::Yaml => TemplateFormat::Yaml,
        }
    }
}

#[derive(Args)]
pub struct CreateArgs {
    /// Intake document (.toml, .yaml, .yml or .json)
    pub intake: PathBuf,

    /// Only build these kinds, e.g. `repo-config` or `config.json` (repeatable)
    #[arg(short, long = "kind")]
    pub kinds: Vec<OutputKind>,

    /// Directory the produced files are written to
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Scratch directory that receives a copy of every rendered file.
    /// Every file directly inside it is deleted when `create` starts
    #[arg(long, default_value = DEFAULT_SCRATCH_DIR)]
    pub scratch_dir: PathBuf,

    /// Do not keep scratch copies
    #[arg(long)]
    pub no_scratch: bool,

    /// Also bundle the produced files into a zip archive
    /// (default: <OUT_DIR>/configs.zip)
    #[arg(short, long, num_args = 0..=1, value_name = "PATH")]
    pub archive: Option<Option<PathBuf>>,

    /// Print the accepted records as JSON instead of writing files
    #[arg(long)]
    pub preview: bool,
}

impl CreateArgs {
    pub fn archive_path(&self) -> Option<PathBuf> {
        self.archive.as_ref().map(|path| {
            path.clone()
                .unwrap_or_else(|| self.out_dir.join(ARCHIVE_FILE_NAME))
        })
    }
}

#[derive(Args)]
pub struct PackageArgs {
    /// Files to bundle; each is stored under its file name
    pub files: Vec<PathBuf>,

    /// Archive to write
    #[arg(short, long, default_value = ARCHIVE_FILE_NAME)]
    pub output: PathBuf,
}
