mod commands;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "smellguard")]
#[command(about = "Code smell detection over pre-parsed source contexts")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Examine context dumps for code smells
    Analyze {
        /// Path to a .json context dump or a directory containing them
        path: PathBuf,

        /// Output format (default: from config, else text)
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Run only these smell types (comma-separated)
        #[arg(short, long, value_delimiter = ',')]
        smell_types: Option<Vec<String>>,

        /// Path to config file (default: .smellguard.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Suppress banner and summary
        #[arg(short, long)]
        quiet: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
    /// List all available detectors
    List,
    /// Generate a default .smellguard.toml config file
    Init {
        /// Where to write the config file
        #[arg(default_value = ".smellguard.toml")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("SMELLGUARD_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            path,
            format,
            smell_types,
            config,
            quiet,
            no_color,
        } => commands::analyze::run(&path, format, smell_types, config, quiet, no_color),
        Commands::List => commands::list::run(),
        Commands::Init { path, force } => commands::init::run(&path, force).map(|_| ()),
    }
}
