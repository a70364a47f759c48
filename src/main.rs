use clap::{Parser, Subcommand};
use discforge::scorer::{ConfigLoader, ScoringEngine};
use std::path::PathBuf;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Behavioral-style (DISC) scoring engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Scoring configuration; falls back to $DISC_CONFIG_PATH, data/, then the embedded default
    #[arg(global = true, long)]
    config: Option<PathBuf>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a single 48-answer sheet
    Score(cmd::score::ScoreArgs),
    /// Score a CSV file of answer sheets
    Batch(cmd::batch::BatchArgs),
    /// Strictly load and validate a configuration file
    CheckConfig(cmd::check::CheckArgs),
    /// Search random sheets for an example of every profile code
    Profiles(cmd::profiles::ProfilesArgs),
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let outcome = match cli.command {
        Commands::CheckConfig(args) => cmd::check::run(args),
        Commands::Score(args) => cmd::score::run(args, &load_engine(cli.config)),
        Commands::Batch(args) => cmd::batch::run(args, &load_engine(cli.config)),
        Commands::Profiles(args) => cmd::profiles::run(args, &load_engine(cli.config)),
    };

    if let Err(e) = outcome {
        error!("❌ {}", e);
        process::exit(1);
    }
}

fn load_engine(explicit: Option<PathBuf>) -> ScoringEngine {
    info!("🚀 Initializing DiscForge...");
    ScoringEngine::from_loader(&ConfigLoader::standard(explicit))
}
