use crate::reports;
use clap::Args;
use discforge::batch::{read_sheets, score_sheets, write_outcomes};
use discforge::scorer::ScoringEngine;
use discforge::DfResult;
use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    /// CSV of answer sheets: 48 cells per row, optionally preceded by an id
    #[arg(short, long)]
    pub input: PathBuf,

    /// Write results as CSV instead of printing a table
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: BatchArgs, engine: &ScoringEngine) -> DfResult<()> {
    let start = Instant::now();
    let sheets = read_sheets(File::open(&args.input)?)?;
    let outcomes = score_sheets(engine, &sheets);

    let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
    info!(
        "⚡ Scored {} sheets in {:.2?} ({} rejected)",
        outcomes.len(),
        start.elapsed(),
        failed
    );
    if failed > 0 {
        warn!("⚠️  {} sheets could not be scored", failed);
    }

    match &args.output {
        Some(path) => {
            write_outcomes(File::create(path)?, &outcomes)?;
            info!("💾 Results written to {}", path.display());
        }
        None => reports::print_batch(&outcomes),
    }
    Ok(())
}
