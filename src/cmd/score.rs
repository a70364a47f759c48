use crate::reports;
use clap::Args;
use discforge::api;
use discforge::batch::parse_cells;
use discforge::scorer::ScoringEngine;
use discforge::DfResult;
use std::fs;
use std::io;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    /// Answers separated by commas or spaces, e.g. "A,B,A,B,..."
    #[arg(short, long, conflicts_with = "file")]
    pub answers: Option<String>,

    /// JSON payload: an array or {"answers": [...]}. Reads stdin when neither option is given.
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Print the result as JSON instead of tables
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: ScoreArgs, engine: &ScoringEngine) -> DfResult<()> {
    let result = if let Some(list) = &args.answers {
        let cells: Vec<String> = list
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        engine.compute_disc(&parse_cells(&cells)?)?
    } else {
        let payload = match &args.file {
            Some(path) => fs::read_to_string(path)?,
            None => io::read_to_string(io::stdin())?,
        };
        api::score_payload(engine, &payload)?
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        reports::print_result(&result);
    }
    Ok(())
}
