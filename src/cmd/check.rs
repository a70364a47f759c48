use crate::reports;
use clap::Args;
use discforge::config::DiscConfig;
use discforge::{DfResult, DiscForgeError};
use std::fs;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Configuration document to validate
    pub path: PathBuf,
}

/// No fallback here: every read, parse or shape problem is reported.
pub fn run(args: CheckArgs) -> DfResult<()> {
    let content = fs::read_to_string(&args.path)?;
    let config: DiscConfig = serde_json::from_str(&content)?;

    let problems = config.validation_errors();
    if !problems.is_empty() {
        for p in &problems {
            println!("✗ {}", p);
        }
        return Err(DiscForgeError::Config(format!(
            "{} problem(s) in {}",
            problems.len(),
            args.path.display()
        )));
    }

    println!("✓ {} is valid", args.path.display());
    reports::print_config_summary(&config);
    Ok(())
}
