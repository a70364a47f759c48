use crate::reports;
use clap::Args;
use discforge::sampling::discover_profiles;
use discforge::scorer::ScoringEngine;
use discforge::DfResult;
use tracing::warn;

#[derive(Args, Debug, Clone)]
pub struct ProfilesArgs {
    #[arg(short = 'S', long, default_value_t = 42)]
    pub seed: u64,

    #[arg(short = 'n', long, default_value_t = 100_000)]
    pub max_iterations: usize,
}

pub fn run(args: ProfilesArgs, engine: &ScoringEngine) -> DfResult<()> {
    let search = discover_profiles(engine, args.seed, args.max_iterations);
    reports::print_profiles(&search);

    let missing = search.missing();
    if !missing.is_empty() {
        warn!(
            "⚠️  No example found for: {} (try a larger --max-iterations)",
            missing.join(", ")
        );
    }
    Ok(())
}
