use crate::consts::ANSWER_COUNT;
use crate::scorer::{Answer, DiscResult, ScoringEngine};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Every code the classifier can name, singles first.
pub const ALL_PROFILE_CODES: [&str; 16] = [
    "D", "I", "S", "C", "DI", "DC", "DS", "ID", "IC", "IS", "SD", "SI", "SC", "CD", "CI", "CS",
];

const LETTERS: [char; 4] = ['A', 'B', 'C', 'D'];

/// A uniformly random sheet. Within a block the "least" pick never repeats the
/// "most" pick, as the quiz enforces.
pub fn random_sheet(rng: &mut fastrand::Rng) -> Vec<Answer> {
    let mut sheet = Vec::with_capacity(ANSWER_COUNT);
    for _ in 0..ANSWER_COUNT / 2 {
        let most = rng.usize(0..4);
        let least = (most + rng.usize(1..4)) % 4;
        sheet.push(Answer::Letter(LETTERS[most]));
        sheet.push(Answer::Letter(LETTERS[least]));
    }
    sheet
}

#[derive(Debug, Clone)]
pub struct ProfileExample {
    pub answers: Vec<Answer>,
    pub result: DiscResult,
}

#[derive(Debug, Clone, Default)]
pub struct ProfileSearch {
    pub iterations: usize,
    pub found: BTreeMap<String, ProfileExample>,
}

impl ProfileSearch {
    pub fn missing(&self) -> Vec<&'static str> {
        ALL_PROFILE_CODES
            .iter()
            .copied()
            .filter(|code| !self.found.contains_key(*code))
            .collect()
    }
}

/// Samples random sheets until every profile code has an example or
/// `max_iterations` sheets were scored. Same seed, same search.
pub fn discover_profiles(engine: &ScoringEngine, seed: u64, max_iterations: usize) -> ProfileSearch {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut search = ProfileSearch::default();

    while search.iterations < max_iterations && search.found.len() < ALL_PROFILE_CODES.len() {
        search.iterations += 1;
        let answers = random_sheet(&mut rng);
        // Letter sheets of the right length always normalize.
        let Ok(result) = engine.compute_disc(&answers) else {
            continue;
        };
        if !search.found.contains_key(&result.profile_code) {
            debug!(
                "Found profile {} after {} sheets",
                result.profile_code, search.iterations
            );
            search
                .found
                .insert(result.profile_code.clone(), ProfileExample { answers, result });
        }
    }

    info!(
        "Profile search: {}/{} codes in {} sheets",
        search.found.len(),
        ALL_PROFILE_CODES.len(),
        search.iterations
    );
    search
}
