use crate::scorer::types::Axis;

/// Number of forced-choice picks in one answer sheet (24 blocks, most + least).
pub const ANSWER_COUNT: usize = 48;

/// Number of statement slots in a presence vector (24 blocks of 4 statements).
pub const STATEMENT_COUNT: usize = 96;

/// Statements per forced-choice block (letters A..D).
pub const STATEMENTS_PER_BLOCK: usize = 4;

/// Number of scoring items each style must define (q = 1..=48).
pub const ITEM_COUNT: usize = 48;

/// The only configuration document version understood by the loader.
pub const CONFIG_VERSION: u32 = 1;

/// Percentage at or above which an axis is eligible for the profile code.
pub const ELIGIBILITY_THRESHOLD: f64 = 50.0;

/// Tie-break priority, highest first.
pub const TIE_BREAK_PRIORITY: [Axis; 4] = [Axis::D, Axis::I, Axis::C, Axis::S];

/// Largest `rounding.decimals` a configuration may ask for.
pub const MAX_DECIMALS: u32 = 15;

/// Fixed factor applied to each denominator by `per_axis_independent` scaling.
pub const DENOMINATOR_FACTOR: f64 = 2.0;

/// Fractional distance from .5 treated as an exact tie by BANKERS rounding.
pub const BANKERS_TIE_EPSILON: f64 = 1e-12;

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "DISC_CONFIG_PATH";
