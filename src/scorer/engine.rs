use super::classifier::classify;
use super::normalizer::{PresenceVector, PresenceVectors};
use super::rounding::finalize;
use super::scaling::scale;
use super::tally::tally;
use super::types::{DiscPercentages, DiscResult, DiscScores, StylePair};
use crate::config::{DiscConfig, StyleConfig};
use tracing::debug;

/// Tally -> scale -> round/clamp for a single style.
pub fn score_style(presence: &PresenceVector, style: &StyleConfig) -> (DiscScores, DiscPercentages) {
    let points = tally(presence, style);
    let scaled = scale(&points, style);
    let finalized = finalize(&scaled, style);
    (points, finalized)
}

/// Both styles plus the profile code.
pub fn score_presence(config: &DiscConfig, presence: &PresenceVectors) -> DiscResult {
    let (natural_points, natural_pct) = score_style(&presence.natural, &config.styles.natural);
    let (response_points, response_pct) =
        score_style(&presence.response, &config.styles.response);

    let profile_code = classify(&natural_pct);

    debug!(
        "natural={:?} response={:?} code={}",
        natural_pct, response_pct, profile_code
    );

    DiscResult {
        scores: StylePair {
            natural: natural_points,
            response: response_points,
        },
        percentages: StylePair {
            natural: natural_pct,
            response: response_pct,
        },
        profile_code,
    }
}
