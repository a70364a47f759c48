use super::normalizer::PresenceVector;
use super::types::DiscScores;
use crate::config::{ScoringItem, StyleConfig};

/// Raw weighted points for one style.
///
/// Every item whose slot (`q - 1`) is set adds its primary weight to the
/// primary axis and its secondary weight to the secondary axis. Items are
/// visited in ascending `q` so float sums do not depend on document order.
pub fn tally(presence: &PresenceVector, style: &StyleConfig) -> DiscScores {
    let (default_primary, default_secondary) = style.default_weights();

    let mut ordered: Vec<&ScoringItem> = style.items.iter().collect();
    ordered.sort_by_key(|item| item.q);

    let mut raw = DiscScores::default();
    for item in ordered {
        let Some(slot) = (item.q as usize).checked_sub(1) else {
            continue;
        };
        if !presence.slot(slot) {
            continue;
        }
        *raw.get_mut(item.primary) += item.weight_primary.unwrap_or(default_primary);
        *raw.get_mut(item.secondary) += item.weight_secondary.unwrap_or(default_secondary);
    }
    raw
}
