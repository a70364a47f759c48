use super::types::{DiscPercentages, DiscScores};
use crate::config::{ScalingMode, StyleConfig};
use crate::consts::DENOMINATOR_FACTOR;

/// Raw points to 0..100 percentages (before rounding and clamping).
pub fn scale(points: &DiscScores, style: &StyleConfig) -> DiscPercentages {
    match style.scaling {
        ScalingMode::PerAxisIndependent => points.map_axes(|axis, value| {
            let denom = style.denominators.get(axis);
            if denom > 0.0 {
                value / (DENOMINATOR_FACTOR * denom) * 100.0
            } else {
                0.0
            }
        }),
        ScalingMode::NormalizeTo100 => {
            let sum = points.sum();
            points.map_axes(|_, value| if sum > 0.0 { value / sum * 100.0 } else { 0.0 })
        }
    }
}
