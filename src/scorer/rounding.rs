use super::types::DiscPercentages;
use crate::config::{RoundingFn, RoundingStage, StyleConfig};
use crate::consts::{BANKERS_TIE_EPSILON, MAX_DECIMALS};

/// Rounds `value` to `decimals` places (at most `MAX_DECIMALS`) with the sheet's named function.
pub fn round_with(function: RoundingFn, value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals.min(MAX_DECIMALS) as i32);
    let n = value * factor;
    let rounded = match function {
        RoundingFn::Round => n.round(),
        RoundingFn::RoundUp => {
            if n >= 0.0 {
                n.ceil()
            } else {
                n.floor()
            }
        }
        RoundingFn::RoundDown => n.trunc(),
        RoundingFn::Bankers => {
            let floor = n.floor();
            if (n - floor - 0.5).abs() < BANKERS_TIE_EPSILON {
                if floor % 2.0 == 0.0 {
                    floor
                } else {
                    floor + 1.0
                }
            } else {
                n.round()
            }
        }
    };
    rounded / factor
}

pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Per axis: optional pre-clamp rounding, optional clamp, optional post-clamp rounding.
pub fn finalize(percentages: &DiscPercentages, style: &StyleConfig) -> DiscPercentages {
    let spec = style.rounding;
    percentages.map_axes(|_, mut v| {
        if spec.stage == RoundingStage::PreDisplay {
            v = round_with(spec.function, v, spec.decimals);
        }
        if let Some(range) = style.clamp {
            v = clamp(v, range.min, range.max);
        }
        if spec.stage == RoundingStage::PostScale {
            v = round_with(spec.function, v, spec.decimals);
        }
        v
    })
}
