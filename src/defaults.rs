use crate::config::{
    ClampRange, DiscConfig, RoundingFn, RoundingSpec, RoundingStage, ScalingMode, ScoringItem,
    StyleConfig,
};
use crate::consts::CONFIG_VERSION;
use crate::scorer::types::Axis::{self, C, D, I, S};
use crate::scorer::types::{AxisValues, StylePair};

// (primary, secondary) per question, q = 1..=48, four statements per row.
// Mirrors data/disc_config.json.
#[rustfmt::skip]
const NATURAL_ITEMS: [(Axis, Axis); 48] = [
    (C, I), (D, C), (S, I), (I, C),
    (I, S), (C, I), (S, C), (D, I),
    (D, C), (C, S), (S, I), (I, S),
    (C, S), (S, I), (D, C), (I, D),
    (I, S), (S, D), (C, I), (D, S),
    (D, S), (I, C), (S, C), (C, I),
    (S, D), (D, I), (C, I), (I, D),
    (D, C), (I, S), (C, I), (S, C),
    (D, C), (I, C), (S, I), (C, S),
    (S, I), (D, C), (C, S), (I, C),
    (D, C), (C, S), (S, C), (I, D),
    (D, S), (C, D), (S, D), (I, S),
];

#[rustfmt::skip]
const RESPONSE_ITEMS: [(Axis, Axis); 48] = [
    (D, C), (I, C), (C, S), (S, C),
    (S, C), (C, D), (I, D), (D, I),
    (C, I), (D, C), (I, D), (S, C),
    (C, I), (S, I), (D, I), (I, S),
    (C, S), (S, C), (D, S), (I, D),
    (C, D), (S, D), (D, I), (I, D),
    (C, S), (D, C), (I, C), (S, D),
    (C, I), (D, S), (S, D), (I, S),
    (I, S), (S, D), (D, S), (C, I),
    (C, D), (I, S), (S, I), (D, S),
    (D, I), (I, S), (S, I), (C, S),
    (S, D), (C, S), (D, S), (I, S),
];

const NATURAL_DENOMINATORS: AxisValues = AxisValues {
    d: 6.0,
    i: 6.0,
    s: 7.0,
    c: 6.0,
};

const RESPONSE_DENOMINATORS: AxisValues = AxisValues {
    d: 6.0,
    i: 7.0,
    s: 6.0,
    c: 6.0,
};

/// The compiled-in configuration used when no external document resolves.
pub fn embedded_config() -> DiscConfig {
    DiscConfig {
        version: CONFIG_VERSION,
        styles: StylePair {
            natural: legacy_style(&NATURAL_ITEMS, NATURAL_DENOMINATORS),
            response: legacy_style(&RESPONSE_ITEMS, RESPONSE_DENOMINATORS),
        },
    }
}

fn legacy_style(table: &[(Axis, Axis); 48], denominators: AxisValues) -> StyleConfig {
    let items = table
        .iter()
        .enumerate()
        .map(|(idx, &(primary, secondary))| {
            // The sheet spells the default pair out on the first row only.
            let (weight_primary, weight_secondary) = if idx == 0 {
                (Some(1.0), Some(0.5))
            } else {
                (None, None)
            };
            ScoringItem {
                q: idx as u32 + 1,
                primary,
                secondary,
                weight_primary,
                weight_secondary,
            }
        })
        .collect();

    StyleConfig {
        axes: Axis::ALL.to_vec(),
        items,
        denominators,
        scaling: ScalingMode::PerAxisIndependent,
        rounding: RoundingSpec {
            function: RoundingFn::Round,
            decimals: 0,
            stage: RoundingStage::PostScale,
        },
        clamp: Some(ClampRange {
            min: 0.0,
            max: 100.0,
        }),
    }
}
