#![allow(dead_code)]

use discforge::config::{
    ClampRange, DiscConfig, RoundingFn, RoundingSpec, RoundingStage, ScalingMode, ScoringItem,
    StyleConfig,
};
use discforge::scorer::{Answer, Axis, AxisValues, StylePair};

/// Sheet from a string of letters/digits, whitespace ignored.
pub fn sheet(s: &str) -> Vec<Answer> {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c.to_digit(10) {
            Some(n) => Answer::Ordinal(n as u8),
            None => Answer::Letter(c),
        })
        .collect()
}

/// `A,B,A,B,...` x 48.
pub fn alternating_sheet() -> Vec<Answer> {
    sheet(&"AB".repeat(24))
}

/// Builder for StyleConfig to keep synthetic configs short.
pub struct StyleBuilder {
    style: StyleConfig,
}

impl StyleBuilder {
    /// Item q has primary D and secondary I unless overridden.
    pub fn new() -> Self {
        let items = (1..=48)
            .map(|q| ScoringItem {
                q,
                primary: Axis::D,
                secondary: Axis::I,
                weight_primary: None,
                weight_secondary: None,
            })
            .collect();
        Self {
            style: StyleConfig {
                axes: Axis::ALL.to_vec(),
                items,
                denominators: AxisValues::new(6.0, 6.0, 6.0, 6.0),
                scaling: ScalingMode::PerAxisIndependent,
                rounding: RoundingSpec {
                    function: RoundingFn::Round,
                    decimals: 0,
                    stage: RoundingStage::PostScale,
                },
                clamp: None,
            },
        }
    }

    pub fn item(mut self, q: u32, primary: Axis, secondary: Axis) -> Self {
        let it = &mut self.style.items[(q - 1) as usize];
        it.primary = primary;
        it.secondary = secondary;
        self
    }

    pub fn weights(mut self, q: u32, wp: Option<f64>, ws: Option<f64>) -> Self {
        let it = &mut self.style.items[(q - 1) as usize];
        it.weight_primary = wp;
        it.weight_secondary = ws;
        self
    }

    pub fn denominators(mut self, d: f64, i: f64, s: f64, c: f64) -> Self {
        self.style.denominators = AxisValues::new(d, i, s, c);
        self
    }

    pub fn scaling(mut self, mode: ScalingMode) -> Self {
        self.style.scaling = mode;
        self
    }

    pub fn rounding(mut self, function: RoundingFn, decimals: u32, stage: RoundingStage) -> Self {
        self.style.rounding = RoundingSpec {
            function,
            decimals,
            stage,
        };
        self
    }

    pub fn clamp(mut self, min: f64, max: f64) -> Self {
        self.style.clamp = Some(ClampRange { min, max });
        self
    }

    pub fn build(self) -> StyleConfig {
        self.style
    }
}

pub fn config_with(natural: StyleConfig, response: StyleConfig) -> DiscConfig {
    DiscConfig {
        version: 1,
        styles: StylePair { natural, response },
    }
}
