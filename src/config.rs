use crate::consts::{CONFIG_VERSION, ITEM_COUNT, MAX_DECIMALS};
use crate::error::{DfResult, DiscForgeError};
use crate::scorer::types::{Axis, AxisValues, Style, StylePair};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum::IntoEnumIterator;
use strum_macros::Display;

/// Full scoring configuration: one `StyleConfig` per style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscConfig {
    pub version: u32,
    pub styles: StylePair<StyleConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    pub axes: Vec<Axis>,
    pub items: Vec<ScoringItem>,
    pub denominators: AxisValues,
    pub scaling: ScalingMode,
    pub rounding: RoundingSpec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clamp: Option<ClampRange>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringItem {
    /// 1-based question index; reads presence slot `q - 1`.
    pub q: u32,
    pub primary: Axis,
    pub secondary: Axis,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_primary: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_secondary: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum ScalingMode {
    #[serde(rename = "per_axis_independent")]
    #[strum(serialize = "per_axis_independent")]
    PerAxisIndependent,
    #[serde(rename = "normalize_to_100")]
    #[strum(serialize = "normalize_to_100")]
    NormalizeTo100,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum RoundingFn {
    /// Half away from zero.
    Round,
    /// Away from zero.
    RoundUp,
    /// Toward zero.
    RoundDown,
    /// Half to even.
    Bankers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RoundingStage {
    /// Round before clamping.
    PreDisplay,
    /// Round after clamping.
    PostScale,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundingSpec {
    #[serde(rename = "fn")]
    pub function: RoundingFn,
    pub decimals: u32,
    pub stage: RoundingStage,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClampRange {
    pub min: f64,
    pub max: f64,
}

impl Default for DiscConfig {
    fn default() -> Self {
        crate::defaults::embedded_config()
    }
}

impl DiscConfig {
    /// Strict load: read, parse and validate, surfacing every failure.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> DfResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> DfResult<Self> {
        let config: DiscConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DfResult<()> {
        let problems = self.validation_errors();
        if problems.is_empty() {
            Ok(())
        } else {
            Err(DiscForgeError::Config(problems.join("; ")))
        }
    }

    /// Every shape problem in the document, in a stable order.
    pub fn validation_errors(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.version != CONFIG_VERSION {
            problems.push(format!(
                "unsupported version {} (expected {})",
                self.version, CONFIG_VERSION
            ));
        }
        for style in Style::iter() {
            problems.extend(
                self.styles
                    .get(style)
                    .validation_errors()
                    .into_iter()
                    .map(|p| format!("styles.{}: {}", style, p)),
            );
        }
        problems
    }
}

impl StyleConfig {
    /// Style-wide default weights.
    ///
    /// These are read from the first configured item, falling back to 1.0 and
    /// 0.5. The legacy sheet has no top-level default field, so an override on
    /// item 0 silently becomes the default for every other item.
    pub fn default_weights(&self) -> (f64, f64) {
        let first = self.items.first();
        (
            first.and_then(|it| it.weight_primary).unwrap_or(1.0),
            first.and_then(|it| it.weight_secondary).unwrap_or(0.5),
        )
    }

    pub fn validation_errors(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.axes != Axis::ALL {
            problems.push(format!("axes must be [D, I, S, C], got {:?}", self.axes));
        }

        if self.items.len() != ITEM_COUNT {
            problems.push(format!(
                "expected {} items, got {}",
                ITEM_COUNT,
                self.items.len()
            ));
        }

        let mut seen = [false; ITEM_COUNT];
        for item in &self.items {
            let q = item.q as usize;
            if !(1..=ITEM_COUNT).contains(&q) {
                problems.push(format!("item q={} is outside 1..={}", item.q, ITEM_COUNT));
                continue;
            }
            if seen[q - 1] {
                problems.push(format!("duplicate item q={}", item.q));
            }
            seen[q - 1] = true;

            if item.primary == item.secondary {
                problems.push(format!(
                    "item q={} has identical primary and secondary axis {}",
                    item.q, item.primary
                ));
            }
            for w in [item.weight_primary, item.weight_secondary].into_iter().flatten() {
                if !w.is_finite() {
                    problems.push(format!("item q={} has a non-finite weight", item.q));
                }
            }
        }
        let missing: Vec<String> = seen
            .iter()
            .enumerate()
            .filter(|(_, present)| !**present)
            .map(|(idx, _)| (idx + 1).to_string())
            .collect();
        if !missing.is_empty() {
            problems.push(format!("missing items q={}", missing.join(",")));
        }

        for (axis, denom) in self.denominators.iter() {
            if !denom.is_finite() || denom <= 0.0 {
                problems.push(format!("denominator for {} must be > 0, got {}", axis, denom));
            }
        }

        if self.rounding.decimals > MAX_DECIMALS {
            problems.push(format!(
                "rounding decimals {} exceeds {}",
                self.rounding.decimals, MAX_DECIMALS
            ));
        }

        if let Some(clamp) = &self.clamp {
            if clamp.min.is_nan() || clamp.max.is_nan() || clamp.min > clamp.max {
                problems.push(format!(
                    "clamp min {} exceeds max {}",
                    clamp.min, clamp.max
                ));
            }
        }

        problems
    }
}
