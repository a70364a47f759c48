use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// One of the four behavioral dimensions.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
pub enum Axis {
    D,
    I,
    S,
    C,
}

impl Axis {
    /// Canonical axis order used for iteration and reporting.
    pub const ALL: [Axis; 4] = [Axis::D, Axis::I, Axis::S, Axis::C];

    pub fn letter(self) -> char {
        match self {
            Axis::D => 'D',
            Axis::I => 'I',
            Axis::S => 'S',
            Axis::C => 'C',
        }
    }
}

/// The two parallel scoring tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Style {
    /// Fed by the "least like me" picks (odd answer positions).
    Natural,
    /// Fed by the "most like me" picks (even answer positions).
    Response,
}

/// A numeric value per axis.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisValues {
    #[serde(rename = "D")]
    pub d: f64,
    #[serde(rename = "I")]
    pub i: f64,
    #[serde(rename = "S")]
    pub s: f64,
    #[serde(rename = "C")]
    pub c: f64,
}

/// Raw weighted points per axis.
pub type DiscScores = AxisValues;

/// Scaled (and finalized) percentages per axis.
pub type DiscPercentages = AxisValues;

impl AxisValues {
    pub fn new(d: f64, i: f64, s: f64, c: f64) -> Self {
        Self { d, i, s, c }
    }

    #[inline]
    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::D => self.d,
            Axis::I => self.i,
            Axis::S => self.s,
            Axis::C => self.c,
        }
    }

    #[inline]
    pub fn get_mut(&mut self, axis: Axis) -> &mut f64 {
        match axis {
            Axis::D => &mut self.d,
            Axis::I => &mut self.i,
            Axis::S => &mut self.s,
            Axis::C => &mut self.c,
        }
    }

    /// D + I + S + C, summed in that order.
    pub fn sum(&self) -> f64 {
        self.d + self.i + self.s + self.c
    }

    pub fn iter(&self) -> impl Iterator<Item = (Axis, f64)> + '_ {
        Axis::ALL.into_iter().map(move |ax| (ax, self.get(ax)))
    }

    /// Applies `f` to every axis independently.
    pub fn map_axes<F: FnMut(Axis, f64) -> f64>(&self, mut f: F) -> Self {
        Self {
            d: f(Axis::D, self.d),
            i: f(Axis::I, self.i),
            s: f(Axis::S, self.s),
            c: f(Axis::C, self.c),
        }
    }
}

/// One value per style.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StylePair<T> {
    pub natural: T,
    pub response: T,
}

impl<T> StylePair<T> {
    pub fn get(&self, style: Style) -> &T {
        match style {
            Style::Natural => &self.natural,
            Style::Response => &self.response,
        }
    }
}

/// The engine's output for one answer sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscResult {
    pub scores: StylePair<DiscScores>,
    pub percentages: StylePair<DiscPercentages>,
    pub profile_code: String,
}
