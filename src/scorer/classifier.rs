use super::types::{Axis, DiscPercentages};
use crate::consts::{ELIGIBILITY_THRESHOLD, TIE_BREAK_PRIORITY};
use std::cmp::Ordering;

fn priority(axis: Axis) -> usize {
    TIE_BREAK_PRIORITY
        .iter()
        .position(|&a| a == axis)
        .unwrap_or(TIE_BREAK_PRIORITY.len())
}

/// Axes by percentage descending, ties broken by D > I > C > S.
pub fn ranked_axes(natural: &DiscPercentages) -> [(Axis, f64); 4] {
    let mut entries = [
        (Axis::D, natural.d),
        (Axis::I, natural.i),
        (Axis::S, natural.s),
        (Axis::C, natural.c),
    ];
    entries.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| priority(a.0).cmp(&priority(b.0)))
    });
    entries
}

/// Profile code from the natural-style percentages.
///
/// Two or more axes at >= 50 give the top two of them; exactly one gives that
/// single letter; none gives the top two overall.
pub fn classify(natural: &DiscPercentages) -> String {
    let ranked = ranked_axes(natural);
    let eligible: Vec<Axis> = ranked
        .iter()
        .filter(|(_, pct)| *pct >= ELIGIBILITY_THRESHOLD)
        .map(|(axis, _)| *axis)
        .collect();

    let picked: Vec<Axis> = match eligible.len() {
        0 => ranked.iter().take(2).map(|(axis, _)| *axis).collect(),
        1 => eligible,
        _ => eligible.into_iter().take(2).collect(),
    };
    picked.into_iter().map(Axis::letter).collect()
}
