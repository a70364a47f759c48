mod common;

use common::StyleBuilder;
use discforge::config::{RoundingFn, RoundingStage};
use discforge::scorer::rounding::{clamp, finalize, round_with};
use discforge::scorer::AxisValues;
use rstest::rstest;

#[rstest]
// ROUND: half away from zero
#[case(RoundingFn::Round, 2.5, 0, 3.0)]
#[case(RoundingFn::Round, -2.5, 0, -3.0)]
#[case(RoundingFn::Round, 2.4, 0, 2.0)]
#[case(RoundingFn::Round, 37.5, 0, 38.0)]
#[case(RoundingFn::Round, 1.25, 1, 1.3)]
// ROUNDUP: away from zero
#[case(RoundingFn::RoundUp, 2.1, 0, 3.0)]
#[case(RoundingFn::RoundUp, -2.1, 0, -3.0)]
#[case(RoundingFn::RoundUp, 2.0, 0, 2.0)]
#[case(RoundingFn::RoundUp, 33.31, 1, 33.4)]
// ROUNDDOWN: toward zero
#[case(RoundingFn::RoundDown, 2.9, 0, 2.0)]
#[case(RoundingFn::RoundDown, -2.9, 0, -2.0)]
#[case(RoundingFn::RoundDown, 66.66, 1, 66.6)]
// BANKERS: half to even
#[case(RoundingFn::Bankers, 2.5, 0, 2.0)]
#[case(RoundingFn::Bankers, 3.5, 0, 4.0)]
#[case(RoundingFn::Bankers, 0.5, 0, 0.0)]
#[case(RoundingFn::Bankers, -2.5, 0, -2.0)]
#[case(RoundingFn::Bankers, 2.6, 0, 3.0)]
#[case(RoundingFn::Bankers, 2.4, 0, 2.0)]
#[case(RoundingFn::Bankers, 12.25, 1, 12.2)]
fn test_round_with(
    #[case] function: RoundingFn,
    #[case] value: f64,
    #[case] decimals: u32,
    #[case] expected: f64,
) {
    let got = round_with(function, value, decimals);
    assert!(
        (got - expected).abs() < 1e-9,
        "{}({}, {}) = {}, expected {}",
        function,
        value,
        decimals,
        got,
        expected
    );
}

#[test]
fn test_round_with_caps_decimals() {
    for function in [
        RoundingFn::Round,
        RoundingFn::RoundUp,
        RoundingFn::RoundDown,
        RoundingFn::Bankers,
    ] {
        assert_eq!(round_with(function, 0.0, 400), 0.0);
        assert_eq!(round_with(function, 25.0, u32::MAX), 25.0);
    }
}

#[rstest]
#[case(-5.0, 0.0)]
#[case(50.0, 50.0)]
#[case(120.0, 100.0)]
fn test_clamp(#[case] value: f64, #[case] expected: f64) {
    assert_eq!(clamp(value, 0.0, 100.0), expected);
}

#[test]
fn test_finalize_without_clamp_keeps_out_of_range_values() {
    let style = StyleBuilder::new().build();
    let out = finalize(&AxisValues::new(133.3, -4.4, 0.0, 50.0), &style);
    assert_eq!(out, AxisValues::new(133.0, -4.0, 0.0, 50.0));
}

#[test]
fn test_finalize_post_scale_rounds_after_clamp() {
    // Clamp to a fractional bound, then round: 99.6 -> 99.5 -> 100
    let style = StyleBuilder::new()
        .rounding(RoundingFn::Round, 0, RoundingStage::PostScale)
        .clamp(0.0, 99.5)
        .build();
    let out = finalize(&AxisValues::new(99.6, 10.2, 0.0, 0.0), &style);
    assert_eq!(out.d, 100.0);
    assert_eq!(out.i, 10.0);
}

#[test]
fn test_finalize_pre_display_rounds_before_clamp() {
    // Round first, then clamp: 99.6 -> 100 -> 99.5
    let style = StyleBuilder::new()
        .rounding(RoundingFn::Round, 0, RoundingStage::PreDisplay)
        .clamp(0.0, 99.5)
        .build();
    let out = finalize(&AxisValues::new(99.6, 10.2, 0.0, 0.0), &style);
    assert_eq!(out.d, 99.5);
    assert_eq!(out.i, 10.0);
}

#[test]
fn test_finalize_applies_each_axis_independently() {
    let style = StyleBuilder::new()
        .rounding(RoundingFn::Bankers, 0, RoundingStage::PostScale)
        .clamp(0.0, 100.0)
        .build();
    let out = finalize(&AxisValues::new(2.5, 3.5, 150.0, -1.0), &style);
    assert_eq!(out, AxisValues::new(2.0, 4.0, 100.0, 0.0));
}
