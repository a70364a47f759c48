use discforge::scorer::classifier::{classify, ranked_axes};
use discforge::scorer::{Axis, AxisValues};
use rstest::rstest;

#[rstest]
// Two or more eligible: top two of them
#[case(60.0, 60.0, 10.0, 10.0, "DI")]
#[case(50.0, 50.0, 0.0, 50.0, "DI")]
#[case(50.0, 0.0, 0.0, 50.0, "DC")]
#[case(55.0, 70.0, 90.0, 10.0, "SI")]
#[case(100.0, 100.0, 100.0, 100.0, "DI")]
#[case(10.0, 50.0, 50.0, 50.0, "IC")]
#[case(0.0, 0.0, 51.0, 51.0, "CS")]
// Exactly one eligible: single letter
#[case(80.0, 49.0, 30.0, 20.0, "D")]
#[case(10.0, 20.0, 30.0, 50.0, "C")]
#[case(49.9, 49.9, 50.0, 49.9, "S")]
// None eligible: top two overall
#[case(10.0, 40.0, 30.0, 20.0, "IS")]
#[case(0.0, 0.0, 0.0, 0.0, "DI")]
#[case(20.0, 10.0, 20.0, 20.0, "DC")]
#[case(5.0, 5.0, 45.0, 45.0, "CS")]
fn test_classify(
    #[case] d: f64,
    #[case] i: f64,
    #[case] s: f64,
    #[case] c: f64,
    #[case] expected: &str,
) {
    assert_eq!(classify(&AxisValues::new(d, i, s, c)), expected);
}

#[test]
fn test_single_eligible_never_pads_to_two_letters() {
    let code = classify(&AxisValues::new(10.0, 49.99, 75.0, 49.99));
    assert_eq!(code, "S");
    assert_eq!(code.len(), 1);
}

#[test]
fn test_ranked_axes_ties_follow_d_i_c_s() {
    let ranked = ranked_axes(&AxisValues::new(30.0, 30.0, 30.0, 30.0));
    let order: Vec<Axis> = ranked.iter().map(|(a, _)| *a).collect();
    assert_eq!(order, vec![Axis::D, Axis::I, Axis::C, Axis::S]);
}

#[test]
fn test_ranked_axes_sorts_descending() {
    let ranked = ranked_axes(&AxisValues::new(1.0, 4.0, 3.0, 2.0));
    let order: Vec<Axis> = ranked.iter().map(|(a, _)| *a).collect();
    assert_eq!(order, vec![Axis::I, Axis::S, Axis::C, Axis::D]);
}
