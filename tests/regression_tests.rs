mod common;

use common::{alternating_sheet, sheet};
use discforge::api::{score_payload, score_selections};
use discforge::scorer::normalizer::{Selection, StatementSelection};
use discforge::scorer::{AxisValues, DiscResult, ScoringEngine};
use discforge::config::DiscConfig;
use std::path::Path;

/// Known-good result for `A,B,A,B,...` against the embedded configuration.
fn assert_alternating_golden(result: &DiscResult) {
    assert_eq!(result.scores.natural, AxisValues::new(4.0, 4.5, 3.5, 6.0));
    assert_eq!(result.scores.response, AxisValues::new(3.5, 3.0, 3.5, 8.0));
    assert_eq!(
        result.percentages.natural,
        AxisValues::new(33.0, 38.0, 25.0, 50.0)
    );
    assert_eq!(
        result.percentages.response,
        AxisValues::new(29.0, 21.0, 29.0, 67.0)
    );
    assert_eq!(result.profile_code, "C");
}

#[test]
fn test_golden_alternating_sheet() {
    let engine = ScoringEngine::default();
    let result = engine.compute_disc(&alternating_sheet()).unwrap();
    assert_alternating_golden(&result);
}

#[test]
fn test_golden_with_shipped_config_file() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/disc_config.json");
    let engine = ScoringEngine::new(DiscConfig::load_from_file(path).unwrap());
    let result = engine.compute_disc(&alternating_sheet()).unwrap();
    assert_alternating_golden(&result);
}

#[test]
fn test_golden_spellings_agree() {
    let engine = ScoringEngine::default();
    let ordinals = engine.compute_disc(&sheet(&"12".repeat(24))).unwrap();
    let lower = engine.compute_disc(&sheet(&"ab".repeat(24))).unwrap();
    assert_alternating_golden(&ordinals);
    assert_alternating_golden(&lower);
}

#[test]
fn test_golden_through_json_payload() {
    let engine = ScoringEngine::default();
    let answers: Vec<&str> = (0..48).map(|i| if i % 2 == 0 { "A" } else { "B" }).collect();

    let bare = serde_json::to_string(&answers).unwrap();
    assert_alternating_golden(&score_payload(&engine, &bare).unwrap());

    let wrapped = serde_json::json!({ "answers": answers }).to_string();
    assert_alternating_golden(&score_payload(&engine, &wrapped).unwrap());
}

#[test]
fn test_golden_through_statement_selections() {
    let engine = ScoringEngine::default();
    let selections: Vec<StatementSelection> = (0..24)
        .flat_map(|k| {
            [
                StatementSelection {
                    statement_id: 4 * k + 1,
                    selection: Selection::Most,
                },
                StatementSelection {
                    statement_id: 4 * k + 2,
                    selection: Selection::Least,
                },
            ]
        })
        .collect();
    assert_alternating_golden(&score_selections(&engine, &selections));
}

#[test]
fn test_golden_result_json_shape() {
    let engine = ScoringEngine::default();
    let result = engine.compute_disc(&alternating_sheet()).unwrap();
    let v = serde_json::to_value(&result).unwrap();

    assert_eq!(v["profileCode"], "C");
    assert_eq!(v["percentages"]["natural"]["I"], 38.0);
    assert_eq!(v["percentages"]["response"]["C"], 67.0);
    assert_eq!(v["scores"]["natural"]["D"], 4.0);

    let back: DiscResult = serde_json::from_value(v).unwrap();
    assert_eq!(back, result);
}
